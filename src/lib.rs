// Monthly global temperature heatmap: dataset → scales → SVG, served over HTTP
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
