// Domain layer - pure heatmap model, no I/O
pub mod color;
pub mod format;
pub mod heatmap;
pub mod scale;
pub mod tooltip;
pub mod variance;
