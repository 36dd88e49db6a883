// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod dataset_source;
pub mod http_response;
pub mod svg_writer;
