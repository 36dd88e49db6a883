// Application layer - use cases over the domain model
pub mod dataset_repository;
pub mod heatmap_service;
