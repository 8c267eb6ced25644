// Application layer - Use cases over the loaded dataset
pub mod controller;
pub mod launch_repository;
pub mod layout_builder;
pub mod pie_aggregator;
pub mod scatter_filter;
