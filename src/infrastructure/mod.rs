// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod csv_repository;
pub mod http_response;
pub mod page;
pub mod plotly_mapper;
