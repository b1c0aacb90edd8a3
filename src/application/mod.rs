// Application layer - Use cases and repository ports
pub mod chart_service;
pub mod record_repository;
