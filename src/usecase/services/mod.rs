pub mod list_service;
pub mod mutation_service;
