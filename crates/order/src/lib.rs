pub mod di;
pub mod repository;
pub mod service;
