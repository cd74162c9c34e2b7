pub mod api;
pub mod config;
pub mod generator;
pub mod models;
pub mod reading_store;
pub mod readings;
