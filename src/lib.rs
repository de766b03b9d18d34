pub mod app;
pub mod config;
pub mod logic;
pub mod model;
