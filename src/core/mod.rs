pub mod config;
pub mod currency;
pub mod errors;
pub mod kernel;
pub mod types;
