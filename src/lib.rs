pub mod args;
pub mod config;
pub mod data;
pub mod model;
pub mod utils;
