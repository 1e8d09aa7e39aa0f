pub mod data_structs;
pub mod error;
pub mod loader;
pub mod writer;
