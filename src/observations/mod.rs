pub mod data_store;
pub mod decode;
pub mod error;
