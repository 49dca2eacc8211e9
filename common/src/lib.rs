pub mod config;
pub mod error;
pub mod network;
pub mod scan;

pub use error::ScanError;
