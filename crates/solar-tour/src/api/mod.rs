pub mod host;
pub mod types;
