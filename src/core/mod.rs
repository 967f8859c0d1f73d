pub mod config;
pub mod error;
pub mod map2d;
pub mod merge;
pub mod table;
pub mod types;
