// Module exports for models

pub mod filter;
pub mod lecture;
pub mod schedule;
pub mod settings;
pub mod table;
