// Service module exports

pub mod catalog;
pub mod diagnostics;
pub mod filter;
pub mod pagination;
pub mod placement;
pub mod session;
pub mod settings;
pub mod tables;
