// Utility module exports

pub mod schedule_parser;
pub mod time_slots;
