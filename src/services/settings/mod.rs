// Settings service module

mod service;

pub use service::{ConfigService, CONFIG_ENV_VAR};
