pub mod clean;
pub mod config_cmd;

pub use clean::execute_clean;
pub use config_cmd::execute_config;
