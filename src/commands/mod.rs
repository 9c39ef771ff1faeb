pub mod check;
pub mod config;
pub mod init;

mod context;

pub use check::run_check;
pub use config::{run_config, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
