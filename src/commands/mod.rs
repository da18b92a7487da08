pub mod context;
pub mod init;
pub mod lint;

pub use init::{generate_config_template, run_init, run_init_impl};
pub use lint::{run_lint, run_lint_impl};
