pub mod options_file;
pub mod paths;

pub use options_file::{OptionsFile, OptionsFileError};
pub use paths::{default_config_path, log_dir};
