pub use tabalign_app as app;
pub use tabalign_domain as domain;
pub use tabalign_infra as infra;
pub use tabalign_ui as ui;

pub mod cli;
pub mod error;
pub mod logging;
