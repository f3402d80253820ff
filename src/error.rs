use std::fmt;
use std::io::{Write, stderr};
use std::panic::{self, PanicHookInfo};
use std::path::Path;

use color_eyre::eyre::Result;
use color_eyre::section::PanicMessage;

use tabalign_ui::tui::restore_terminal;

/// Installs color-eyre reports that leave the viewer's screen first.
///
/// When logging is on, panic reports point at the log file.
pub fn install_hooks(log_file: Option<&Path>) -> Result<()> {
    let mut hook_builder = color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .panic_message(ViewerPanic);
    if let Some(path) = log_file {
        hook_builder = hook_builder.panic_section(format!("Log file: {}", path.display()));
    }
    let (panic_hook, eyre_hook) = hook_builder.into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        let _ = writeln!(stderr(), "{}", panic_hook.panic_report(panic_info));
    }));

    Ok(())
}

struct ViewerPanic;

impl PanicMessage for ViewerPanic {
    fn display(&self, info: &PanicHookInfo<'_>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tabalign crashed; the terminal has been restored.")?;
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("<non-string panic payload>");
        write!(f, "Message:  {payload}")?;
        if let Some(location) = info.location() {
            write!(f, "\nLocation: {location}")?;
        }
        Ok(())
    }
}
