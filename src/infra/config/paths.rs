use std::fs;
use std::io;
use std::path::PathBuf;

const APP_DIR: &str = "tabalign";

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

pub fn log_dir() -> io::Result<PathBuf> {
    let cache_base = dirs::cache_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Could not find cache directory"))?;
    let dir = cache_base.join(APP_DIR);

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_ends_with_app_file() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("tabalign/config.toml"));
        }
    }
}
