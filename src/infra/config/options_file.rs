use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use tabalign_domain::{
    AlignMode, AlignmentOptions, AnchorPolicy, ColumnConfig, ColumnConfigs, FontContext,
    OptionsError, RightJustify,
};

use super::paths::default_config_path;

#[derive(Debug, thiserror::Error)]
pub enum OptionsFileError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid options file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid alignment options: {0}")]
    Invalid(#[from] OptionsError),
    #[error("invalid font: {0}")]
    InvalidFont(String),
}

/// `tabalign.toml` as written by the user. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsFile {
    pub alignment: AlignmentSection,
    pub font: FontSection,
    pub columns: Vec<ColumnEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlignmentSection {
    pub left_align_ratio: Option<f64>,
    pub right_align_ratio: Option<f64>,
    pub center_align_ratio: Option<f64>,
    pub padding: Option<f64>,
    pub auto_resize: Option<bool>,
    pub right_justify: Option<RightJustify>,
    pub anchor_policy: Option<AnchorPolicy>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontSection {
    pub family: Option<String>,
    pub size_px: Option<f64>,
    pub advance_ratio: Option<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnEntry {
    pub index: usize,
    pub align: AlignMode,
}

impl OptionsFile {
    pub fn parse(content: &str) -> Result<Self, OptionsFileError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, OptionsFileError> {
        let content = fs::read_to_string(path).map_err(|source| OptionsFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// An explicit path must exist. Without one, the per-user config file is
    /// read when present and defaults are used otherwise.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, OptionsFileError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading options file");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn alignment_options(&self) -> Result<AlignmentOptions, OptionsError> {
        let section = &self.alignment;
        let mut builder = AlignmentOptions::builder();

        if let Some(ratio) = section.left_align_ratio {
            builder = builder.left_align_ratio(ratio);
        }
        if let Some(ratio) = section.right_align_ratio {
            builder = builder.right_align_ratio(ratio);
        }
        if let Some(ratio) = section.center_align_ratio {
            builder = builder.center_align_ratio(ratio);
        }
        if let Some(padding) = section.padding {
            builder = builder.padding_px(padding);
        }
        if let Some(enabled) = section.auto_resize {
            builder = builder.auto_resize(enabled);
        }
        if let Some(policy) = section.right_justify {
            builder = builder.right_justify(policy);
        }
        if let Some(policy) = section.anchor_policy {
            builder = builder.anchor_policy(policy);
        }

        builder.build()
    }

    pub fn font_context(&self) -> Result<FontContext, OptionsFileError> {
        let defaults = FontContext::default();
        let size_px = self.font.size_px.unwrap_or(defaults.size_px);
        let advance_ratio = self.font.advance_ratio.unwrap_or(defaults.advance_ratio);

        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(OptionsFileError::InvalidFont(format!(
                "size_px must be positive, got {size_px}"
            )));
        }
        if !advance_ratio.is_finite() || advance_ratio <= 0.0 {
            return Err(OptionsFileError::InvalidFont(format!(
                "advance_ratio must be positive, got {advance_ratio}"
            )));
        }

        let family = self.font.family.clone().unwrap_or(defaults.family);
        Ok(FontContext::new(family, size_px, advance_ratio))
    }

    /// Later entries for the same index win.
    pub fn column_configs(&self) -> ColumnConfigs {
        self.columns
            .iter()
            .map(|entry| (entry.index, ColumnConfig::new(entry.align)))
            .collect()
    }
}
