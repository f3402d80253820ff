//! Process-wide alignment settings.
//!
//! Options are resolved and validated once in [`AlignmentOptionsBuilder::build`];
//! an [`AlignmentOptions`] value is immutable afterwards, so the alignment
//! core never sees an out-of-range ratio or a negative padding.

use super::align::{AnchorPolicy, RightJustify};

pub const DEFAULT_LEFT_ALIGN_RATIO: f64 = 0.1;
pub const DEFAULT_RIGHT_ALIGN_RATIO: f64 = 0.5;
pub const DEFAULT_CENTER_ALIGN_RATIO: f64 = 0.5;
pub const DEFAULT_PADDING_PX: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("{name} must be within [0, 1], got {value}")]
    RatioOutOfRange { name: &'static str, value: f64 },
    #[error("padding must not be negative, got {0}")]
    NegativePadding(f64),
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentOptions {
    left_align_ratio: f64,
    right_align_ratio: f64,
    center_align_ratio: f64,
    padding_px: f64,
    auto_resize: bool,
    right_justify: RightJustify,
    anchor_policy: AnchorPolicy,
}

impl Default for AlignmentOptions {
    fn default() -> Self {
        Self {
            left_align_ratio: DEFAULT_LEFT_ALIGN_RATIO,
            right_align_ratio: DEFAULT_RIGHT_ALIGN_RATIO,
            center_align_ratio: DEFAULT_CENTER_ALIGN_RATIO,
            padding_px: DEFAULT_PADDING_PX,
            auto_resize: true,
            right_justify: RightJustify::default(),
            anchor_policy: AnchorPolicy::default(),
        }
    }
}

impl AlignmentOptions {
    pub fn builder() -> AlignmentOptionsBuilder {
        AlignmentOptionsBuilder::default()
    }

    pub fn left_align_ratio(&self) -> f64 {
        self.left_align_ratio
    }

    pub fn right_align_ratio(&self) -> f64 {
        self.right_align_ratio
    }

    pub fn center_align_ratio(&self) -> f64 {
        self.center_align_ratio
    }

    /// Extra pixels added to each column's measured content width.
    pub fn padding_px(&self) -> f64 {
        self.padding_px
    }

    pub fn auto_resize(&self) -> bool {
        self.auto_resize
    }

    pub fn right_justify(&self) -> RightJustify {
        self.right_justify
    }

    pub fn anchor_policy(&self) -> AnchorPolicy {
        self.anchor_policy
    }
}

/// Unset fields fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct AlignmentOptionsBuilder {
    left_align_ratio: Option<f64>,
    right_align_ratio: Option<f64>,
    center_align_ratio: Option<f64>,
    padding_px: Option<f64>,
    auto_resize: Option<bool>,
    right_justify: Option<RightJustify>,
    anchor_policy: Option<AnchorPolicy>,
}

impl AlignmentOptionsBuilder {
    pub fn left_align_ratio(mut self, ratio: f64) -> Self {
        self.left_align_ratio = Some(ratio);
        self
    }

    pub fn right_align_ratio(mut self, ratio: f64) -> Self {
        self.right_align_ratio = Some(ratio);
        self
    }

    pub fn center_align_ratio(mut self, ratio: f64) -> Self {
        self.center_align_ratio = Some(ratio);
        self
    }

    pub fn padding_px(mut self, padding: f64) -> Self {
        self.padding_px = Some(padding);
        self
    }

    pub fn auto_resize(mut self, enabled: bool) -> Self {
        self.auto_resize = Some(enabled);
        self
    }

    pub fn right_justify(mut self, policy: RightJustify) -> Self {
        self.right_justify = Some(policy);
        self
    }

    pub fn anchor_policy(mut self, policy: AnchorPolicy) -> Self {
        self.anchor_policy = Some(policy);
        self
    }

    pub fn build(self) -> Result<AlignmentOptions, OptionsError> {
        let defaults = AlignmentOptions::default();

        let left_align_ratio = validate_ratio(
            "left_align_ratio",
            self.left_align_ratio.unwrap_or(defaults.left_align_ratio),
        )?;
        let right_align_ratio = validate_ratio(
            "right_align_ratio",
            self.right_align_ratio.unwrap_or(defaults.right_align_ratio),
        )?;
        let center_align_ratio = validate_ratio(
            "center_align_ratio",
            self.center_align_ratio.unwrap_or(defaults.center_align_ratio),
        )?;

        let padding_px = self.padding_px.unwrap_or(defaults.padding_px);
        if !padding_px.is_finite() {
            return Err(OptionsError::NotFinite("padding"));
        }
        if padding_px < 0.0 {
            return Err(OptionsError::NegativePadding(padding_px));
        }

        Ok(AlignmentOptions {
            left_align_ratio,
            right_align_ratio,
            center_align_ratio,
            padding_px,
            auto_resize: self.auto_resize.unwrap_or(defaults.auto_resize),
            right_justify: self.right_justify.unwrap_or(defaults.right_justify),
            anchor_policy: self.anchor_policy.unwrap_or(defaults.anchor_policy),
        })
    }
}

fn validate_ratio(name: &'static str, value: f64) -> Result<f64, OptionsError> {
    if !value.is_finite() {
        return Err(OptionsError::NotFinite(name));
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(OptionsError::RatioOutOfRange { name, value });
    }
    Ok(value)
}
