use std::path::PathBuf;

use clap::Parser;

use tabalign_domain::{AlignMode, ColumnConfig, ColumnConfigs};

/// Ratio-anchored column alignment for CSV tables
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// CSV file to align (tab-separated when it ends in .tsv)
    pub input: PathBuf,

    /// Options file; defaults to the per-user config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Column mode, e.g. `--align 2=right`; may be repeated
    #[arg(short, long, value_name = "IDX=MODE", value_parser = parse_align_override)]
    pub align: Vec<(usize, AlignMode)>,

    /// Print the aligned table once instead of opening the viewer
    #[arg(short, long)]
    pub print: bool,

    /// Container width in pixels for --print (default: 80 cells)
    #[arg(short, long, value_name = "PX", value_parser = parse_width)]
    pub width: Option<f64>,
}

impl Args {
    pub fn column_overrides(&self) -> ColumnConfigs {
        self.align
            .iter()
            .map(|&(index, mode)| (index, ColumnConfig::new(mode)))
            .collect()
    }
}

pub fn parse_align_override(value: &str) -> Result<(usize, AlignMode), String> {
    let (index, mode) = value
        .split_once('=')
        .ok_or_else(|| format!("expected IDX=MODE, got '{value}'"))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("invalid column index '{}'", index.trim()))?;
    let mode = mode.parse::<AlignMode>()?;
    Ok((index, mode))
}

pub fn parse_width(value: &str) -> Result<f64, String> {
    let width = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid width '{value}'"))?;
    if width.is_finite() && width >= 0.0 {
        Ok(width)
    } else {
        Err(format!("width must be a non-negative number of pixels, got '{value}'"))
    }
}
