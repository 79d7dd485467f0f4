//! Chart configuration file
//!
//! ```toml
//! [layout]
//! padding_x = 24
//! date_format = "%d.%m."
//!
//! [style]
//! bar_color = "#2e7d32"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use bizgantt_layout::LayoutConfig;
use bizgantt_render::SvgStyle;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Both tables are optional and may be partial
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub layout: LayoutConfig,
    pub style: SvgStyle,
}

impl ChartConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
