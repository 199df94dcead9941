// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON chart configuration.
//!
//! Every field is optional; missing fields take the built-in defaults. Example:
//!
//! ```json
//! { "screen_width": 120, "divide_every_h": 12, "glyphs": { "bar": "#" } }
//! ```

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::render::{
    ChartGlyphs, ChartOptions, GlyphError, DEFAULT_DIVIDE_EVERY_H, DEFAULT_SCREEN_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub screen_width: usize,
    /// `0` disables divisions.
    pub divide_every_h: u32,
    pub glyphs: ChartGlyphs,
    pub max_label_width: Option<usize>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            divide_every_h: DEFAULT_DIVIDE_EVERY_H,
            glyphs: ChartGlyphs::default(),
            max_label_width: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    ZeroScreenWidth,
    Glyphs(GlyphError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            Self::Json {
                path: Some(path),
                source,
            } => write!(f, "invalid config {}: {source}", path.display()),
            Self::Json { path: None, source } => write!(f, "invalid config: {source}"),
            Self::ZeroScreenWidth => f.write_str("screen_width must be at least 1"),
            Self::Glyphs(err) => write!(f, "invalid glyphs: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::ZeroScreenWidth => None,
            Self::Glyphs(err) => Some(err),
        }
    }
}

impl From<GlyphError> for ConfigError {
    fn from(value: GlyphError) -> Self {
        Self::Glyphs(value)
    }
}

impl ChartConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&src).map_err(|source| ConfigError::Json {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    pub fn from_json_str(src: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(src).map_err(|source| ConfigError::Json { path: None, source })
    }

    pub fn into_options(self) -> Result<ChartOptions, ConfigError> {
        if self.screen_width == 0 {
            return Err(ConfigError::ZeroScreenWidth);
        }
        self.glyphs.validate()?;

        Ok(ChartOptions {
            screen_width: self.screen_width,
            divide_every_h: (self.divide_every_h > 0).then_some(self.divide_every_h),
            glyphs: self.glyphs,
            max_label_width: self.max_label_width,
        })
    }
}
