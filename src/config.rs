// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tunable constants.
//!
//! Every field has a default matching the shipped UI, so a config file only needs to mention
//! what it overrides.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{LatLng, Size};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacemarkConfig {
    pub panel: PanelDimensions,
    pub search: SearchConfig,
    pub timing: TimingConfig,
    pub map: MapConfig,
}

/// Footprints and spacing for floating panels, in CSS pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelDimensions {
    pub detail_width: f64,
    pub detail_height: f64,
    pub list_width: f64,
    pub list_max_height: f64,
    /// Height of the fixed header; panels never open underneath it.
    pub header_height: f64,
    pub margin: f64,
    /// Distance kept between a relocated panel and its marker.
    pub gap: f64,
    /// How far a panel flips left when no marker footprint is known.
    pub flip_offset: f64,
    /// Added to the marker width when flipping left of a known marker.
    pub flip_padding: f64,
}

impl Default for PanelDimensions {
    fn default() -> Self {
        Self {
            detail_width: 288.0,
            detail_height: 320.0,
            list_width: 240.0,
            list_max_height: 300.0,
            header_height: 140.0,
            margin: 16.0,
            gap: 8.0,
            flip_offset: 50.0,
            flip_padding: 0.0,
        }
    }
}

impl PanelDimensions {
    pub fn detail_size(&self) -> Size {
        Size::new(self.detail_width, self.detail_height)
    }

    pub fn list_size(&self) -> Size {
        Size::new(self.list_width, self.list_max_height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Provider page size; a full first page triggers a second request.
    pub page_size: usize,
    pub max_results: usize,
    /// Planar distance in degrees the map center may drift before re-search is offered.
    pub research_threshold: f64,
    pub no_results_message: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: 15,
            max_results: 15,
            research_threshold: 0.002,
            no_results_message: "No results found".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub move_debounce_ms: u64,
    pub settle_ms: u64,
    pub search_toast_ms: u64,
    pub toast_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { move_debounce_ms: 300, settle_ms: 500, search_toast_ms: 2000, toast_ms: 3000 }
    }
}

impl TimingConfig {
    pub fn move_debounce(&self) -> Duration {
        Duration::from_millis(self.move_debounce_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn search_toast(&self) -> Duration {
        Duration::from_millis(self.search_toast_ms)
    }

    pub fn toast(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub default_center: LatLng,
    pub default_zoom: u8,
    /// Zoom level applied when the map is moved to a selected place.
    pub move_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { default_center: LatLng::new(37.5665, 126.978), default_zoom: 3, move_zoom: 6 }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "invalid config json at {}: {source}", path.display())
            }
            Self::Invalid { field, reason } => write!(f, "invalid config value {field}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}

impl PlacemarkConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_owned(), source })?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|source| ConfigError::Json { path: path.to_owned(), source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let panel = &self.panel;
        let lengths = [
            ("panel.detail_width", panel.detail_width),
            ("panel.detail_height", panel.detail_height),
            ("panel.list_width", panel.list_width),
            ("panel.list_max_height", panel.list_max_height),
            ("panel.header_height", panel.header_height),
            ("panel.margin", panel.margin),
            ("panel.gap", panel.gap),
            ("panel.flip_offset", panel.flip_offset),
            ("panel.flip_padding", panel.flip_padding),
        ];
        for (field, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected a finite non-negative length, got {value}"),
                });
            }
        }

        if self.search.page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "search.page_size",
                reason: "must be at least 1".to_owned(),
            });
        }
        let threshold = self.search.research_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::Invalid {
                field: "search.research_threshold",
                reason: format!("expected a finite non-negative distance, got {threshold}"),
            });
        }
        Ok(())
    }
}
