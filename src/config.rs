//! # Configuration Management
//!
//! Loads runtime configuration from `tide-config.toml`: the NOAA station
//! query parameters and the chart geometry. A missing or invalid file
//! falls back to the defaults (Portland, ME) with a note on stderr.

use crate::renderer::Margins;
use crate::tide_data::TideFetchOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration loaded from tide-config.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// NOAA station and query configuration
    pub station: StationConfig,
    /// Chart surface and margin configuration
    pub chart: ChartConfig,
}

/// NOAA tide station query configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct StationConfig {
    /// NOAA station ID (e.g., "8418150" for Portland, ME)
    pub id: String,
    /// Human-readable station name for reference
    pub name: String,
    /// Vertical datum (e.g., "MLLW")
    pub datum: String,
    /// Timezone convention (e.g., "LST_LDT")
    pub timezone: String,
    /// Unit system ("english" or "metric")
    pub units: String,
    /// Clock format of time fields ("12hour")
    pub clock: String,
    /// Decimal places in height fields
    pub decimal_places: u8,
}

/// Chart surface and margin configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ChartConfig {
    /// Drawing surface width in pixels
    pub width: u32,
    /// Drawing surface height in pixels
    pub height: u32,
    pub margin_top: f32,
    pub margin_right: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    /// Optional output file; stdout when absent
    pub output: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let margins = Margins::default();
        Config {
            station: StationConfig {
                id: "8418150".to_string(),
                name: "Portland, ME".to_string(),
                datum: "MLLW".to_string(),
                timezone: "LST_LDT".to_string(),
                units: "english".to_string(),
                clock: "12hour".to_string(),
                decimal_places: 2,
            },
            chart: ChartConfig {
                width: 700,
                height: 300,
                margin_top: margins.top,
                margin_right: margins.right,
                margin_bottom: margins.bottom,
                margin_left: margins.left,
                output: None,
            },
        }
    }
}

impl StationConfig {
    /// Build fetch options from the station section.
    pub fn fetch_options(&self) -> TideFetchOptions {
        TideFetchOptions {
            station_id: self.id.clone(),
            datum: self.datum.clone(),
            timezone: self.timezone.clone(),
            units: self.units.clone(),
            clock: self.clock.clone(),
            decimal_places: self.decimal_places,
        }
    }
}

impl ChartConfig {
    pub fn margins(&self) -> Margins {
        Margins {
            top: self.margin_top,
            right: self.margin_right,
            bottom: self.margin_bottom,
            left: self.margin_left,
        }
    }
}

impl Config {
    /// Load configuration from tide-config.toml.
    /// Falls back to the default configuration if the file is missing or invalid.
    pub fn load() -> Self {
        Self::load_from_path("tide-config.toml")
    }

    /// Load configuration from the specified path.
    /// Falls back to the default configuration if the file is missing or invalid.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Invalid config file format: {}", e);
                    eprintln!("Using default configuration (Portland, ME)");
                    Self::default()
                }
            },
            Err(_) => {
                eprintln!("Info: No config file found, using default configuration (Portland, ME)");
                Self::default()
            }
        }
    }
}
