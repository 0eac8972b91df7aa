/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of rpm-sampler.
 *
 * rpm-sampler is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * rpm-sampler is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with rpm-sampler. If not, see <https://www.gnu.org/licenses/>.
 */

pub mod command_line;

use std::{fs, io};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use config::{Config, ConfigError};
use rpm_model::GenerationRequest;
use serde::{Deserialize, Serialize};
use tracing::Level;

pub use command_line::CommandLine;

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to load settings. {0}")]
    Config(#[from] ConfigError),
    #[error("invalid argument. {0}")]
    Argument(String),
    #[error("failed to encode settings. {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("failed to write `{0}`. {1}")]
    FailedToWrite(String, io::Error)
}

/// Everything needed for a single run. Values are layered, lowest priority first, from the
/// built-in defaults, the settings file, `RPM_SAMPLER_*` environment variables and finally
/// the command line
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    measurements: usize,
    angular_velocity_min: f64,
    angular_velocity_max: f64,
    wheel_radius_min: f64,
    wheel_radius_max: f64,
    transmission_ratio: f64,
    output_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    log_level: String
}

impl Settings {
    pub const MEASUREMENTS: &'static str = "measurements";
    pub const ANGULAR_VELOCITY_MIN: &'static str = "angular_velocity_min";
    pub const ANGULAR_VELOCITY_MAX: &'static str = "angular_velocity_max";
    pub const WHEEL_RADIUS_MIN: &'static str = "wheel_radius_min";
    pub const WHEEL_RADIUS_MAX: &'static str = "wheel_radius_max";
    pub const TRANSMISSION_RATIO: &'static str = "transmission_ratio";
    pub const OUTPUT_PATH: &'static str = "output_path";
    pub const SEED: &'static str = "seed";
    pub const LOG_LEVEL: &'static str = "log_level";
    const CONFIG_FILENAME: &'static str = "rpm-sampler-conf";
    const ENV_PREFIX: &'static str = "RPM_SAMPLER";

    pub fn load(command_line: &CommandLine) -> Result<Self, SettingsError> {
        let file_source = match command_line.config_file() {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(Settings::CONFIG_FILENAME).required(false)
        };
        let mut builder = Settings::builder_with_defaults()?
            .add_source(file_source)
            .add_source(config::Environment::with_prefix(Settings::ENV_PREFIX).try_parsing(true));
        for (key, value) in command_line.overrides() {
            builder = builder.set_override(*key, value.as_str())?;
        }
        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn defaults() -> Result<Self, SettingsError> {
        Ok(Settings::builder_with_defaults()?.build()?.try_deserialize()?)
    }

    fn builder_with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default(Settings::MEASUREMENTS, 10_i64)?
            .set_default(Settings::ANGULAR_VELOCITY_MIN, 5.0)?
            .set_default(Settings::ANGULAR_VELOCITY_MAX, 15.0)?
            .set_default(Settings::WHEEL_RADIUS_MIN, 0.4)?
            .set_default(Settings::WHEEL_RADIUS_MAX, 0.6)?
            .set_default(Settings::TRANSMISSION_RATIO, 10.0)?
            .set_default(Settings::OUTPUT_PATH, "tractor_data.csv")?
            .set_default(Settings::LOG_LEVEL, "info")
    }

    pub fn generation_request(&self) -> rpm_model::Result<GenerationRequest> {
        GenerationRequest::new(self.measurements,
                               (self.angular_velocity_min, self.angular_velocity_max),
                               (self.wheel_radius_min, self.wheel_radius_max),
                               self.transmission_ratio)
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_path)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn log_level(&self) -> Result<Level, SettingsError> {
        Level::from_str(self.log_level.trim()).map_err(|_| {
            SettingsError::Argument(format!("unknown log level `{}`", self.log_level))
        })
    }

    pub fn write(&self, path: &Path) -> Result<(), SettingsError> {
        let encoded = toml::to_string_pretty(&self)?;
        fs::write(path, encoded).map_err(|e| {
            SettingsError::FailedToWrite(path.display().to_string(), e)
        })
    }
}
