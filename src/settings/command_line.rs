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

use std::path::{Path, PathBuf};
use crate::settings::{Settings, SettingsError};

pub const USAGE: &'static str = "\
Usage: rpm-sampler [OPTIONS]

Generate a synthetic set of wheel rpm measurements and save them as CSV.

Options:
  -c, --config <FILE>               Load settings from FILE instead of rpm-sampler-conf.toml
  -n, --measurements <N>            Number of measurements to generate
  -a, --angular-velocity <LOW:HIGH> Angular velocity range in rad/s
  -r, --wheel-radius <LOW:HIGH>     Wheel radius range in metres
  -t, --transmission-ratio <T>      Transmission ratio used for every measurement
  -o, --output <FILE>               CSV file to write
  -s, --seed <SEED>                 Seed for the random source
      --log-level <LEVEL>           One of trace, debug, info, warn, error
      --save-config <FILE>          Write the effective settings to FILE
  -q, --quiet                       Don't print the generated data
  -h, --help                        Print this help
";

/// Options gathered from the process arguments. Value flags are turned into
/// `(key, value)` overrides that sit on top of every other settings source
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommandLine {
    config_file: Option<PathBuf>,
    save_config: Option<PathBuf>,
    overrides: Vec<(&'static str, String)>,
    quiet: bool,
    help: bool
}

impl CommandLine {
    pub fn parse<I>(args: I) -> Result<CommandLine, SettingsError>
        where I: IntoIterator<Item=String>
    {
        let mut command_line = CommandLine::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let (flag, inline_value) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
                _ => (arg.clone(), None)
            };
            let mut value = || -> Result<String, SettingsError> {
                match inline_value.clone().or_else(|| args.next()) {
                    Some(v) => Ok(v),
                    None => Err(SettingsError::Argument(format!("missing value for `{}`", flag)))
                }
            };
            match flag.as_str() {
                "-h" | "--help" => command_line.help = true,
                "-q" | "--quiet" => command_line.quiet = true,
                "-c" | "--config" => command_line.config_file = Some(PathBuf::from(value()?)),
                "--save-config" => command_line.save_config = Some(PathBuf::from(value()?)),
                "-n" | "--measurements" => {
                    let count = value()?;
                    parse_number::<usize>(&flag, &count)?;
                    command_line.overrides.push((Settings::MEASUREMENTS, count));
                }
                "-a" | "--angular-velocity" => {
                    let (low, high) = parse_range(&flag, &value()?)?;
                    command_line.overrides.push((Settings::ANGULAR_VELOCITY_MIN, low));
                    command_line.overrides.push((Settings::ANGULAR_VELOCITY_MAX, high));
                }
                "-r" | "--wheel-radius" => {
                    let (low, high) = parse_range(&flag, &value()?)?;
                    command_line.overrides.push((Settings::WHEEL_RADIUS_MIN, low));
                    command_line.overrides.push((Settings::WHEEL_RADIUS_MAX, high));
                }
                "-t" | "--transmission-ratio" => {
                    let ratio = value()?;
                    parse_number::<f64>(&flag, &ratio)?;
                    command_line.overrides.push((Settings::TRANSMISSION_RATIO, ratio));
                }
                "-o" | "--output" => command_line.overrides.push((Settings::OUTPUT_PATH, value()?)),
                "-s" | "--seed" => {
                    let seed = value()?;
                    parse_number::<u64>(&flag, &seed)?;
                    command_line.overrides.push((Settings::SEED, seed));
                }
                "--log-level" => command_line.overrides.push((Settings::LOG_LEVEL, value()?)),
                _ => return Err(SettingsError::Argument(format!("unrecognised argument `{}`", arg)))
            }
        }
        Ok(command_line)
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    pub fn save_config_path(&self) -> Option<&Path> {
        self.save_config.as_deref()
    }

    pub fn overrides(&self) -> &[(&'static str, String)] {
        &self.overrides
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn help(&self) -> bool {
        self.help
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, SettingsError> {
    value.trim().parse::<T>().map_err(|_| {
        SettingsError::Argument(format!("invalid value `{}` for `{}`", value, flag))
    })
}

/// Split `LOW:HIGH` into its two bounds. Ordering is left for the model to validate
fn parse_range(flag: &str, value: &str) -> Result<(String, String), SettingsError> {
    let (low, high) = value.split_once(':').ok_or_else(|| {
        SettingsError::Argument(format!("expected LOW:HIGH for `{}`, got `{}`", flag, value))
    })?;
    parse_number::<f64>(flag, low)?;
    parse_number::<f64>(flag, high)?;
    Ok((low.trim().to_string(), high.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::settings::command_line::CommandLine;
    use crate::settings::{Settings, SettingsError};

    fn parse(args: &[&str]) -> Result<CommandLine, SettingsError> {
        CommandLine::parse(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn empty_command_line() -> Result<(), SettingsError> {
        let command_line = parse(&[])?;
        assert_eq!(command_line, CommandLine::default());
        Ok(())
    }

    #[test]
    fn value_flags_become_overrides() -> Result<(), SettingsError> {
        let command_line = parse(&["-n", "25", "--angular-velocity", "2.5:12", "--wheel-radius=0.3:0.7",
                                   "-t", "4", "-o", "out/data.csv", "--seed", "99", "--log-level", "debug"])?;
        assert_eq!(command_line.overrides(), &[
            (Settings::MEASUREMENTS, "25".to_string()),
            (Settings::ANGULAR_VELOCITY_MIN, "2.5".to_string()),
            (Settings::ANGULAR_VELOCITY_MAX, "12".to_string()),
            (Settings::WHEEL_RADIUS_MIN, "0.3".to_string()),
            (Settings::WHEEL_RADIUS_MAX, "0.7".to_string()),
            (Settings::TRANSMISSION_RATIO, "4".to_string()),
            (Settings::OUTPUT_PATH, "out/data.csv".to_string()),
            (Settings::SEED, "99".to_string()),
            (Settings::LOG_LEVEL, "debug".to_string()),
        ]);
        Ok(())
    }

    #[test]
    fn switches() -> Result<(), SettingsError> {
        let command_line = parse(&["-q", "--config", "custom.toml", "--save-config", "saved.toml"])?;
        assert!(command_line.quiet());
        assert!(!command_line.help());
        assert_eq!(command_line.config_file(), Some(Path::new("custom.toml")));
        assert_eq!(command_line.save_config_path(), Some(Path::new("saved.toml")));
        assert!(parse(&["--help"])?.help());
        Ok(())
    }

    #[test]
    fn malformed_arguments() {
        assert!(matches!(parse(&["--measurements"]), Err(SettingsError::Argument(_))));
        assert!(matches!(parse(&["--measurements", "ten"]), Err(SettingsError::Argument(_))));
        assert!(matches!(parse(&["--measurements", "-3"]), Err(SettingsError::Argument(_))));
        assert!(matches!(parse(&["--angular-velocity", "5"]), Err(SettingsError::Argument(_))));
        assert!(matches!(parse(&["--wheel-radius", "0.4:big"]), Err(SettingsError::Argument(_))));
        assert!(matches!(parse(&["--seed", "1.5"]), Err(SettingsError::Argument(_))));
        assert!(matches!(parse(&["--frobnicate"]), Err(SettingsError::Argument(_))));
    }

    #[test]
    fn reversed_range_is_left_to_the_model() -> Result<(), SettingsError> {
        let command_line = parse(&["-a", "15:5"])?;
        assert_eq!(command_line.overrides()[0], (Settings::ANGULAR_VELOCITY_MIN, "15".to_string()));
        assert_eq!(command_line.overrides()[1], (Settings::ANGULAR_VELOCITY_MAX, "5".to_string()));
        Ok(())
    }
}
