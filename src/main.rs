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

mod error;
mod export;
mod report;
mod settings;

use std::env;
use std::process::ExitCode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info, Level};
use tracing_appender;
use tracing_subscriber;

use crate::error::RunError;
use crate::settings::{CommandLine, Settings};

const LOG_FILENAME: &'static str = "rpm_sampler.log";

fn main() -> ExitCode {
    let command_line = match CommandLine::parse(env::args().skip(1)) {
        Ok(command_line) => command_line,
        Err(e) => {
            eprintln!("{}\n\n{}", e, settings::command_line::USAGE);
            return ExitCode::from(2);
        }
    };
    if command_line.help() {
        print!("{}", settings::command_line::USAGE);
        return ExitCode::SUCCESS;
    }

    let settings = match Settings::load(&command_line) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let log_level = settings.log_level().unwrap_or_else(|e| {
        eprintln!("{}. Falling back to info", e);
        Level::INFO
    });
    init_logging(log_level);

    match run(&settings, &command_line) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: Level) {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, LOG_FILENAME);
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_max_level(level)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }
}

fn run(settings: &Settings, command_line: &CommandLine) -> Result<(), RunError> {
    if let Some(path) = command_line.save_config_path() {
        settings.write(path)?;
        info!("Settings written to {}", path.display());
    }

    let request = settings.generation_request()?;
    let seed = settings.seed().unwrap_or_else(|| rand::thread_rng().gen());
    info!("Generating {} measurements with seed {}", request.count(), seed);
    let dataset = request.generate(&mut StdRng::seed_from_u64(seed));

    let output_path = export::write_dataset_to_path(&dataset, &settings.output_path())?;
    if !command_line.quiet() {
        print!("{}", report::Report::new(&dataset, &request, seed));
        println!();
    }
    println!("Data saved to {}", output_path.display());
    Ok(())
}
