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

use std::{fs, io};
use std::path::{Path, PathBuf};
use rpm_model::Dataset;
use tracing::info;

/// Column titles expected by existing consumers of the exported file
pub const CSV_HEADER: [&'static str; 4] = [
    "Velocidad Angular (rad/s)",
    "Radio de la Rueda (m)",
    "Relación de Transmisión",
    "RPM"
];

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("io error. {0}")]
    IoError(#[from] io::Error),
    #[error("csv encoding error. {0}")]
    CsvError(#[from] csv::Error),
    #[error("failed to write `{0}`. {1}")]
    FailedToWrite(String, String)
}

pub fn write_dataset_to_writer<W: io::Write>(dataset: &Dataset, writer: W) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(&CSV_HEADER)?;
    for measurement in dataset {
        writer.write_record(&[
            measurement.angular_velocity().to_string(),
            measurement.wheel_radius().to_string(),
            measurement.transmission_ratio().to_string(),
            measurement.rpm().to_string()
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `dataset` to `path`, replacing anything already there. Missing parent
/// directories are created
pub fn write_dataset_to_path(dataset: &Dataset, path: &Path) -> Result<PathBuf, ExportError> {
    let failed_to_write = |err: String| {
        ExportError::FailedToWrite(path.display().to_string(), err)
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            fs::create_dir_all(parent).map_err(|e| failed_to_write(e.to_string()))?;
        }
    }
    let file = fs::File::create(path).map_err(|e| failed_to_write(e.to_string()))?;
    write_dataset_to_writer(dataset, file).map_err(|e| failed_to_write(e.to_string()))?;
    info!("Wrote {} measurements to {}", dataset.len(), path.display());
    Ok(path.to_path_buf())
}
