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

use rpm_model::RpmError;
use crate::export::ExportError;
use crate::settings::SettingsError;

#[derive(thiserror::Error, Debug)]
pub enum RunError {
    #[error("{0}")]
    Settings(#[from] SettingsError),
    #[error("invalid generation parameters. {0}")]
    Model(#[from] RpmError),
    #[error("export failed. {0}")]
    Export(#[from] ExportError)
}
