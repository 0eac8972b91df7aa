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

//! Rotational speed model for a driven wheel.
//!
//! [`compute_rpm`] converts an angular velocity, wheel radius and transmission ratio into
//! revolutions per minute. [`generate`] builds synthetic [`Dataset`]s by sampling the angular
//! velocity and wheel radius from user supplied ranges.

pub mod error;
pub mod calculator;
pub mod dataset;
pub mod generator;

pub use error::{Result, RpmError};
pub use calculator::{compute_rpm, SampleInput};
pub use dataset::{Dataset, DatasetSummary, Measurement};
pub use generator::{generate, GenerationRequest, SampleRange};
