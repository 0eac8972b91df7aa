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

use std::f64::consts::PI;
use crate::error::{Result, RpmError};

pub const ANGULAR_VELOCITY: &'static str = "angular_velocity";
pub const WHEEL_RADIUS: &'static str = "wheel_radius";
pub const TRANSMISSION_RATIO: &'static str = "transmission_ratio";
pub const RPM: &'static str = "rpm";

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Calculate the rotational speed (revolutions per minute) of a wheel
///
/// - `angular_velocity`: rad/s of the driving component. Must be finite and not negative
/// - `wheel_radius`: metres. Must be finite and greater than zero
/// - `transmission_ratio`: dimensionless divider between the driving component and the wheel.
///   Must be finite and greater than zero
///
/// Inputs that would make the denominator zero (or produce a NaN/infinite result) are rejected
/// with [`RpmError::InvalidParameter`]
pub fn compute_rpm(angular_velocity: f64, wheel_radius: f64, transmission_ratio: f64) -> Result<f64> {
    validate_angular_velocity(angular_velocity)?;
    validate_positive(WHEEL_RADIUS, wheel_radius)?;
    validate_positive(TRANSMISSION_RATIO, transmission_ratio)?;
    checked_rpm(angular_velocity, wheel_radius, transmission_ratio)
}

/// Evaluate the formula on already validated inputs, rejecting a denominator that
/// underflows to zero and a result that overflows
pub(crate) fn checked_rpm(angular_velocity: f64, wheel_radius: f64, transmission_ratio: f64) -> Result<f64> {
    let denominator = 2.0 * PI * wheel_radius * transmission_ratio;
    if denominator == 0.0 {
        return Err(RpmError::invalid_parameter(WHEEL_RADIUS, wheel_radius,
                                               "wheel radius * transmission ratio is too small to divide by"));
    }
    let rpm = (angular_velocity * SECONDS_PER_MINUTE) / denominator;
    if !rpm.is_finite() {
        return Err(RpmError::invalid_parameter(RPM, rpm, "result is too large to represent"));
    }
    Ok(rpm)
}

/// Only for inputs bounded by a range whose worst case already passed [`checked_rpm`]
pub(crate) fn rpm_unchecked(angular_velocity: f64, wheel_radius: f64, transmission_ratio: f64) -> f64 {
    (angular_velocity * SECONDS_PER_MINUTE) / (2.0 * PI * wheel_radius * transmission_ratio)
}

pub(crate) fn validate_angular_velocity(value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(RpmError::invalid_parameter(ANGULAR_VELOCITY, value, "value must be finite"));
    }
    if value < 0.0 {
        return Err(RpmError::invalid_parameter(ANGULAR_VELOCITY, value, "value must not be negative"));
    }
    Ok(())
}

pub(crate) fn validate_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(RpmError::invalid_parameter(name, value, "value must be finite"));
    }
    if value <= 0.0 {
        return Err(RpmError::invalid_parameter(name, value, "value must be greater than zero"));
    }
    Ok(())
}

/// The physical inputs for a single rpm calculation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleInput {
    pub angular_velocity: f64,
    pub wheel_radius: f64,
    pub transmission_ratio: f64
}

impl SampleInput {
    pub fn new(angular_velocity: f64, wheel_radius: f64, transmission_ratio: f64) -> SampleInput {
        SampleInput { angular_velocity, wheel_radius, transmission_ratio }
    }

    pub fn rpm(&self) -> Result<f64> {
        compute_rpm(self.angular_velocity, self.wheel_radius, self.transmission_ratio)
    }
}
