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

use std::slice::Iter;
use itertools::Itertools;
use statrs::statistics::Statistics;

/// A single generated row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    angular_velocity: f64,
    wheel_radius: f64,
    transmission_ratio: f64,
    rpm: f64
}

impl Measurement {
    pub(crate) fn new(angular_velocity: f64, wheel_radius: f64, transmission_ratio: f64, rpm: f64) -> Measurement {
        Measurement { angular_velocity, wheel_radius, transmission_ratio, rpm }
    }

    /// rad/s
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// metres
    pub fn wheel_radius(&self) -> f64 {
        self.wheel_radius
    }

    pub fn transmission_ratio(&self) -> f64 {
        self.transmission_ratio
    }

    pub fn rpm(&self) -> f64 {
        self.rpm
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    measurements: Vec<Measurement>
}

impl Dataset {
    pub(crate) fn with_capacity(capacity: usize) -> Dataset {
        Dataset { measurements: Vec::with_capacity(capacity) }
    }

    pub(crate) fn push(&mut self, measurement: Measurement) {
        self.measurements.push(measurement)
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Measurement> {
        self.measurements.iter()
    }

    /// The measurements in the order they were generated
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn into_measurements(self) -> Vec<Measurement> {
        self.measurements
    }

    /// (angular velocity, rpm) pairs ordered by angular velocity. For a fixed wheel radius
    /// and transmission ratio the rpm rises in direct proportion to the angular velocity
    pub fn rpm_by_angular_velocity(&self) -> Vec<(f64, f64)> {
        self.plot_points(Measurement::angular_velocity)
    }

    /// (wheel radius, rpm) pairs ordered by wheel radius. For a fixed angular velocity
    /// and transmission ratio the rpm falls in inverse proportion to the wheel radius
    pub fn rpm_by_wheel_radius(&self) -> Vec<(f64, f64)> {
        self.plot_points(Measurement::wheel_radius)
    }

    fn plot_points(&self, x_value: fn(&Measurement) -> f64) -> Vec<(f64, f64)> {
        self.measurements.iter()
            .map(|m| (x_value(m), m.rpm))
            .sorted_by(|a, b| a.0.total_cmp(&b.0))
            .collect()
    }

    pub fn summary(&self) -> Option<DatasetSummary> {
        if self.measurements.is_empty() {
            return None;
        }
        let rpm_values: Vec<f64> = self.measurements.iter().map(|m| m.rpm).collect();
        let rpm_values = rpm_values.as_slice();
        Some(DatasetSummary {
            count: rpm_values.len(),
            min_rpm: Statistics::min(rpm_values),
            max_rpm: Statistics::max(rpm_values),
            mean_rpm: Statistics::mean(rpm_values),
            std_dev_rpm: Statistics::std_dev(rpm_values)
        })
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Measurement;
    type IntoIter = Iter<'a, Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.measurements.iter()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DatasetSummary {
    pub count: usize,
    pub min_rpm: f64,
    pub max_rpm: f64,
    pub mean_rpm: f64,
    /// Sample standard deviation. NaN when the dataset holds a single measurement
    pub std_dev_rpm: f64
}
