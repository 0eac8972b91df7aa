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

use std::fmt;
use std::fmt::{Display, Formatter};
use rpm_model::{Dataset, DatasetSummary, GenerationRequest};
use crate::export::CSV_HEADER;

const VALUE_WIDTH: usize = 26;

/// The generated batch as shown on the terminal: the rows in generation order, summary
/// statistics and the two chart series
pub struct Report<'a> {
    dataset: &'a Dataset,
    request: &'a GenerationRequest,
    seed: u64
}

impl<'a> Report<'a> {
    pub fn new(dataset: &'a Dataset, request: &'a GenerationRequest, seed: u64) -> Report<'a> {
        Report { dataset, request, seed }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated {} measurements (seed {})", self.dataset.len(), self.seed)?;
        writeln!(f, "  angular velocity {:.2} - {:.2} rad/s, wheel radius {:.2} - {:.2} m, transmission ratio {}",
                 self.request.angular_velocity_range().low(), self.request.angular_velocity_range().high(),
                 self.request.wheel_radius_range().low(), self.request.wheel_radius_range().high(),
                 self.request.transmission_ratio())?;
        writeln!(f)?;

        for title in CSV_HEADER {
            write!(f, "{:>width$}", title, width = VALUE_WIDTH)?;
        }
        writeln!(f)?;
        for measurement in self.dataset {
            writeln!(f, "{:>width$.4}{:>width$.4}{:>width$.2}{:>width$.4}",
                     measurement.angular_velocity(),
                     measurement.wheel_radius(),
                     measurement.transmission_ratio(),
                     measurement.rpm(),
                     width = VALUE_WIDTH)?;
        }

        if let Some(summary) = self.dataset.summary() {
            writeln!(f)?;
            write_summary(f, &summary)?;
        }

        write_series(f, "RPM vs angular velocity (rad/s)", &self.dataset.rpm_by_angular_velocity())?;
        write_series(f, "RPM vs wheel radius (m)", &self.dataset.rpm_by_wheel_radius())
    }
}

fn write_summary(f: &mut Formatter<'_>, summary: &DatasetSummary) -> fmt::Result {
    write!(f, "RPM min {:.4}, max {:.4}, mean {:.4}, std dev ",
           summary.min_rpm, summary.max_rpm, summary.mean_rpm)?;
    // A single sample has no spread
    if summary.count > 1 {
        writeln!(f, "{:.4}", summary.std_dev_rpm)
    } else {
        writeln!(f, "-")
    }
}

fn write_series(f: &mut Formatter<'_>, title: &str, points: &[(f64, f64)]) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}:", title)?;
    for (x, rpm) in points {
        writeln!(f, "  {:>10.4} -> {:>10.4}", x, rpm)?;
    }
    Ok(())
}
