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

use std::result;

pub type Result<T> = result::Result<T, RpmError>;

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum RpmError {
    #[error("invalid range for `{name}`. lower bound {low} is greater than upper bound {high}")]
    InvalidRange {
        name: &'static str,
        low: f64,
        high: f64
    },
    #[error("invalid value {value} for `{name}`. {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str
    },
    #[error("invalid measurement count {0}. at least one measurement is required")]
    InvalidCount(usize)
}

impl RpmError {
    pub(crate) fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> RpmError {
        RpmError::InvalidParameter { name, value, reason }
    }

    pub fn is_invalid_range(&self) -> bool {
        matches!(self, RpmError::InvalidRange { .. })
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, RpmError::InvalidParameter { .. })
    }

    pub fn is_invalid_count(&self) -> bool {
        matches!(self, RpmError::InvalidCount(_))
    }
}
