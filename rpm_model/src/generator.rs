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

use rand::Rng;
use tracing::debug;
use crate::calculator::{checked_rpm, rpm_unchecked, validate_angular_velocity, validate_positive, ANGULAR_VELOCITY, TRANSMISSION_RATIO, WHEEL_RADIUS};
use crate::dataset::{Dataset, Measurement};
use crate::error::{Result, RpmError};

/// An inclusive `[low, high]` interval that values are drawn from uniformly
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleRange {
    low: f64,
    high: f64
}

impl SampleRange {
    pub fn new(name: &'static str, low: f64, high: f64) -> Result<SampleRange> {
        for bound in [low, high] {
            if !bound.is_finite() {
                return Err(RpmError::invalid_parameter(name, bound, "range bounds must be finite"));
            }
        }
        if low > high {
            return Err(RpmError::InvalidRange { name, low, high });
        }
        // Uniform sampling scales the width by just under one; that scale has to stay finite
        let width = high - low;
        if !(width / (1.0 - f64::EPSILON)).is_finite() {
            return Err(RpmError::invalid_parameter(name, width, "range is too wide to sample from"));
        }
        Ok(SampleRange { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.low == self.high {
            return self.low;
        }
        rng.gen_range(self.low..=self.high)
    }
}

/// A fully validated generation request. Building one checks every parameter so that
/// [`GenerationRequest::generate`] cannot fail
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationRequest {
    count: usize,
    angular_velocity_range: SampleRange,
    wheel_radius_range: SampleRange,
    transmission_ratio: f64
}

impl GenerationRequest {
    pub fn new(count: usize,
               angular_velocity_range: (f64, f64),
               wheel_radius_range: (f64, f64),
               transmission_ratio: f64) -> Result<GenerationRequest>
    {
        if count == 0 {
            return Err(RpmError::InvalidCount(count));
        }

        let angular_velocity_range = SampleRange::new(ANGULAR_VELOCITY,
                                                      angular_velocity_range.0,
                                                      angular_velocity_range.1)?;
        validate_angular_velocity(angular_velocity_range.low())?;

        let wheel_radius_range = SampleRange::new(WHEEL_RADIUS,
                                                  wheel_radius_range.0,
                                                  wheel_radius_range.1)?;
        validate_positive(WHEEL_RADIUS, wheel_radius_range.low())?;

        validate_positive(TRANSMISSION_RATIO, transmission_ratio)?;

        // rpm rises with angular velocity and falls with wheel radius, so this pairing bounds every sample
        checked_rpm(angular_velocity_range.high(), wheel_radius_range.low(), transmission_ratio)?;

        Ok(GenerationRequest { count, angular_velocity_range, wheel_radius_range, transmission_ratio })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn angular_velocity_range(&self) -> SampleRange {
        self.angular_velocity_range
    }

    pub fn wheel_radius_range(&self) -> SampleRange {
        self.wheel_radius_range
    }

    pub fn transmission_ratio(&self) -> f64 {
        self.transmission_ratio
    }

    /// Draw `count` independent samples. Angular velocity and wheel radius are each drawn
    /// uniformly from their own range while the transmission ratio stays fixed
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Dataset {
        debug!("Generating {} measurements. angular velocity {:?}, wheel radius {:?}, transmission ratio {}",
               self.count, self.angular_velocity_range, self.wheel_radius_range, self.transmission_ratio);
        let mut dataset = Dataset::with_capacity(self.count);
        for _ in 0..self.count {
            let angular_velocity = self.angular_velocity_range.sample(rng);
            let wheel_radius = self.wheel_radius_range.sample(rng);
            let rpm = rpm_unchecked(angular_velocity, wheel_radius, self.transmission_ratio);
            dataset.push(Measurement::new(angular_velocity, wheel_radius, self.transmission_ratio, rpm));
        }
        dataset
    }
}

/// Validate the parameters and generate a fresh dataset from `rng`
pub fn generate<R: Rng + ?Sized>(count: usize,
                                 angular_velocity_range: (f64, f64),
                                 wheel_radius_range: (f64, f64),
                                 transmission_ratio: f64,
                                 rng: &mut R) -> Result<Dataset>
{
    let request = GenerationRequest::new(count, angular_velocity_range, wheel_radius_range, transmission_ratio)?;
    Ok(request.generate(rng))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::calculator::{compute_rpm, RPM, TRANSMISSION_RATIO, WHEEL_RADIUS};
    use crate::error::RpmError;
    use crate::generator::{generate, GenerationRequest, SampleRange};

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn returns_requested_count() -> Result<(), RpmError> {
        let mut rng = seeded_rng();
        for count in [1, 5, 10, 50, 1000] {
            let dataset = generate(count, (5.0, 15.0), (0.4, 0.6), 10.0, &mut rng)?;
            assert_eq!(dataset.len(), count);
        }
        Ok(())
    }

    #[test]
    fn samples_stay_in_range() -> Result<(), RpmError> {
        let mut rng = seeded_rng();
        let request = GenerationRequest::new(500, (1.0, 20.0), (0.1, 1.0), 7.0)?;
        let dataset = request.generate(&mut rng);
        for measurement in &dataset {
            assert!(request.angular_velocity_range().contains(measurement.angular_velocity()));
            assert!(request.wheel_radius_range().contains(measurement.wheel_radius()));
            assert_eq!(measurement.transmission_ratio(), 7.0);
            let expected = compute_rpm(measurement.angular_velocity(),
                                       measurement.wheel_radius(),
                                       measurement.transmission_ratio())?;
            assert!((measurement.rpm() - expected).abs() < 1e-9);
        }
        Ok(())
    }

    #[test]
    fn draws_are_independent() -> Result<(), RpmError> {
        let mut rng = seeded_rng();
        let dataset = generate(200, (1.0, 20.0), (0.1, 1.0), 10.0, &mut rng)?;
        let first = dataset.measurements()[0];
        assert!(dataset.iter().any(|m| m.angular_velocity() != first.angular_velocity()));
        assert!(dataset.iter().any(|m| m.wheel_radius() != first.wheel_radius()));
        assert!(dataset.iter().any(|m| m.angular_velocity() / m.wheel_radius() !=
            first.angular_velocity() / first.wheel_radius()));
        Ok(())
    }

    #[test]
    fn zero_width_ranges() -> Result<(), RpmError> {
        let mut rng = seeded_rng();
        let expected = compute_rpm(8.0, 0.5, 10.0)?;
        let dataset = generate(25, (8.0, 8.0), (0.5, 0.5), 10.0, &mut rng)?;
        assert_eq!(dataset.len(), 25);
        for measurement in &dataset {
            assert_eq!(measurement.angular_velocity(), 8.0);
            assert_eq!(measurement.wheel_radius(), 0.5);
            assert_eq!(measurement.rpm(), expected);
        }
        Ok(())
    }

    #[test]
    fn same_seed_same_dataset() -> Result<(), RpmError> {
        let request = GenerationRequest::new(30, (5.0, 15.0), (0.4, 0.6), 10.0)?;
        let first = request.generate(&mut StdRng::seed_from_u64(42));
        let second = request.generate(&mut StdRng::seed_from_u64(42));
        let other = request.generate(&mut StdRng::seed_from_u64(43));
        assert_eq!(first, second);
        assert_ne!(first, other);
        Ok(())
    }

    #[test]
    fn zero_count_is_rejected() {
        let mut rng = seeded_rng();
        assert_eq!(generate(0, (5.0, 15.0), (0.4, 0.6), 10.0, &mut rng),
                   Err(RpmError::InvalidCount(0)));
    }

    #[test]
    fn reversed_ranges_are_rejected() {
        let mut rng = seeded_rng();
        let err = generate(10, (15.0, 5.0), (0.4, 0.6), 10.0, &mut rng).unwrap_err();
        assert!(err.is_invalid_range());

        match generate(10, (5.0, 15.0), (0.6, 0.4), 10.0, &mut rng) {
            Err(RpmError::InvalidRange { name, low, high }) => {
                assert_eq!(name, WHEEL_RADIUS);
                assert_eq!(low, 0.6);
                assert_eq!(high, 0.4);
            }
            other => panic!("expected invalid wheel radius range, got {:?}", other)
        }
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let mut rng = seeded_rng();
        assert!(generate(10, (5.0, 15.0), (0.0, 0.6), 10.0, &mut rng).unwrap_err().is_invalid_parameter());
        assert!(generate(10, (5.0, 15.0), (-0.2, 0.6), 10.0, &mut rng).unwrap_err().is_invalid_parameter());
        assert!(generate(10, (-5.0, 15.0), (0.4, 0.6), 10.0, &mut rng).unwrap_err().is_invalid_parameter());
        assert!(generate(10, (5.0, f64::INFINITY), (0.4, 0.6), 10.0, &mut rng).unwrap_err().is_invalid_parameter());
        assert!(generate(10, (f64::NAN, 15.0), (0.4, 0.6), 10.0, &mut rng).unwrap_err().is_invalid_parameter());

        match generate(10, (5.0, 15.0), (0.4, 0.6), 0.0, &mut rng) {
            Err(RpmError::InvalidParameter { name, .. }) => assert_eq!(name, TRANSMISSION_RATIO),
            other => panic!("expected invalid transmission ratio, got {:?}", other)
        }
    }

    #[test]
    fn unrepresentable_rpm_is_rejected_up_front() {
        let mut rng = seeded_rng();
        match generate(5, (1.0, 2.0), (1e-200, 1e-200), 1e-200, &mut rng) {
            Err(RpmError::InvalidParameter { name, .. }) => assert_eq!(name, WHEEL_RADIUS),
            other => panic!("expected underflowing denominator, got {:?}", other)
        }
        match generate(5, (1.0, 1e307), (0.01, 0.5), 1.0, &mut rng) {
            Err(RpmError::InvalidParameter { name, .. }) => assert_eq!(name, RPM),
            other => panic!("expected overflowing rpm, got {:?}", other)
        }
    }

    #[test]
    fn too_wide_ranges_are_rejected() {
        let mut rng = seeded_rng();
        assert!(generate(5, (0.0, f64::MAX), (0.5, 0.6), 10.0, &mut rng).unwrap_err().is_invalid_parameter());
        assert!(SampleRange::new("test", -f64::MAX, f64::MAX).unwrap_err().is_invalid_parameter());
        assert!(SampleRange::new("test", f64::MAX, f64::MAX).is_ok());
    }

    #[test]
    fn extreme_but_valid_requests_stay_finite() -> Result<(), RpmError> {
        let mut rng = seeded_rng();
        let requests = [
            ((0.0, 1e300), (1e3, 1e6), 1e3),
            ((1e-300, 1e-290), (1e-100, 1e-90), 1e-100),
            ((0.0, 20.0), (f64::MIN_POSITIVE * 1e10, 1.0), 1e8),
        ];
        for (av_range, radius_range, ratio) in requests {
            let dataset = generate(200, av_range, radius_range, ratio, &mut rng)?;
            assert!(dataset.iter().all(|m| m.rpm().is_finite()),
                    "non finite rpm for {:?} {:?} {}", av_range, radius_range, ratio);
        }
        Ok(())
    }

    #[test]
    fn count_is_checked_before_ranges() {
        let mut rng = seeded_rng();
        assert!(generate(0, (15.0, 5.0), (0.0, 0.6), 0.0, &mut rng).unwrap_err().is_invalid_count());
    }

    #[test]
    fn range_sampling() -> Result<(), RpmError> {
        let mut rng = seeded_rng();
        let range = SampleRange::new("test", 2.0, 3.0)?;
        assert_eq!(range.width(), 1.0);
        for _ in 0..100 {
            assert!(range.contains(range.sample(&mut rng)));
        }
        assert!(!range.contains(3.0001));
        assert!(range.contains(2.0) && range.contains(3.0));
        Ok(())
    }
}
