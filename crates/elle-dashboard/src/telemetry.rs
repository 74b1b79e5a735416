//! Telemetry acquisition.
//!
//! A [`TelemetrySource`] produces one [`TelemetryFrame`] per refresh tick or
//! fails with a [`TelemetryError`]. The only implementation today is
//! [`SimulatedSource`], which draws every field independently and uniformly;
//! a real sensor feed plugs in behind the same trait.

use elle_models::{Advisory, Compass, Readings, TelemetrySnapshot, TurbineStatus};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Probability that a simulated tick reports [`TurbineStatus::Warning`].
pub const WARNING_PROBABILITY: f64 = 0.2;

/// Failure to obtain a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The data source could not be reached or returned nothing usable.
    #[error("telemetry source unavailable: {0}")]
    Unavailable(String),
}

/// Everything one tick produces.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryFrame {
    /// The reading set.
    pub snapshot: TelemetrySnapshot,
    /// The advisory accompanying it.
    pub advisory: Advisory,
}

/// The replaceable "obtain a snapshot" step.
pub trait TelemetrySource {
    /// Produce the next frame.
    fn acquire(&mut self) -> Result<TelemetryFrame, TelemetryError>;
}

/// Draw one simulated reading set.
pub fn simulate_snapshot<R: Rng>(rng: &mut R) -> TelemetrySnapshot {
    let readings = Readings {
        wind_speed: rng.gen_range(0.0..20.0),
        wind_direction: Compass::ALL[rng.gen_range(0..Compass::ALL.len())],
        current_power: rng.gen_range(0.0..500.0),
        generator_temp: rng.gen_range(20.0..35.0),
        battery_temp: rng.gen_range(25.0..35.0),
    };

    let status = if rng.gen_bool(WARNING_PROBABILITY) {
        TurbineStatus::Warning
    } else {
        TurbineStatus::Operational
    };

    TelemetrySnapshot { readings, status }
}

/// Pick one of the two advisories with a fair coin.
pub fn simulate_advisory<R: Rng>(rng: &mut R) -> Advisory {
    if rng.gen_bool(0.5) {
        Advisory::from(Advisory::IRRIGATE)
    } else {
        Advisory::from(Advisory::DELAY_MACHINERY)
    }
}

/// Synthetic telemetry; never fails.
#[derive(Debug, Clone)]
pub struct SimulatedSource<R = StdRng> {
    rng: R,
}

impl SimulatedSource<StdRng> {
    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SimulatedSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TelemetrySource for SimulatedSource<R> {
    fn acquire(&mut self) -> Result<TelemetryFrame, TelemetryError> {
        let snapshot = simulate_snapshot(&mut self.rng);
        let advisory = simulate_advisory(&mut self.rng);
        Ok(TelemetryFrame { snapshot, advisory })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const DRAWS: usize = 10_000;

    #[test]
    fn simulated_fields_stay_in_range() {
        let mut source = SimulatedSource::seeded(7);
        for _ in 0..DRAWS {
            let frame = source.acquire().unwrap();
            let r = frame.snapshot.readings;
            assert!((0.0..20.0).contains(&r.wind_speed), "wind speed {}", r.wind_speed);
            assert!((0.0..500.0).contains(&r.current_power), "power {}", r.current_power);
            assert!((20.0..35.0).contains(&r.generator_temp), "generator {}", r.generator_temp);
            assert!((25.0..35.0).contains(&r.battery_temp), "battery {}", r.battery_temp);
            assert!(Compass::ALL.contains(&r.wind_direction));
            assert!(matches!(
                frame.snapshot.status,
                TurbineStatus::Operational | TurbineStatus::Warning
            ));
            assert!(
                frame.advisory.as_str() == Advisory::IRRIGATE
                    || frame.advisory.as_str() == Advisory::DELAY_MACHINERY
            );
        }
    }

    #[test]
    fn every_compass_point_is_drawn() {
        let mut rng = StdRng::seed_from_u64(11);
        let seen: HashSet<Compass> = (0..DRAWS)
            .map(|_| simulate_snapshot(&mut rng).readings.wind_direction)
            .collect();
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn warning_rate_is_about_one_in_five() {
        let mut rng = StdRng::seed_from_u64(13);
        let warnings = (0..DRAWS)
            .filter(|_| simulate_snapshot(&mut rng).status == TurbineStatus::Warning)
            .count();
        // 0.2 * 10_000 = 2_000, σ ≈ 40
        assert!((1_800..2_200).contains(&warnings), "warnings = {warnings}");
    }

    #[test]
    fn both_advisories_are_drawn() {
        let mut rng = StdRng::seed_from_u64(17);
        let seen: HashSet<Advisory> = (0..100).map(|_| simulate_advisory(&mut rng)).collect();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn same_seed_same_frames() {
        let mut a = SimulatedSource::seeded(42);
        let mut b = SimulatedSource::seeded(42);
        for _ in 0..16 {
            assert_eq!(a.acquire().unwrap(), b.acquire().unwrap());
        }
    }

    #[test]
    fn error_display() {
        let err = TelemetryError::Unavailable("sensor bus timeout".into());
        assert_eq!(err.to_string(), "telemetry source unavailable: sensor bus timeout");
    }
}
