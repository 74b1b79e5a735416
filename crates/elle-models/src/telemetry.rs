//! Turbine telemetry types.
//!
//! A [`TelemetrySnapshot`] is one complete reading set produced by a
//! telemetry source. Snapshots are immutable and replaced wholesale on every
//! refresh tick; no history is kept. Each snapshot travels with an
//! [`Advisory`], a short recommendation derived from the same tick.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// ---------------------------------------------------------------------------
// Compass
// ---------------------------------------------------------------------------

/// Eight-point compass direction the wind is blowing from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Compass {
    /// North.
    N,
    /// North-east.
    NE,
    /// East.
    E,
    /// South-east.
    SE,
    /// South.
    S,
    /// South-west.
    SW,
    /// West.
    W,
    /// North-west.
    NW,
}

impl Compass {
    /// All eight points, clockwise from north.
    pub const ALL: [Compass; 8] = [
        Compass::N,
        Compass::NE,
        Compass::E,
        Compass::SE,
        Compass::S,
        Compass::SW,
        Compass::W,
        Compass::NW,
    ];
}

impl FromStr for Compass {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|point| point.to_string() == s)
            .ok_or_else(|| ModelError::InvalidCompassPoint { value: s.to_string() })
    }
}

// ---------------------------------------------------------------------------
// TurbineStatus
// ---------------------------------------------------------------------------

/// Operating status reported alongside a reading set.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumIter)]
pub enum TurbineStatus {
    /// Producing power normally.
    Operational,
    /// Producing power, but something needs attention.
    Warning,
    /// Telemetry could not be acquired or the turbine reported a fault.
    Error,
    /// No telemetry received yet.
    #[default]
    Offline,
}

impl FromStr for TurbineStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Operational" => Ok(Self::Operational),
            "Warning" => Ok(Self::Warning),
            "Error" => Ok(Self::Error),
            "Offline" => Ok(Self::Offline),
            other => Err(ModelError::InvalidStatus { value: other.to_string() }),
        }
    }
}

// ---------------------------------------------------------------------------
// Readings
// ---------------------------------------------------------------------------

/// The numeric part of a telemetry snapshot.
///
/// Values are kept in SI-ish units; the `*_text` accessors produce the
/// display strings shown on the dashboard.
///
/// # Examples
///
/// ```
/// use elle_models::{Compass, Readings};
///
/// let r = Readings {
///     wind_speed: 7.26,
///     wind_direction: Compass::SW,
///     current_power: 123.456,
///     generator_temp: 27.0,
///     battery_temp: 30.04,
/// };
/// assert_eq!(r.wind_speed_text(), "7.3 m/s");
/// assert_eq!(r.current_power_text(), "123.46 W");
/// assert_eq!(r.generator_temp_text(), "27.0°C");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Readings {
    /// Wind speed in metres per second.
    pub wind_speed: f64,
    /// Direction the wind is blowing from.
    pub wind_direction: Compass,
    /// Instantaneous generator output in watts.
    pub current_power: f64,
    /// Generator temperature in degrees Celsius.
    pub generator_temp: f64,
    /// Battery temperature in degrees Celsius.
    pub battery_temp: f64,
}

impl Readings {
    /// Wind speed with one decimal, e.g. `"12.3 m/s"`.
    pub fn wind_speed_text(&self) -> String {
        format!("{:.1} m/s", self.wind_speed)
    }

    /// Wind direction as its compass abbreviation.
    pub fn wind_direction_text(&self) -> String {
        self.wind_direction.to_string()
    }

    /// Power with two decimals, e.g. `"250.00 W"`.
    pub fn current_power_text(&self) -> String {
        format!("{:.2} W", self.current_power)
    }

    /// Generator temperature with one decimal, e.g. `"27.5°C"`.
    pub fn generator_temp_text(&self) -> String {
        format!("{:.1}°C", self.generator_temp)
    }

    /// Battery temperature with one decimal, e.g. `"30.1°C"`.
    pub fn battery_temp_text(&self) -> String {
        format!("{:.1}°C", self.battery_temp)
    }
}

// ---------------------------------------------------------------------------
// TelemetrySnapshot
// ---------------------------------------------------------------------------

/// One complete, immutable telemetry reading set.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySnapshot {
    /// The measured values.
    pub readings: Readings,
    /// Turbine status at the time of the reading.
    pub status: TurbineStatus,
}

// ---------------------------------------------------------------------------
// Advisory
// ---------------------------------------------------------------------------

/// A short textual recommendation accompanying a snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Advisory(String);

impl Advisory {
    /// Irrigation hint shown when surplus energy is available.
    pub const IRRIGATE: &'static str = "Optimal time for irrigation based on energy surplus.";
    /// Machinery hint shown when little wind is forecast.
    pub const DELAY_MACHINERY: &'static str =
        "Consider delaying heavy machinery use; low wind forecast.";
    /// Text shown before the first tick.
    pub const NONE_YET: &'static str = "No insights yet.";

    /// Create an advisory from any text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Return the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Advisory {
    fn default() -> Self {
        Self::new(Self::NONE_YET)
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Advisory {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
