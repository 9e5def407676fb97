//! Simulation settings types.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Run configuration for [`System::run_with`](crate::system::System::run_with)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Simulation end time (exclusive)
    pub duration: f64,

    /// Time step
    pub dt: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            duration: 3.0,
            dt: 0.01,
        }
    }
}

impl SimulationSettings {
    pub fn new(duration: f64, dt: f64) -> Self {
        Self { duration, dt }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Number of steps a run with these settings takes
    pub fn steps(&self) -> Result<usize> {
        Ok(crate::system::time_grid(self.duration, self.dt)?.count())
    }

    pub fn validate(&self) -> Result<()> {
        if self.dt.is_finite() && self.dt > 0.0 && self.duration.is_finite() {
            Ok(())
        } else {
            Err(SimError::InvalidTimeStep {
                end_time: self.duration,
                step: self.dt,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = SimulationSettings::default();
        assert_eq!(settings.duration, 3.0);
        assert_eq!(settings.dt, 0.01);
        assert_eq!(settings.steps().unwrap(), 300);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = SimulationSettings::from_json(r#"{ "duration": 1.0 }"#).unwrap();
        assert_eq!(settings, SimulationSettings::new(1.0, 0.01));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = SimulationSettings::new(5.0, 0.5);
        let parsed = SimulationSettings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_invalid_settings() {
        assert!(SimulationSettings::from_json(r#"{ "dt": 0.0 }"#).is_err());
        assert!(SimulationSettings::from_json(r#"{ "dt": -1.0 }"#).is_err());
        assert!(matches!(
            SimulationSettings::from_json("not json"),
            Err(SimError::Json(_))
        ));
    }
}
