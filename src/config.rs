//! Scoring weights.
//!
//! The weights decide both how strongly players influence nearby cells and
//! how much work a scoring call does: proximity work grows with the square
//! of `proximity_weight`, facing work exponentially with
//! `view_angle_weight`. Validation caps both.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::spread::AngleNormalization;

/// Largest accepted `proximity_weight`.
pub const MAX_PROXIMITY_WEIGHT: i64 = 4096;
/// Largest accepted `view_angle_weight`.
pub const MAX_VIEW_ANGLE_WEIGHT: i64 = 64;
/// Largest accepted `view_angle_tolerance`.
pub const MAX_VIEW_ANGLE_TOLERANCE: u32 = 8;
/// Worst-case number of cell charges one facing spread may make.
pub const MAX_FACING_WORK: u64 = 1 << 22;

/// Errors that can occur while loading or validating weights.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must not be negative, got {value}")]
    NegativeWeight { name: &'static str, value: i64 },

    #[error("{name} is {value}, above the maximum of {max}")]
    AboveMaximum {
        name: &'static str,
        value: i64,
        max: i64,
    },

    #[error(
        "view_angle_weight {weight} with view_angle_tolerance {tolerance} \
         may charge more than {budget} cells per player"
    )]
    FacingTooExpensive {
        weight: i64,
        tolerance: u32,
        budget: u64,
    },

    #[error("invalid weights JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read weights file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Weights applied to every matched player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpawnWeights {
    /// Magnitude added at a player's own cell by the proximity spread.
    /// Also the radius of the diamond it covers.
    pub proximity_weight: i64,
    /// Magnitude added at a player's own cell by the facing spread.
    /// Also the length of the view ray.
    pub view_angle_weight: i64,
    /// Width of the diagonal fan around the view ray.
    pub view_angle_tolerance: u32,
    /// How negative view angles are folded.
    pub angle_normalization: AngleNormalization,
}

impl Default for SpawnWeights {
    fn default() -> Self {
        SpawnWeights {
            proximity_weight: 4,
            view_angle_weight: 6,
            view_angle_tolerance: 1,
            angle_normalization: AngleNormalization::Legacy,
        }
    }
}

impl SpawnWeights {
    /// Checks that every weight is non-negative and within its cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_weight(
            "proximity_weight",
            self.proximity_weight,
            MAX_PROXIMITY_WEIGHT,
        )?;
        check_weight(
            "view_angle_weight",
            self.view_angle_weight,
            MAX_VIEW_ANGLE_WEIGHT,
        )?;
        check_weight(
            "view_angle_tolerance",
            i64::from(self.view_angle_tolerance),
            i64::from(MAX_VIEW_ANGLE_TOLERANCE),
        )?;
        if facing_work(self.view_angle_weight, self.view_angle_tolerance) > MAX_FACING_WORK {
            return Err(ConfigError::FacingTooExpensive {
                weight: self.view_angle_weight,
                tolerance: self.view_angle_tolerance,
                budget: MAX_FACING_WORK,
            });
        }
        Ok(())
    }

    /// Parses and validates weights from JSON. Missing fields take their
    /// defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let weights: SpawnWeights = serde_json::from_str(text)?;
        weights.validate()?;
        Ok(weights)
    }

    /// Reads and validates a weights JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        SpawnWeights::from_json(&text)
    }
}

/// Upper bound on the charges of one facing spread on an unbounded open map:
/// every charged cell spawns `2 * tolerance` branches (one when the tolerance
/// is zero) and the ray is `weight` cells long. Saturates at `u64::MAX`.
fn facing_work(weight: i64, tolerance: u32) -> u64 {
    if weight <= 0 {
        return 0;
    }
    let branching = if tolerance == 0 { 1 } else { 2 * u64::from(tolerance) };
    let depth = weight as u64;
    let mut total: u64 = 0;
    let mut level: u64 = 1;
    for _ in 0..depth {
        total = total.saturating_add(level);
        level = level.saturating_mul(branching);
    }
    total
}

fn check_weight(name: &'static str, value: i64, max: i64) -> Result<(), ConfigError> {
    if value < 0 {
        return Err(ConfigError::NegativeWeight { name, value });
    }
    if value > max {
        return Err(ConfigError::AboveMaximum { name, value, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        SpawnWeights::default().validate().unwrap();
    }

    #[test]
    fn partial_json_fills_defaults() {
        let weights = SpawnWeights::from_json(r#"{"proximity_weight": 9}"#).unwrap();
        assert_eq!(weights.proximity_weight, 9);
        assert_eq!(
            weights.view_angle_weight,
            SpawnWeights::default().view_angle_weight
        );
        assert_eq!(weights.angle_normalization, AngleNormalization::Legacy);
    }

    #[test]
    fn full_json() {
        let weights = SpawnWeights::from_json(
            r#"{
                "proximity_weight": 3,
                "view_angle_weight": 2,
                "view_angle_tolerance": 0,
                "angle_normalization": "wrapped"
            }"#,
        )
        .unwrap();
        assert_eq!(
            weights,
            SpawnWeights {
                proximity_weight: 3,
                view_angle_weight: 2,
                view_angle_tolerance: 0,
                angle_normalization: AngleNormalization::Wrapped,
            }
        );
    }

    #[test]
    fn rejects_negative_weight() {
        let err = SpawnWeights::from_json(r#"{"view_angle_weight": -1}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NegativeWeight {
                name: "view_angle_weight",
                value: -1
            }
        ));
    }

    #[test]
    fn rejects_weights_above_cap() {
        let weights = SpawnWeights {
            view_angle_tolerance: MAX_VIEW_ANGLE_TOLERANCE + 1,
            ..SpawnWeights::default()
        };
        let err = weights.validate().unwrap_err();
        assert!(err.to_string().contains("view_angle_tolerance"));

        let weights = SpawnWeights {
            proximity_weight: MAX_PROXIMITY_WEIGHT + 1,
            ..SpawnWeights::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(ConfigError::AboveMaximum { .. })
        ));
    }

    #[test]
    fn rejects_exponential_facing_work() {
        let weights = SpawnWeights {
            view_angle_weight: 30,
            view_angle_tolerance: 1,
            ..SpawnWeights::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(ConfigError::FacingTooExpensive { .. })
        ));

        // A straight ray is linear no matter how long.
        let weights = SpawnWeights {
            view_angle_weight: MAX_VIEW_ANGLE_WEIGHT,
            view_angle_tolerance: 0,
            ..SpawnWeights::default()
        };
        weights.validate().unwrap();
    }

    #[test]
    fn facing_work_bounds() {
        assert_eq!(facing_work(0, 3), 0);
        assert_eq!(facing_work(5, 0), 5);
        assert_eq!(facing_work(3, 1), 1 + 2 + 4);
        assert_eq!(facing_work(2, 2), 1 + 4);
        assert_eq!(facing_work(MAX_VIEW_ANGLE_WEIGHT, 8), u64::MAX);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = SpawnWeights::from_json(r#"{"proximity": 3}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SpawnWeights::load(Path::new("/nonexistent/weights.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/weights.json"));
    }
}
