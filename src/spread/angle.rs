//! View angle normalization.
//!
//! Raw view angles arrive in whatever unit the game client reports and are
//! folded into a small range before being fed to `cos`/`sin` as-is. No
//! degree or radian conversion happens here.

use serde::{Deserialize, Serialize};

/// How negative view angles are folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleNormalization {
    /// Positive angles fold into `[0, 1]`; negative angles fold into
    /// `[-1, 0)` and are then reported as `100 - |folded|`, a value in
    /// `[99, 100)`. Matches the behaviour existing weight tunings were made
    /// against.
    #[default]
    Legacy,
    /// Negative angles fold into `[-1, 0)` and are reported as
    /// `1 - |folded|`, landing in the same `[0, 1]` range as positive ones.
    Wrapped,
}

/// Folds a raw view angle according to `mode`.
///
/// Positive input drops whole units while it exceeds 1 (so `2.25 -> 0.25`,
/// `2.0 -> 1.0`); negative input adds whole units while it is below -1.
/// Non-finite input yields `0.0`.
pub fn normalize(angle: f64, mode: AngleNormalization) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    if angle >= 0.0 {
        if angle > 1.0 {
            angle - (angle - 1.0).ceil()
        } else {
            angle
        }
    } else {
        let folded = if angle < -1.0 {
            angle + (-1.0 - angle).ceil()
        } else {
            angle
        };
        match mode {
            AngleNormalization::Legacy => 100.0 - folded.abs(),
            AngleNormalization::Wrapped => 1.0 - folded.abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn small_positive_angles_pass_through() {
        for mode in [AngleNormalization::Legacy, AngleNormalization::Wrapped] {
            assert!(close(normalize(0.0, mode), 0.0));
            assert!(close(normalize(0.4, mode), 0.4));
            assert!(close(normalize(1.0, mode), 1.0));
        }
    }

    #[test]
    fn large_positive_angles_fold_into_unit_range() {
        let mode = AngleNormalization::Legacy;
        assert!(close(normalize(2.25, mode), 0.25));
        assert!(close(normalize(2.0, mode), 1.0));
        assert!(close(normalize(7.5, mode), 0.5));
        assert!(close(normalize(1.000_5, mode), 0.000_5));
    }

    #[test]
    fn legacy_negative_angles_land_near_one_hundred() {
        let mode = AngleNormalization::Legacy;
        assert!(close(normalize(-0.25, mode), 99.75));
        assert!(close(normalize(-1.0, mode), 99.0));
        assert!(close(normalize(-2.5, mode), 99.5));
        assert!(close(normalize(-3.0, mode), 99.0));
    }

    #[test]
    fn wrapped_negative_angles_land_in_unit_range() {
        let mode = AngleNormalization::Wrapped;
        assert!(close(normalize(-0.25, mode), 0.75));
        assert!(close(normalize(-2.5, mode), 0.5));
        assert!(close(normalize(-1.0, mode), 0.0));
    }

    #[test]
    fn huge_angles_terminate() {
        let folded = normalize(1.0e18, AngleNormalization::Legacy);
        assert!((0.0..=1.0).contains(&folded));
        let folded = normalize(-1.0e18, AngleNormalization::Wrapped);
        assert!((0.0..=1.0).contains(&folded));
    }

    #[test]
    fn non_finite_angles_are_zero() {
        assert_eq!(normalize(f64::NAN, AngleNormalization::Legacy), 0.0);
        assert_eq!(normalize(f64::INFINITY, AngleNormalization::Legacy), 0.0);
        assert_eq!(normalize(f64::NEG_INFINITY, AngleNormalization::Wrapped), 0.0);
    }

    #[test]
    fn mode_parses_from_snake_case() {
        let mode: AngleNormalization = serde_json::from_str("\"wrapped\"").unwrap();
        assert_eq!(mode, AngleNormalization::Wrapped);
        assert_eq!(AngleNormalization::default(), AngleNormalization::Legacy);
    }
}
