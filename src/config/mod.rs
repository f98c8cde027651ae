pub mod defaults;

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Construction-time misconfiguration. The only user-visible failure mode:
/// surfaced before any pointer event is processed, never at frame time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be {requirement}, got {value}")]
    InvalidField {
        field: &'static str,
        value: f64,
        requirement: &'static str,
    },
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable parameters for the drag-to-shear interaction.
///
/// Validated once by [`ShearSettings::validate`] and immutable afterwards;
/// the one runtime-mutable quantity (the effective spring rest length under
/// hybrid shearing) lives in the interaction controller, seeded from
/// `spring_length` here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShearSettings {
    /// Velocity magnitude below which an axis counts as settled.
    pub threshold: f64,
    /// Stiffness of the spring pulling the drag point toward equilibrium.
    pub spring_coefficient: f64,
    /// Fraction of velocity removed per frame, in [0, 1).
    pub friction_force: f64,
    /// Natural (rest) length of the spring in map units.
    #[serde(default)]
    pub spring_length: f64,
    /// Pixel radius beyond which shear transitions to pure pan.
    /// 0 disables hybrid shearing.
    #[serde(default)]
    pub hybrid_shearing_radius_px: f64,
    /// Minimum zoom level at which the gesture activates.
    #[serde(default)]
    pub min_zoom: f64,
}

impl ShearSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check(
            "threshold",
            self.threshold,
            self.threshold.is_finite() && self.threshold > 0.0,
            "finite and > 0",
        )?;
        check(
            "spring_coefficient",
            self.spring_coefficient,
            self.spring_coefficient.is_finite() && self.spring_coefficient > 0.0,
            "finite and > 0",
        )?;
        check(
            "friction_force",
            self.friction_force,
            self.friction_force.is_finite()
                && (0.0..1.0).contains(&self.friction_force),
            "in [0, 1)",
        )?;
        check(
            "spring_length",
            self.spring_length,
            self.spring_length.is_finite() && self.spring_length >= 0.0,
            "finite and >= 0",
        )?;
        check(
            "hybrid_shearing_radius_px",
            self.hybrid_shearing_radius_px,
            self.hybrid_shearing_radius_px.is_finite()
                && self.hybrid_shearing_radius_px >= 0.0,
            "finite and >= 0",
        )?;
        check("min_zoom", self.min_zoom, self.min_zoom.is_finite(), "finite")?;
        Ok(())
    }

    /// Reads settings from a JSON file and validates them. A missing
    /// required field surfaces as a parse error, an out-of-range value as
    /// [`ConfigError::InvalidField`] — either way setup aborts before any
    /// pointer event is processed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let settings: ShearSettings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn check(
    field: &'static str,
    value: f64,
    ok: bool,
    requirement: &'static str,
) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidField {
            field,
            value,
            requirement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_validate() {
        let settings = ShearSettings::default();
        assert!(settings.validate().is_ok());
        assert!(ShearSettings::stiff().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_threshold() {
        let settings = ShearSettings {
            threshold: 0.0,
            ..ShearSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("threshold"), "got: {}", err);
    }

    #[test]
    fn test_rejects_friction_of_one() {
        // friction_force = 1 would zero out all carried velocity; the
        // half-open range excludes it
        let settings = ShearSettings {
            friction_force: 1.0,
            ..ShearSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_lengths() {
        let settings = ShearSettings {
            spring_length: -1.0,
            ..ShearSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = ShearSettings {
            hybrid_shearing_radius_px: -0.5,
            ..ShearSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_nan_fields() {
        let settings = ShearSettings {
            spring_coefficient: f64::NAN,
            ..ShearSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = ShearSettings {
            min_zoom: f64::INFINITY,
            ..ShearSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_required_field_fails_deserialization() {
        // threshold, spring_coefficient and friction_force carry no serde
        // default; omitting them is a construction-time failure
        let result = serde_json::from_str::<ShearSettings>("{}");
        assert!(result.is_err());

        let result = serde_json::from_str::<ShearSettings>(
            r#"{"threshold": 0.05, "spring_coefficient": 0.08}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_fields_default_to_zero() {
        let settings: ShearSettings = serde_json::from_str(
            r#"{"threshold": 0.05, "spring_coefficient": 0.08, "friction_force": 0.17}"#,
        )
        .unwrap();
        assert_eq!(settings.spring_length, 0.0);
        assert_eq!(settings.hybrid_shearing_radius_px, 0.0);
        assert_eq!(settings.min_zoom, 0.0);
    }

    #[test]
    fn test_settings_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shear.json");

        let settings = ShearSettings::default();
        settings.save(&path).unwrap();
        let loaded = ShearSettings::load(&path).unwrap();

        assert_eq!(loaded.threshold, settings.threshold);
        assert_eq!(loaded.spring_coefficient, settings.spring_coefficient);
        assert_eq!(loaded.friction_force, settings.friction_force);
        assert_eq!(
            loaded.hybrid_shearing_radius_px,
            settings.hybrid_shearing_radius_px
        );
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shear.json");
        std::fs::write(
            &path,
            r#"{"threshold": -1.0, "spring_coefficient": 0.08, "friction_force": 0.17}"#,
        )
        .unwrap();

        let err = ShearSettings::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField { .. }), "got: {}", err);
    }
}
