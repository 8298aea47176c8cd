//! Institution configuration for audit rules
//!
//! The distilled regulations leave the exact numbers to the deploying
//! institution. Everything a rule needs to know about local policy
//! lives here and is passed explicitly; the defaults describe a
//! semester-calendar California community college.

use serde::{Deserialize, Serialize};

/// Constants supplied by the deploying institution
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InstitutionConfig {
    /// Total student learning hours per unit of credit
    #[serde(default = "default_hours_per_unit")]
    pub hours_per_unit: f32,

    /// Weeks in the primary term
    #[serde(default = "default_weeks_per_term")]
    pub weeks_per_term: f32,

    /// Allowed deviation, in units, when reconciling hours to units
    #[serde(default = "default_unit_tolerance")]
    pub unit_tolerance: f32,

    /// CB codes that must be present and non-null
    #[serde(default = "default_required_cb_codes")]
    pub required_cb_codes: Vec<String>,

    /// CB code key that carries the transferability classification
    #[serde(default = "default_transfer_cb_key")]
    pub transfer_cb_key: String,

    /// Value of the transfer CB code meaning "transferable to both
    /// university systems" (UC and CSU)
    #[serde(default = "default_transferable_code")]
    pub transferable_code: String,

    /// Minimum units for a CCN-aligned course to earn a clean pass
    #[serde(default = "default_ccn_minimum_units")]
    pub ccn_minimum_units: f32,
}

fn default_hours_per_unit() -> f32 {
    54.0
}

fn default_weeks_per_term() -> f32 {
    18.0
}

fn default_unit_tolerance() -> f32 {
    0.5
}

fn default_required_cb_codes() -> Vec<String> {
    ["CB00", "CB01", "CB02", "CB03", "CB04", "CB05"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_transfer_cb_key() -> String {
    "CB05".to_string()
}

fn default_transferable_code() -> String {
    "A".to_string()
}

fn default_ccn_minimum_units() -> f32 {
    3.0
}

impl Default for InstitutionConfig {
    fn default() -> Self {
        Self {
            hours_per_unit: default_hours_per_unit(),
            weeks_per_term: default_weeks_per_term(),
            unit_tolerance: default_unit_tolerance(),
            required_cb_codes: default_required_cb_codes(),
            transfer_cb_key: default_transfer_cb_key(),
            transferable_code: default_transferable_code(),
            ccn_minimum_units: default_ccn_minimum_units(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InstitutionConfig::default();
        assert_eq!(config.hours_per_unit, 54.0);
        assert_eq!(config.required_cb_codes.len(), 6);
        assert_eq!(config.transfer_cb_key, "CB05");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: InstitutionConfig =
            serde_json::from_str(r#"{"unit_tolerance": 0.25}"#).unwrap();
        assert_eq!(config.unit_tolerance, 0.25);
        assert_eq!(config.hours_per_unit, 54.0);
    }
}
