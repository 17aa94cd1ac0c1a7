use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary launch outcome as stored in the `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OutcomeClass {
    Failure = 0,
    Success = 1,
}

impl OutcomeClass {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_success(self) -> bool {
        self == OutcomeClass::Success
    }
}

impl TryFrom<u8> for OutcomeClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OutcomeClass::Failure),
            1 => Ok(OutcomeClass::Success),
            other => Err(format!("class must be 0 or 1, got {other}")),
        }
    }
}

impl From<OutcomeClass> for u8 {
    fn from(value: OutcomeClass) -> Self {
        value.as_u8()
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// One row of the launch dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "class")]
    pub outcome: OutcomeClass,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: OutcomeClass,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version_category: booster_version_category.into(),
        }
    }

    /// Checks the row invariants enforced at load time.
    pub fn validate(&self) -> Result<(), String> {
        if self.launch_site.trim().is_empty() {
            return Err("launch site is empty".into());
        }
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(format!(
                "payload mass must be a non-negative number, got {}",
                self.payload_mass_kg
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_class_rejects_values_outside_binary_domain() {
        assert_eq!(OutcomeClass::try_from(1), Ok(OutcomeClass::Success));
        assert_eq!(OutcomeClass::try_from(0), Ok(OutcomeClass::Failure));
        assert!(OutcomeClass::try_from(2).is_err());
    }

    #[test]
    fn record_serializes_with_dataset_column_names() {
        let record = LaunchRecord::new("KSC LC-39A", 5000.0, OutcomeClass::Success, "FT");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Launch Site"], "KSC LC-39A");
        assert_eq!(json["class"], 1);
        assert_eq!(json["Booster Version Category"], "FT");
    }

    #[test]
    fn validate_flags_negative_payload_and_blank_site() {
        let negative = LaunchRecord::new("CCAFS LC-40", -1.0, OutcomeClass::Failure, "v1.0");
        assert!(negative.validate().is_err());
        let blank = LaunchRecord::new("  ", 10.0, OutcomeClass::Failure, "v1.0");
        assert!(blank.validate().is_err());
        let nan = LaunchRecord::new("CCAFS LC-40", f64::NAN, OutcomeClass::Failure, "v1.0");
        assert!(nan.validate().is_err());
    }
}
