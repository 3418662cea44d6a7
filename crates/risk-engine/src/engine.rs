//! Threshold Rule Implementation

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Message shown when the glucose rule fires
pub const HIGH_GLUCOSE_MESSAGE: &str =
    "High Blood Sugar detected. **Consult a physician immediately.**";

/// Message shown when the compound BMI/age rule fires
pub const BMI_AGE_MESSAGE: &str =
    "Elevated risk based on BMI and Age. Focus on lifestyle changes.";

/// Message shown when no rule fires
pub const LOW_RISK_MESSAGE: &str = "Low risk detected. Keep up the good work!";

/// Rule thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Glucose level above which risk is high regardless of other fields (mg/dL)
    pub glucose_threshold: f64,
    /// BMI above which the compound BMI/age rule can fire (kg/m²)
    pub bmi_threshold: f64,
    /// Age above which the compound BMI/age rule can fire (years)
    pub age_threshold: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            glucose_threshold: 140.0,
            bmi_threshold: 30.0,
            age_threshold: 40.0,
        }
    }
}

/// One set of health measurements submitted for classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub age: f64,
    pub bmi: f64,
    pub glucose: f64,
    pub bp: f64,
    pub insulin: f64,
}

/// Binary risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Low,
}

impl RiskLevel {
    /// Numeric flag: 1 = high risk, 0 = low risk
    pub fn flag(&self) -> u8 {
        match self {
            RiskLevel::High => 1,
            RiskLevel::Low => 0,
        }
    }

    /// Label stored alongside each submission
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "HIGH RISK",
            RiskLevel::Low => "LOW RISK",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one set of measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub message: &'static str,
}

/// Rule engine for health risk classification
pub struct RiskEngine {
    config: RiskConfig,
}

impl RiskEngine {
    /// Create a new engine with given thresholds
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    /// Classify one set of measurements.
    ///
    /// Rules are checked in fixed order and the first match wins: the
    /// glucose rule dominates the compound BMI/age rule even when both
    /// hold at once. Inputs are taken as-is; out-of-range values are not
    /// rejected here.
    pub fn assess(&self, measurements: &Measurements) -> RiskAssessment {
        if measurements.glucose > self.config.glucose_threshold {
            debug!("Glucose rule fired: {} mg/dL", measurements.glucose);
            return RiskAssessment {
                level: RiskLevel::High,
                message: HIGH_GLUCOSE_MESSAGE,
            };
        }

        if measurements.bmi > self.config.bmi_threshold
            && measurements.age > self.config.age_threshold
        {
            debug!(
                "BMI/age rule fired: bmi {} at age {}",
                measurements.bmi, measurements.age
            );
            return RiskAssessment {
                level: RiskLevel::High,
                message: BMI_AGE_MESSAGE,
            };
        }

        RiskAssessment {
            level: RiskLevel::Low,
            message: LOW_RISK_MESSAGE,
        }
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new(RiskConfig::default())
    }
}
