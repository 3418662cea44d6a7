//! Risk Classification Engine
//!
//! Provides the threshold rules mapping health measurements to a binary
//! risk classification with an explanatory message.

mod engine;

pub use engine::{
    Measurements, RiskAssessment, RiskConfig, RiskEngine, RiskLevel, BMI_AGE_MESSAGE,
    HIGH_GLUCOSE_MESSAGE, LOW_RISK_MESSAGE,
};
