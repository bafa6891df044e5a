use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::errors::BillingError;

/// Billing policy supplied by the embedding application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Initial duration of a stay exempt from charge, in hours
    pub free_period_hours: f64,

    /// Currency units charged per whole billable hour
    pub rate_per_hour: f64,
}

impl FeeConfig {
    /// The standard lot policy: first hour free, ฿20 per started hour after.
    pub fn hourly_grace() -> Self {
        Self {
            free_period_hours: 1.0,
            rate_per_hour: 20.0,
        }
    }

    /// The short-grace policy used at gate kiosks: one minute to drive back
    /// out, ฿20 per started hour after.
    pub fn minute_grace() -> Self {
        Self {
            free_period_hours: 1.0 / 60.0,
            rate_per_hour: 20.0,
        }
    }

    /// Load a policy from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BillingError> {
        log::info!("Loading fee policy from {}", path.as_ref().display());
        let config: FeeConfig = serde_json::from_slice(&std::fs::read(path)?)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the policy values are usable for billing.
    pub fn validate(&self) -> Result<(), BillingError> {
        if !self.free_period_hours.is_finite() || self.free_period_hours < 0.0 {
            return Err(BillingError::InvalidPolicy(format!(
                "free_period_hours must be a non-negative finite number, got {}",
                self.free_period_hours
            )));
        }
        if !self.rate_per_hour.is_finite() || self.rate_per_hour <= 0.0 {
            return Err(BillingError::InvalidPolicy(format!(
                "rate_per_hour must be a positive finite number, got {}",
                self.rate_per_hour
            )));
        }
        Ok(())
    }
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self::hourly_grace()
    }
}
