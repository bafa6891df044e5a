use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::config::FeeConfig;
use crate::errors::BillingError;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Computed fee for a parking stay up to a reference instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Raw elapsed duration of the stay, in fractional hours
    pub hours: f64,

    /// Whole hours charged, present only when a charge applies
    pub billable_hours: Option<u32>,

    /// Total charge, always a whole-hour multiple of the policy rate
    pub fee: f64,

    /// True iff the stay fell entirely within the free period
    pub within_free_period: bool,
}

impl FeeBreakdown {
    /// Whether nothing is owed for this stay.
    pub fn is_free(&self) -> bool {
        self.fee == 0.0
    }
}

/// Compute the fee owed for a stay that began at `entry`, evaluated at
/// `reference`.
///
/// A stay lasting no longer than the policy's free period (boundary
/// included) costs nothing. Past that, every started hour beyond the free
/// period is charged in full: the billable-hour count rounds up, never down.
///
/// A `reference` earlier than `entry` means the backend and the caller's
/// clock disagree about causality; that is rejected rather than rendered as
/// a zero-length stay.
pub fn compute_fee(
    entry: DateTime<Utc>,
    reference: DateTime<Utc>,
    config: &FeeConfig,
) -> Result<FeeBreakdown, BillingError> {
    if reference < entry {
        return Err(BillingError::ReferenceBeforeEntry { entry, reference });
    }

    let hours = (reference - entry).num_milliseconds() as f64 / MILLIS_PER_HOUR;

    if hours <= config.free_period_hours {
        return Ok(FeeBreakdown {
            hours,
            billable_hours: None,
            fee: 0.0,
            within_free_period: true,
        });
    }

    let billable_hours = (hours - config.free_period_hours).ceil() as u32;
    Ok(FeeBreakdown {
        hours,
        billable_hours: Some(billable_hours),
        fee: billable_hours as f64 * config.rate_per_hour,
        within_free_period: false,
    })
}
