use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use park_types::transaction::{Transaction, STATUS_PAID};

use crate::clock::parse_entry_time;
use crate::config::FeeConfig;
use crate::errors::BillingError;
use crate::fee::{compute_fee, FeeBreakdown};

/// Placeholder shown when the backend omits slot or floor detail.
const UNKNOWN_DETAIL: &str = "-";

/// A parking receipt assembled from a backend transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingReceipt {
    /// Receipt number, the backend transaction id
    pub id: String,

    /// Painted spot identifier, "-" when the backend does not track it
    pub slot_id: String,

    /// Floor name, "-" when the backend does not track it
    pub floor_name: String,

    /// Building the vehicle entered
    pub building_name: String,

    /// Parsed entry instant
    pub entry_time: DateTime<Utc>,

    /// License plate, when recognized
    pub plate_number: Option<String>,

    /// Transaction state as the backend reports it
    pub status: String,
}

impl ParkingReceipt {
    /// Assemble a receipt from a backend transaction.
    ///
    /// Fails when the transaction carries an unparseable `entry_time`; that
    /// is surfaced here so fee computation only ever sees valid instants.
    pub fn from_transaction(tx: &Transaction) -> Result<Self, BillingError> {
        Ok(Self {
            id: tx.id.to_string(),
            slot_id: UNKNOWN_DETAIL.to_string(),
            floor_name: UNKNOWN_DETAIL.to_string(),
            building_name: tx.building.clone(),
            entry_time: parse_entry_time(&tx.entry_time)?,
            plate_number: Some(tx.license_plate.clone()),
            status: tx.status.clone(),
        })
    }

    /// Whether this stay has already been paid for.
    pub fn is_paid(&self) -> bool {
        self.status == STATUS_PAID
    }

    /// Price the stay so far, evaluated at `reference`.
    pub fn quote(
        &self,
        reference: DateTime<Utc>,
        config: &FeeConfig,
    ) -> Result<FeeBreakdown, BillingError> {
        compute_fee(self.entry_time, reference, config)
    }
}

/// Whether a payment action should be offered for this stay.
///
/// A fee of exactly zero suppresses the prompt, as does a stay the backend
/// already marked paid.
pub fn payment_due(breakdown: &FeeBreakdown, receipt: &ParkingReceipt) -> bool {
    !receipt.is_paid() && breakdown.fee > 0.0
}
