use serde::{Serialize, Deserialize};

/// Transaction status string the backend reports for a paid stay.
pub const STATUS_PAID: &str = "PAID";

/// A parking transaction as returned by the backend `/transactions` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Backend-assigned transaction identifier
    pub id: i64,

    /// License plate the entry camera recognized
    pub license_plate: String,

    /// Human-readable name of the building the vehicle entered
    pub building: String,

    /// Identifier of the building, when the backend knows it
    pub building_id: Option<i64>,

    /// Path to the captured plate image, when one was stored
    pub image_path: Option<String>,

    /// Entry instant as an ISO-8601 timestamp string
    pub entry_time: String,

    /// Exit instant, present once the vehicle has left
    pub exit_time: Option<String>,

    /// Token encoded into the receipt QR code
    pub qr_token: String,

    /// Transaction state as the backend reports it (e.g. "PAID")
    pub status: String,

    /// Fee the backend settled on, once payment completed
    pub fee: Option<f64>,
}

impl Transaction {
    /// Whether this transaction has already been paid for.
    ///
    /// The backend vocabulary is open-ended; anything other than the PAID
    /// marker is treated as still owing.
    pub fn is_paid(&self) -> bool {
        self.status == STATUS_PAID
    }

    /// Whether the vehicle is still inside the lot.
    pub fn is_open(&self) -> bool {
        self.exit_time.is_none()
    }
}

/// Envelope for the backend `/transactions` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
    /// Request status string
    pub status: String,

    /// Number of transactions matched
    pub count: usize,

    /// Matched transactions, most relevant first
    pub transactions: Vec<Transaction>,
}

impl TransactionsResponse {
    /// The transaction the dashboard shows for a plate lookup: the first
    /// match, when there is one.
    pub fn first(&self) -> Option<&Transaction> {
        self.transactions.first()
    }
}
