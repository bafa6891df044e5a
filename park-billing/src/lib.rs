pub mod fee;
pub mod duration;
pub mod clock;
pub mod config;
pub mod receipt;
pub mod errors;

// Re-export key types
pub use fee::{compute_fee, FeeBreakdown};
pub use duration::format_duration;
pub use clock::parse_entry_time;
pub use config::FeeConfig;
pub use receipt::{payment_due, ParkingReceipt};
pub use errors::BillingError;
