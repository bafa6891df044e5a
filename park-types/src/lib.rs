pub mod transaction;
pub mod spots;
pub mod building;

// Re-export key types
pub use transaction::{Transaction, TransactionsResponse};
pub use spots::{ParkingSpot, ParkingSpotsResponse};
pub use building::{Building, Floor, FloorWithBuilding, ParkingSnapshot, Slot, SlotStatus};
