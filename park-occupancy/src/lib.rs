pub mod floors;
pub mod summary;

// Re-export key types
pub use floors::{
    availability_rate, busiest, group_by_floor, most_available, usage_rate, FloorGroup,
};
pub use summary::{find_floor, flatten_floors, lot_overview, snapshot_overview, LotOverview};
