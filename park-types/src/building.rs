use serde::{Serialize, Deserialize};

/// Occupancy state of a slot in a building snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Occupied,
}

/// A single slot inside a floor snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    /// Painted slot identifier (e.g. "A1")
    pub id: String,

    /// Current occupancy state
    pub status: SlotStatus,
}

/// One floor of a building, with per-slot detail
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    /// Floor identifier (e.g. "bkk-central-l1")
    pub id: String,

    /// Human-readable floor name
    pub name: String,

    /// Total number of slots on this floor
    pub total: u32,

    /// Number of currently free slots
    pub available: u32,

    /// Wall-clock label of the last sensor update
    pub updated_at: String,

    /// The slots themselves
    pub slots: Vec<Slot>,
}

/// A monitored building with its floors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    /// Building identifier (e.g. "bkk-central")
    pub id: String,

    /// Human-readable building name
    pub name: String,

    /// Campus or street location label
    pub location: String,

    /// Floors within this building
    pub floors: Vec<Floor>,
}

/// Full lot snapshot across all buildings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSnapshot {
    /// All monitored buildings
    pub buildings: Vec<Building>,

    /// Instant the snapshot was taken, ISO-8601
    pub fetched_at: String,
}

/// A floor joined with the identifying fields of its building, the shape
/// floor-level views consume
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorWithBuilding {
    /// Floor identifier
    pub id: String,

    /// Human-readable floor name
    pub name: String,

    /// Total number of slots on this floor
    pub total: u32,

    /// Number of currently free slots
    pub available: u32,

    /// Wall-clock label of the last sensor update
    pub updated_at: String,

    /// The slots themselves
    pub slots: Vec<Slot>,

    /// Identifier of the owning building
    pub building_id: String,

    /// Name of the owning building
    pub building_name: String,

    /// Location label of the owning building
    pub building_location: String,
}

impl FloorWithBuilding {
    /// Join a floor with its building's identifying fields.
    pub fn new(building: &Building, floor: &Floor) -> Self {
        Self {
            id: floor.id.clone(),
            name: floor.name.clone(),
            total: floor.total,
            available: floor.available,
            updated_at: floor.updated_at.clone(),
            slots: floor.slots.clone(),
            building_id: building.id.clone(),
            building_name: building.name.clone(),
            building_location: building.location.clone(),
        }
    }
}
