use serde::{Serialize, Deserialize};

use park_types::{FloorWithBuilding, ParkingSnapshot, ParkingSpotsResponse};

use crate::floors::group_by_floor;

/// Lot-wide occupancy totals for the dashboard header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotOverview {
    /// Total monitored spots
    pub total: usize,

    /// Spots currently free
    pub available: usize,

    /// Spots currently taken
    pub occupied: usize,

    /// Number of floors represented
    pub floors: usize,

    /// Number of buildings represented
    pub buildings: usize,
}

impl LotOverview {
    /// Lot-wide occupancy percentage, rounded to the nearest integer.
    /// An empty lot reads as 0.
    pub fn occupancy_rate(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.occupied as f64 / self.total as f64) * 100.0).round() as u8
    }
}

/// Summarize a live spot feed. The feed carries no building dimension, so
/// the whole response counts as one building.
pub fn lot_overview(response: &ParkingSpotsResponse) -> LotOverview {
    LotOverview {
        total: response.count,
        available: response.available_count,
        occupied: response.occupied_count,
        floors: group_by_floor(&response.parking_spots).len(),
        buildings: 1,
    }
}

/// Summarize a building snapshot by reducing over its floors.
pub fn snapshot_overview(snapshot: &ParkingSnapshot) -> LotOverview {
    let mut overview = LotOverview {
        total: 0,
        available: 0,
        occupied: 0,
        floors: 0,
        buildings: snapshot.buildings.len(),
    };
    for building in &snapshot.buildings {
        for floor in &building.floors {
            overview.total += floor.total as usize;
            overview.available += floor.available as usize;
        }
        overview.floors += building.floors.len();
    }
    overview.occupied = overview.total - overview.available;
    overview
}

/// Flatten a snapshot into floors joined with their building's fields.
pub fn flatten_floors(snapshot: &ParkingSnapshot) -> Vec<FloorWithBuilding> {
    snapshot
        .buildings
        .iter()
        .flat_map(|building| {
            building
                .floors
                .iter()
                .map(move |floor| FloorWithBuilding::new(building, floor))
        })
        .collect()
}

/// Look up a floor by id across all buildings in a snapshot.
pub fn find_floor(snapshot: &ParkingSnapshot, floor_id: &str) -> Option<FloorWithBuilding> {
    flatten_floors(snapshot)
        .into_iter()
        .find(|floor| floor.id == floor_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_types::{Building, Floor, ParkingSpot};

    fn sample_snapshot() -> ParkingSnapshot {
        ParkingSnapshot {
            buildings: vec![
                Building {
                    id: "bkk-central".to_string(),
                    name: "Central Lot".to_string(),
                    location: "Bangkok Campus".to_string(),
                    floors: vec![
                        Floor {
                            id: "bkk-central-l1".to_string(),
                            name: "L1".to_string(),
                            total: 5,
                            available: 3,
                            updated_at: "09:15".to_string(),
                            slots: vec![],
                        },
                        Floor {
                            id: "bkk-central-l2".to_string(),
                            name: "L2".to_string(),
                            total: 4,
                            available: 1,
                            updated_at: "09:15".to_string(),
                            slots: vec![],
                        },
                    ],
                },
                Building {
                    id: "bkk-annex".to_string(),
                    name: "Annex".to_string(),
                    location: "Bangkok Campus".to_string(),
                    floors: vec![Floor {
                        id: "bkk-annex-l1".to_string(),
                        name: "L1".to_string(),
                        total: 6,
                        available: 6,
                        updated_at: "09:10".to_string(),
                        slots: vec![],
                    }],
                },
            ],
            fetched_at: "2026-02-16T09:15:00+07:00".to_string(),
        }
    }

    fn spot(id: i64, floor_id: i64, occupied: bool) -> ParkingSpot {
        ParkingSpot {
            id,
            floor_id,
            spot_number: format!("S{}", id),
            is_occupied: occupied as u8,
            camera_url: None,
            last_update: "2026-02-16T09:15:00+07:00".to_string(),
            floor_name: format!("L{}", floor_id),
        }
    }

    #[test]
    fn test_lot_overview_from_live_feed() {
        let response = ParkingSpotsResponse {
            status: "success".to_string(),
            count: 4,
            available_count: 3,
            occupied_count: 1,
            parking_spots: vec![
                spot(1, 1, false),
                spot(2, 1, false),
                spot(3, 2, false),
                spot(4, 2, true),
            ],
        };

        let overview = lot_overview(&response);
        assert_eq!(overview.total, 4);
        assert_eq!(overview.available, 3);
        assert_eq!(overview.occupied, 1);
        assert_eq!(overview.floors, 2);
        assert_eq!(overview.buildings, 1);
        assert_eq!(overview.occupancy_rate(), 25);
    }

    #[test]
    fn test_occupancy_rate_of_empty_lot() {
        let overview = LotOverview {
            total: 0,
            available: 0,
            occupied: 0,
            floors: 0,
            buildings: 0,
        };
        assert_eq!(overview.occupancy_rate(), 0);
    }

    #[test]
    fn test_snapshot_overview_reduces_buildings() {
        let overview = snapshot_overview(&sample_snapshot());
        assert_eq!(overview.total, 15);
        assert_eq!(overview.available, 10);
        assert_eq!(overview.occupied, 5);
        assert_eq!(overview.floors, 3);
        assert_eq!(overview.buildings, 2);
        assert_eq!(overview.occupancy_rate(), 33);
    }

    #[test]
    fn test_flatten_and_find() {
        let snapshot = sample_snapshot();

        let floors = flatten_floors(&snapshot);
        assert_eq!(floors.len(), 3);
        assert_eq!(floors[0].building_name, "Central Lot");
        assert_eq!(floors[2].building_name, "Annex");

        let floor = find_floor(&snapshot, "bkk-central-l2").unwrap();
        assert_eq!(floor.name, "L2");
        assert_eq!(floor.available, 1);

        assert!(find_floor(&snapshot, "nope").is_none());
    }
}
