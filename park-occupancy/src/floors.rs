use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};

use park_types::ParkingSpot;

/// Spots of one floor, grouped out of a flat spot feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorGroup {
    /// Identifier of the floor
    pub floor_id: i64,

    /// Human-readable floor name
    pub floor_name: String,

    /// Spots on this floor
    pub spots: Vec<ParkingSpot>,
}

/// Group a flat spot feed by floor, in ascending floor id order.
pub fn group_by_floor(spots: &[ParkingSpot]) -> Vec<FloorGroup> {
    let mut groups: BTreeMap<i64, FloorGroup> = BTreeMap::new();
    for spot in spots {
        groups
            .entry(spot.floor_id)
            .or_insert_with(|| FloorGroup {
                floor_id: spot.floor_id,
                floor_name: spot.floor_name.clone(),
                spots: Vec::new(),
            })
            .spots
            .push(spot.clone());
    }
    groups.into_values().collect()
}

/// Percentage of free spots, rounded to the nearest integer. Empty input is 0.
pub fn availability_rate(spots: &[ParkingSpot]) -> u8 {
    if spots.is_empty() {
        return 0;
    }
    let available = spots.iter().filter(|s| !s.occupied()).count();
    ((available as f64 / spots.len() as f64) * 100.0).round() as u8
}

/// Percentage of taken spots, rounded to the nearest integer. Empty input is 0.
pub fn usage_rate(spots: &[ParkingSpot]) -> u8 {
    if spots.is_empty() {
        return 0;
    }
    let occupied = spots.iter().filter(|s| s.occupied()).count();
    ((occupied as f64 / spots.len() as f64) * 100.0).round() as u8
}

/// The floor with the highest availability rate. Ties keep the earlier floor.
pub fn most_available(groups: &[FloorGroup]) -> Option<&FloorGroup> {
    let mut best = groups.first()?;
    for group in groups {
        if availability_rate(&group.spots) > availability_rate(&best.spots) {
            best = group;
        }
    }
    Some(best)
}

/// The floor with the highest usage rate. Ties keep the earlier floor.
pub fn busiest(groups: &[FloorGroup]) -> Option<&FloorGroup> {
    let mut best = groups.first()?;
    for group in groups {
        if usage_rate(&group.spots) > usage_rate(&best.spots) {
            best = group;
        }
    }
    Some(best)
}
