use serde::{Serialize, Deserialize};

/// A single sensor-monitored parking spot from the backend `/parking-spots`
/// endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingSpot {
    /// Backend-assigned spot identifier
    pub id: i64,

    /// Identifier of the floor this spot belongs to
    pub floor_id: i64,

    /// Painted spot number (e.g. "A3")
    pub spot_number: String,

    /// Occupancy flag as the sensor layer reports it: 0 free, nonzero taken
    pub is_occupied: u8,

    /// Stream URL of the camera covering this spot, when one exists
    pub camera_url: Option<String>,

    /// Timestamp of the last sensor update for this spot
    pub last_update: String,

    /// Human-readable floor name
    pub floor_name: String,
}

impl ParkingSpot {
    /// Whether a vehicle currently occupies this spot.
    pub fn occupied(&self) -> bool {
        self.is_occupied != 0
    }
}

/// Envelope for the backend `/parking-spots` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingSpotsResponse {
    /// Request status string
    pub status: String,

    /// Total number of spots returned
    pub count: usize,

    /// Number of spots currently free
    pub available_count: usize,

    /// Number of spots currently taken
    pub occupied_count: usize,

    /// The spots themselves
    pub parking_spots: Vec<ParkingSpot>,
}
