use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyCounts {
    pub total: usize,
    pub available: usize,
    pub booked: usize,
}
