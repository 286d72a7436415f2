//! Guest Feedback Model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Guest feedback record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub guest_name: String,
    /// Star rating (1-5)
    pub rating: u8,
    pub comment: String,
    /// Free-form grouping, e.g. "service", "cleanliness"
    pub category: String,
    /// Submission time (epoch millis)
    pub timestamp: Timestamp,
}
