use serde::{Deserialize, Serialize};

use crate::models::common::SkippedItem;

/// Outcome of one ingestion pass.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SyncReport {
    pub season: String,
    pub upserted: usize,
    pub skipped: Vec<SkippedItem>,
}
