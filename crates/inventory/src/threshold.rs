use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockgrid_core::{DomainError, DomainResult, ItemId, LocationId, ThresholdId};

/// Min/max bounds classifying availability for one item at one location.
///
/// # Invariants
/// - `0 <= min_threshold < max_threshold`.
/// - At most one threshold per (item, location) pair; enforced by the
///   threshold service, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtpThreshold {
    pub id: ThresholdId,
    pub item_id: ItemId,
    pub location_id: LocationId,
    pub min_threshold: i64,
    pub max_threshold: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewThreshold {
    pub item_id: ItemId,
    pub location_id: LocationId,
    pub min_threshold: i64,
    pub max_threshold: i64,
}

/// Partial update of a threshold's bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdUpdate {
    pub min_threshold: Option<i64>,
    pub max_threshold: Option<i64>,
}

fn validate_bounds(min: i64, max: i64) -> DomainResult<()> {
    if min < 0 {
        return Err(DomainError::validation("min threshold cannot be negative"));
    }
    if max <= min {
        return Err(DomainError::validation(
            "max threshold must be greater than min threshold",
        ));
    }
    Ok(())
}

impl AtpThreshold {
    pub fn create(id: ThresholdId, new: NewThreshold, now: DateTime<Utc>) -> DomainResult<Self> {
        validate_bounds(new.min_threshold, new.max_threshold)?;

        Ok(Self {
            id,
            item_id: new.item_id,
            location_id: new.location_id,
            min_threshold: new.min_threshold,
            max_threshold: new.max_threshold,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply_update(&mut self, update: ThresholdUpdate, now: DateTime<Utc>) -> DomainResult<()> {
        let min = update.min_threshold.unwrap_or(self.min_threshold);
        let max = update.max_threshold.unwrap_or(self.max_threshold);
        validate_bounds(min, max)?;

        self.min_threshold = min;
        self.max_threshold = max;
        self.updated_at = now;
        Ok(())
    }
}
