//! Memoized insights keyed by day and inputs
//!
//! Classification is cheap, but screens re-render often and the AI coach
//! layer keys its own (expensive) calls off the insight. The memo keeps the
//! last `capacity` results so identical inputs return the identical insight.

use std::num::NonZeroUsize;

use chrono::NaiveDate;
use lru::LruCache;
use sha2::{Digest, Sha256};

use crate::models::{NutritionTotals, Targets};

use super::classifier::classify_daily_insight;
use super::types::Insight;

const DEFAULT_MEMO_CAPACITY: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(n) => n,
    None => unreachable!(),
};

/// Build the memo key for a day's inputs
///
/// Format: `YYYY-MM-DD|<sha256 hex of totals, targets and hour>`
pub fn memo_key(date: NaiveDate, totals: &NutritionTotals, targets: &Targets, hour: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(totals.calories.to_be_bytes());
    hasher.update(totals.protein.to_be_bytes());
    hasher.update(totals.carbs.to_be_bytes());
    hasher.update(totals.fat.to_be_bytes());
    hasher.update(targets.target_calories.to_be_bytes());
    hasher.update(targets.target_protein.to_be_bytes());
    hasher.update(targets.target_carbs.to_be_bytes());
    hasher.update(targets.target_fat.to_be_bytes());
    hasher.update(hour.to_be_bytes());
    format!("{}|{}", date, hex::encode(hasher.finalize()))
}

/// Bounded LRU memo of classified insights
pub struct InsightMemo {
    entries: LruCache<String, Insight>,
    hits: u64,
    misses: u64,
}

impl InsightMemo {
    /// Create a memo holding at most `capacity` insights (0 falls back to 32)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(DEFAULT_MEMO_CAPACITY);
        Self {
            entries: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the memoized insight for these inputs, classifying on a miss
    pub fn get_or_classify(
        &mut self,
        date: NaiveDate,
        totals: &NutritionTotals,
        targets: &Targets,
        hour: u32,
    ) -> Insight {
        let key = memo_key(date, totals, targets, hour);
        if let Some(insight) = self.entries.get(&key) {
            self.hits += 1;
            tracing::debug!(key = %key, "Insight memo hit");
            return insight.clone();
        }

        self.misses += 1;
        let insight = classify_daily_insight(totals, targets, hour);
        self.entries.put(key, insight.clone());
        insight
    }

    /// Drop every memoized insight for a day (e.g. after a meal is deleted)
    pub fn invalidate_day(&mut self, date: NaiveDate) -> usize {
        let prefix = format!("{}|", date);
        let stale: Vec<String> = self
            .entries
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix))
            .map(|(k, _)| k.clone())
            .collect();
        for key in &stale {
            self.entries.pop(key);
        }
        stale.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (hits, misses) since creation
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

impl Default for InsightMemo {
    fn default() -> Self {
        Self::new(DEFAULT_MEMO_CAPACITY.get())
    }
}
