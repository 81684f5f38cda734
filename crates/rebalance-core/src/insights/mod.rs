//! Daily rebalance insights
//!
//! Compares what was eaten today with the day's targets and picks one
//! categorized recommendation for the next meal.
//!
//! ## Rules (first match wins)
//!
//! 1. **Zero intake** - nothing logged yet
//! 2. **Carb excess** - carbs running ahead of calories
//! 3. **Fat excess** - fat running ahead of calories
//! 4. **Protein deficit** - protein trailing calories
//! 5. **Late day** - 20:00 or later and under target
//! 6. **On track** - below 95% of calories
//! 7. **Target met**
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rebalance_core::insights::classify_daily_insight;
//!
//! let insight = classify_daily_insight(&totals, &targets, 14);
//! println!("{}: {}", insight.title, insight.message);
//! ```

pub mod classifier;
pub mod memo;
pub mod types;

pub use classifier::{classify_daily_insight, classify_now, Progress};
pub use memo::{memo_key, InsightMemo};
pub use types::{Insight, InsightIcon, InsightRule, Severity, SuggestedMeal};
