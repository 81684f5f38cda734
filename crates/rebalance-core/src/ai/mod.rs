//! Food-recognition model replies
//!
//! The model itself (image analysis, free-text logging) is an external
//! service. This module owns what comes back: the reply shapes and the
//! tolerant JSON extraction used to read them.
//!
//! # Usage
//!
//! ```rust,ignore
//! let input = parse_logged_input(&reply_text)?;
//! match input.into_record(now) {
//!     LogRecord::Meal(meal) => store_meal(meal),
//!     LogRecord::Water(water) => store_water(water),
//! }
//! ```

pub mod parsing;
pub mod types;

pub use parsing::{extract_json, parse_food_estimate, parse_logged_input};
pub use types::{Confidence, FoodEstimate, LogRecord, LoggedInput, DEFAULT_WATER_ML};
