//! JSON parsing helpers for model replies
//!
//! Models are asked to return raw JSON but often wrap it in prose or code
//! fences. These functions cut out the outermost object and deserialize it.

use crate::error::{Error, Result};

use super::types::{FoodEstimate, LoggedInput};

/// Longest slice of a raw reply quoted in error messages
const MAX_RAW_IN_ERROR: usize = 200;

fn truncate_raw(raw: &str) -> String {
    if raw.len() <= MAX_RAW_IN_ERROR {
        return raw.to_string();
    }
    let mut end = MAX_RAW_IN_ERROR;
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &raw[..end])
}

/// Slice out the outermost `{ ... }` span of a reply
pub fn extract_json(response: &str) -> Result<&str> {
    let response = response.trim();
    let start = response.find('{');
    let end = response.rfind('}');

    match (start, end) {
        (Some(s), Some(e)) if s < e => Ok(&response[s..=e]),
        _ => Err(Error::InvalidData(format!(
            "No JSON found in AI response | Raw: {}",
            truncate_raw(response)
        ))),
    }
}

/// Parse a nutrition estimate (image or text analysis)
pub fn parse_food_estimate(response: &str) -> Result<FoodEstimate> {
    let json_str = extract_json(response)?;
    let estimate: FoodEstimate = serde_json::from_str(json_str).map_err(|e| {
        Error::InvalidData(format!(
            "Invalid food estimate JSON from AI: {} | Raw: {}",
            e,
            truncate_raw(json_str)
        ))
    })?;

    if estimate.calories < 0.0 {
        return Err(Error::InvalidData(format!(
            "Negative calorie estimate for {}",
            estimate.name
        )));
    }

    tracing::debug!(
        name = %estimate.name,
        calories = estimate.calories,
        confidence = estimate.confidence.map(|c| c.as_str()),
        "Parsed food estimate"
    );
    Ok(estimate)
}

/// Parse a free-text log classified as food or water
pub fn parse_logged_input(response: &str) -> Result<LoggedInput> {
    let json_str = extract_json(response)?;
    let input: LoggedInput = serde_json::from_str(json_str).map_err(|e| {
        Error::InvalidData(format!(
            "Invalid logged input JSON from AI: {} | Raw: {}",
            e,
            truncate_raw(json_str)
        ))
    })?;
    tracing::debug!(kind = input.kind(), "Parsed logged input");
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::types::{Confidence, LogRecord, DEFAULT_WATER_ML};
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_extract_json_with_prose() {
        let reply = "Sure! Here it is:\n```json\n{\"name\": \"Menemen\", \"calories\": 320}\n```\nEnjoy.";
        assert_eq!(
            extract_json(reply).unwrap(),
            "{\"name\": \"Menemen\", \"calories\": 320}"
        );
    }

    #[test]
    fn test_extract_json_missing() {
        let err = extract_json("I can't tell what this is.").unwrap_err();
        match err {
            Error::InvalidData(msg) => assert!(msg.contains("No JSON found")),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(extract_json("} backwards {").is_err());
    }

    #[test]
    fn test_error_truncates_long_reply() {
        let long = "ğ".repeat(300);
        let err = extract_json(&long).unwrap_err().to_string();
        assert!(err.ends_with("..."));
        assert!(err.len() < 300);
    }

    #[test]
    fn test_parse_food_estimate() {
        let reply = r#"{
            "name": "Mercimek çorbası",
            "calories": 180,
            "protein": 9,
            "carbs": 27.5,
            "fat": 4,
            "confidence": "High"
        }"#;
        let estimate = parse_food_estimate(reply).unwrap();
        assert_eq!(estimate.name, "Mercimek çorbası");
        assert_eq!(estimate.calories, 180.0);
        assert_eq!(estimate.carbs, 27.5);
        assert_eq!(estimate.confidence, Some(Confidence::High));
        assert!(estimate.portion_desc.is_none());
    }

    #[test]
    fn test_parse_food_estimate_template_confidence() {
        let reply = r#"{"name": "Pilav", "calories": 350, "confidence": "high/medium/low"}"#;
        let estimate = parse_food_estimate(reply).unwrap();
        assert!(estimate.confidence.is_none());
        assert_eq!(estimate.protein, 0.0);
    }

    #[test]
    fn test_parse_food_estimate_rejects_bad_data() {
        assert!(parse_food_estimate(r#"{"calories": 100}"#).is_err());
        assert!(parse_food_estimate(r#"{"name": "X", "calories": -5}"#).is_err());
        assert!(parse_food_estimate(r#"{"name": "X", "calories": "lots"}"#).is_err());
    }

    #[test]
    fn test_parse_logged_water() {
        let input = parse_logged_input(r#"{"type": "water", "amount": 500}"#).unwrap();
        assert_eq!(input, LoggedInput::Water { amount: 500 });

        let input = parse_logged_input(r#"{"type": "water"}"#).unwrap();
        assert_eq!(input, LoggedInput::Water { amount: DEFAULT_WATER_ML });
    }

    #[test]
    fn test_parse_logged_water_float_amount() {
        let input = parse_logged_input(r#"{"type": "water", "amount": 500.0}"#).unwrap();
        assert_eq!(input, LoggedInput::Water { amount: 500 });

        let input = parse_logged_input(r#"{"type": "water", "amount": 332.6}"#).unwrap();
        assert_eq!(input, LoggedInput::Water { amount: 333 });

        let input = parse_logged_input(r#"{"type": "water", "amount": null}"#).unwrap();
        assert_eq!(input, LoggedInput::Water { amount: DEFAULT_WATER_ML });

        assert!(parse_logged_input(r#"{"type": "water", "amount": -250}"#).is_err());
    }

    #[test]
    fn test_parse_logged_food() {
        let reply = r#"Result: {"type": "food", "data": {"name": "Simit", "calories": 280,
            "protein": 9, "carbs": 50, "fat": 5, "portion_desc": "Estimating for 1 simit"}}"#;
        let input = parse_logged_input(reply).unwrap();
        assert_eq!(input.kind(), "food");

        let at = FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 16, 8, 30, 0)
            .unwrap();
        match input.into_record(at) {
            LogRecord::Meal(meal) => {
                assert_eq!(meal.name, "Simit");
                assert_eq!(meal.calories, Some(280.0));
                assert_eq!(meal.logged_at, at);
            }
            other => panic!("expected meal, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_logged_unknown_type() {
        assert!(parse_logged_input(r#"{"type": "exercise", "minutes": 30}"#).is_err());
    }
}
