use super::types::MenuAnalysis;
use crate::error::AnalysisError;
use serde_json::Value;

/// Parse and validate a response body into a `MenuAnalysis`.
///
/// The shape checks mirror the documented contract exactly: the body must be
/// a JSON object carrying `recommendations`, `notRecommended` and
/// `otherOptions` as arrays, `recommendations` must be non-empty, and every
/// item must satisfy its field types. Each failure mode gets its own
/// distinguishable message so the surfaced alert says what actually went
/// wrong.
pub fn parse_analysis(body: &str) -> Result<MenuAnalysis, AnalysisError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|_| AnalysisError::InvalidFormat("not valid JSON".into()))?;

    let Some(object) = value.as_object() else {
        return Err(AnalysisError::InvalidFormat("not an object".into()));
    };

    let all_arrays = ["recommendations", "notRecommended", "otherOptions"]
        .iter()
        .all(|key| object.get(*key).is_some_and(Value::is_array));
    if !all_arrays {
        return Err(AnalysisError::InvalidFormat("missing required arrays".into()));
    }

    if object["recommendations"]
        .as_array()
        .is_none_or(Vec::is_empty)
    {
        return Err(AnalysisError::NoRecommendations);
    }

    serde_json::from_value(value)
        .map_err(|_| AnalysisError::InvalidFormat("data structure mismatch".into()))
}
