//! Wikidata `wbgetentities` request parameters and response parsing.
//!
//! Response shape, reduced to what is read here:
//!
//! ```json
//! { "entities": { "Q1": { "labels": { "en": { "language": "en", "value": "universe" } } },
//!                 "Q999999999": { "id": "Q999999999", "missing": "" } } }
//! ```

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::config::LookupConfig;
use crate::constants::lookup;
use crate::model::ComparisonItem;

/// Query parameters for one batched label request.
pub fn query_params(config: &LookupConfig, ids: &[ComparisonItem]) -> Vec<(&'static str, String)> {
    let joined = ids
        .iter()
        .map(ComparisonItem::as_str)
        .collect::<Vec<_>>()
        .join(lookup::ID_DELIMITER);

    vec![
        ("action", lookup::ACTION.to_string()),
        ("ids", joined),
        ("format", config.format.clone()),
        ("languages", config.language.clone()),
        ("props", lookup::PROPS.to_string()),
        ("origin", config.origin.clone()),
    ]
}

#[derive(Debug, Deserialize)]
struct EntitiesResponse {
    /// Records stay untyped so one malformed entity cannot fail the others
    #[serde(default)]
    entities: HashMap<String, Value>,
}

/// `labels.<language>.value` of one entity record, if it is a string.
fn entity_label(record: &Value, language: &str) -> Option<String> {
    record
        .get("labels")?
        .get(language)?
        .get("value")?
        .as_str()
        .map(str::to_string)
}

/// Extract `identifier -> label` in `language` from a response body.
///
/// Entities without a label in that language, or whose record does not have
/// the expected shape, are left out; a body without `entities` yields an
/// empty map. Only a body that is not a JSON object fails.
pub fn parse_labels(body: &str, language: &str) -> Result<HashMap<String, String>, serde_json::Error> {
    let response: EntitiesResponse = serde_json::from_str(body)?;

    Ok(response
        .entities
        .into_iter()
        .filter_map(|(id, record)| {
            let label = entity_label(&record, language);
            if label.is_none() && record.get("missing").is_none() {
                log::debug!("No {} label for {}", language, id);
            }
            label.map(|label| (id, label))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<ComparisonItem> {
        raw.iter().map(|id| ComparisonItem::from(*id)).collect()
    }

    #[test]
    fn test_query_params() {
        let params = query_params(&LookupConfig::default(), &ids(&["Q1", "Q2", "Q1"]));
        let params: HashMap<_, _> = params.into_iter().collect();

        assert_eq!(params["action"], "wbgetentities");
        assert_eq!(params["ids"], "Q1|Q2|Q1");
        assert_eq!(params["format"], "json");
        assert_eq!(params["languages"], "en");
        assert_eq!(params["props"], "labels");
        assert_eq!(params["origin"], "*");
    }

    #[test]
    fn test_query_uses_configured_language() {
        let config = LookupConfig {
            language: "fr".to_string(),
            ..LookupConfig::default()
        };
        let params = query_params(&config, &ids(&["Q1"]));
        assert!(params.contains(&("languages", "fr".to_string())));
    }

    #[test]
    fn test_parse_labels_partial() {
        let body = r#"{
            "entities": {
                "Q1": { "type": "item", "id": "Q1",
                        "labels": { "en": { "language": "en", "value": "universe" } } },
                "Q2": { "id": "Q2", "missing": "" }
            },
            "success": 1
        }"#;

        let labels = parse_labels(body, "en").unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels["Q1"], "universe");
        assert!(!labels.contains_key("Q2"));
    }

    #[test]
    fn test_parse_labels_reads_requested_language_only() {
        let body = r#"{ "entities": { "Q64": { "labels": {
            "de": { "language": "de", "value": "Berlin (Stadt)" },
            "en": { "language": "en", "value": "Berlin" } } } } }"#;

        assert_eq!(parse_labels(body, "en").unwrap()["Q64"], "Berlin");
        assert_eq!(parse_labels(body, "de").unwrap()["Q64"], "Berlin (Stadt)");
        assert!(parse_labels(body, "ja").unwrap().is_empty());
    }

    #[test]
    fn test_parse_error_response_is_empty() {
        let body = r#"{ "error": { "code": "no-such-entity", "info": "Could not find an entity" } }"#;
        assert!(parse_labels(body, "en").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_entity_only_drops_that_entity() {
        let body = r#"{ "entities": {
            "Q1": { "labels": { "en": { "value": "universe" } } },
            "Q2": { "labels": [] } } }"#;
        let labels = parse_labels(body, "en").unwrap();
        assert_eq!(labels["Q1"], "universe");
        assert!(!labels.contains_key("Q2"));

        let body = r#"{ "entities": {
            "Q1": { "labels": { "en": { "value": "universe" } } },
            "Q2": { "labels": { "en": { "value": null } } },
            "Q3": "not a record" } }"#;
        let labels = parse_labels(body, "en").unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels["Q1"], "universe");
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_labels("<html>502 Bad Gateway</html>", "en").is_err());
    }
}
