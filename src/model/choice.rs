//! Comparison items and the choice payload sent to the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of one side of a pairwise trial.
///
/// Serializes as the bare string so the backend receives the identifier verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonItem(String);

impl ComparisonItem {
    /// Create an item from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComparisonItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComparisonItem {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ComparisonItem {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single user decision, built fresh for every submission.
///
/// Fields are private so an event cannot be altered once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceEvent {
    winner: ComparisonItem,
    loser: ComparisonItem,
    /// Omitted from the body unless set, so a plain choice is `{winner, loser}`
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    draw: bool,
}

impl ChoiceEvent {
    /// A decisive outcome: `winner` beat `loser`.
    pub fn new(winner: ComparisonItem, loser: ComparisonItem) -> Self {
        Self {
            winner,
            loser,
            draw: false,
        }
    }

    /// A tie between the two items.
    pub fn draw(first: ComparisonItem, second: ComparisonItem) -> Self {
        Self {
            winner: first,
            loser: second,
            draw: true,
        }
    }

    pub fn winner(&self) -> &ComparisonItem {
        &self.winner
    }

    pub fn loser(&self) -> &ComparisonItem {
        &self.loser
    }

    pub fn is_draw(&self) -> bool {
        self.draw
    }

    /// Serialize to the JSON request body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_body_has_only_winner_and_loser() {
        let event = ChoiceEvent::new("File:A.jpg".into(), "File:B.jpg".into());
        let value: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "winner": "File:A.jpg", "loser": "File:B.jpg" })
        );
    }

    #[test]
    fn test_draw_body_carries_flag() {
        let event = ChoiceEvent::draw("7".into(), "12".into());
        let value: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();

        assert_eq!(value["winner"], "7");
        assert_eq!(value["loser"], "12");
        assert_eq!(value["draw"], true);
    }

    #[test]
    fn test_identifiers_are_sent_verbatim() {
        let event = ChoiceEvent::new(" spaced id ".into(), "ünïcode|pipe".into());
        let value: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();

        assert_eq!(value["winner"], " spaced id ");
        assert_eq!(value["loser"], "ünïcode|pipe");
    }
}
