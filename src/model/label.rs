//! Resolved display labels for identifiers found in the current view.

use std::collections::HashMap;

use super::ComparisonItem;

/// One discovered identifier and the text displayed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelAnnotation {
    pub identifier: ComparisonItem,
    /// Resolved label, or the raw identifier when resolution failed
    pub label: String,
    /// Whether `label` came from the lookup service
    pub resolved: bool,
}

/// Ordered annotations, index-aligned with the discovered elements.
///
/// Rebuilt on every view load; nothing is carried over between loads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelAnnotationSet {
    annotations: Vec<LabelAnnotation>,
}

impl LabelAnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotate each identifier from `labels`, falling back to the identifier itself
    /// when it is missing or empty. Duplicates are looked up independently.
    pub fn from_lookup(identifiers: &[ComparisonItem], labels: &HashMap<String, String>) -> Self {
        let annotations = identifiers
            .iter()
            .map(|id| match labels.get(id.as_str()).filter(|l| !l.is_empty()) {
                Some(label) => LabelAnnotation {
                    identifier: id.clone(),
                    label: label.clone(),
                    resolved: true,
                },
                None => LabelAnnotation {
                    identifier: id.clone(),
                    label: id.as_str().to_string(),
                    resolved: false,
                },
            })
            .collect();

        Self { annotations }
    }

    /// Every identifier displayed as itself.
    pub fn unresolved(identifiers: &[ComparisonItem]) -> Self {
        Self::from_lookup(identifiers, &HashMap::new())
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LabelAnnotation> {
        self.annotations.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabelAnnotation> {
        self.annotations.iter()
    }

    /// Number of identifiers the lookup service actually labelled.
    pub fn resolved_count(&self) -> usize {
        self.annotations.iter().filter(|a| a.resolved).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<ComparisonItem> {
        raw.iter().map(|id| ComparisonItem::from(*id)).collect()
    }

    #[test]
    fn test_partial_lookup_falls_back_to_identifier() {
        let labels = HashMap::from([("Q1".to_string(), "universe".to_string())]);
        let set = LabelAnnotationSet::from_lookup(&ids(&["Q1", "Q2"]), &labels);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().label, "universe");
        assert!(set.get(0).unwrap().resolved);
        assert_eq!(set.get(1).unwrap().label, "Q2");
        assert!(!set.get(1).unwrap().resolved);
        assert_eq!(set.resolved_count(), 1);
    }

    #[test]
    fn test_empty_label_counts_as_missing() {
        let labels = HashMap::from([("Q5".to_string(), String::new())]);
        let set = LabelAnnotationSet::from_lookup(&ids(&["Q5"]), &labels);

        assert_eq!(set.get(0).unwrap().label, "Q5");
        assert_eq!(set.resolved_count(), 0);
    }

    #[test]
    fn test_duplicates_keep_order() {
        let labels = HashMap::from([("Q42".to_string(), "Douglas Adams".to_string())]);
        let set = LabelAnnotationSet::from_lookup(&ids(&["Q42", "Q7", "Q42"]), &labels);

        let shown: Vec<&str> = set.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(shown, vec!["Douglas Adams", "Q7", "Douglas Adams"]);
    }

    #[test]
    fn test_unresolved_shows_raw_identifiers() {
        let set = LabelAnnotationSet::unresolved(&ids(&["Q1", "Q2"]));
        assert!(set.iter().all(|a| !a.resolved && a.label == a.identifier.as_str()));
    }
}
