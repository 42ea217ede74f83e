//! Batched resolution of entity identifiers to display labels.
//!
//! The lookup contract is "resolve with default": a [`LabelLookup`] returns
//! whatever labels it found, and every identifier it did not label keeps
//! displaying its raw form.

use std::collections::HashMap;
use std::future::Future;

use crate::error::ClientError;
use crate::model::{ComparisonItem, LabelAnnotationSet};

/// Elements in the current view that carry an identifier to relabel.
pub trait LabelView {
    /// Identifiers in document order; duplicates allowed.
    fn identifiers(&self) -> Vec<ComparisonItem>;

    /// Replace the text of the element at `index` (as returned by `identifiers`).
    fn set_label(&self, index: usize, label: &str);
}

/// Remote identifier-to-label resolver.
pub trait LabelLookup {
    /// Fetch labels for all `ids` in a single request.
    fn lookup(
        &self,
        ids: &[ComparisonItem],
    ) -> impl Future<Output = Result<HashMap<String, String>, ClientError>>;
}

/// Relabels identifier elements once per view load.
pub struct LabelResolver<L> {
    lookup: L,
}

impl<L: LabelLookup> LabelResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Resolve every identifier in `view` and write the results back.
    ///
    /// With no identifiers no request is made. If the request fails the error
    /// is logged and no element is touched, so all keep their raw identifier.
    /// Never fails.
    pub async fn resolve_labels<V: LabelView>(&self, view: &V) -> LabelAnnotationSet {
        let ids = view.identifiers();
        if ids.is_empty() {
            log::debug!("No identifiers to label");
            return LabelAnnotationSet::new();
        }

        log::debug!("Resolving labels for {} identifiers", ids.len());

        let labels = match self.lookup.lookup(&ids).await {
            Ok(labels) => labels,
            Err(e) => {
                log::error!("Error fetching labels: {}", e);
                return LabelAnnotationSet::unresolved(&ids);
            }
        };

        let annotations = LabelAnnotationSet::from_lookup(&ids, &labels);
        for (index, annotation) in annotations.iter().enumerate() {
            view.set_label(index, &annotation.label);
        }

        log::info!(
            "Labelled {}/{} identifiers",
            annotations.resolved_count(),
            annotations.len()
        );
        annotations
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }
}
