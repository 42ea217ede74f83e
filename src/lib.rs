//! Arena client - browser interaction layer for a pairwise-comparison ranking site.
//!
//! Submits choices, drives the enlarged-image popup, pages the ranking table
//! and relabels entity identifiers through a batched lookup. The controllers
//! are platform-independent; the `web` adapters bind them to the DOM in the
//! WASM build.

pub mod bootstrap;
pub mod choice;
pub mod config;
pub mod constants;
pub mod error;
pub mod labels;
pub mod model;
pub mod popup;
pub mod wikidata;

pub use bootstrap::{KeySource, RankingTable, ViewController};
pub use choice::{ChoiceSubmitter, ChoiceTransport, PageHost};
pub use config::{ClientConfig, ConfigError, LogLevel};
pub use error::ClientError;
pub use labels::{LabelLookup, LabelResolver, LabelView};
pub use model::{ChoiceEvent, ComparisonItem, LabelAnnotation, LabelAnnotationSet, PopupState};
pub use popup::{PopupController, PopupView};

#[cfg(target_arch = "wasm32")]
mod web;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
