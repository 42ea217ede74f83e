//! Data models for the arena client.

mod choice;
mod label;
mod popup_state;

pub use choice::{ChoiceEvent, ComparisonItem};
pub use label::{LabelAnnotation, LabelAnnotationSet};
pub use popup_state::{PopupPhase, PopupState};
