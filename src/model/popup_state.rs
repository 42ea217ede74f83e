//! State of the enlarged-image popup.

/// Coarse phase of the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupPhase {
    #[default]
    Hidden,
    Shown,
}

/// Visibility plus bound image source.
///
/// `image_source` is non-empty exactly when `visible` is true; the only
/// constructors are [`PopupState::hidden`] and [`PopupState::shown`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PopupState {
    visible: bool,
    image_source: String,
}

impl PopupState {
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Shown with the given source. An empty source yields the hidden state.
    pub fn shown(image_source: impl Into<String>) -> Self {
        let image_source = image_source.into();
        Self {
            visible: !image_source.is_empty(),
            image_source,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn image_source(&self) -> &str {
        &self.image_source
    }

    pub fn phase(&self) -> PopupPhase {
        if self.visible {
            PopupPhase::Shown
        } else {
            PopupPhase::Hidden
        }
    }
}
