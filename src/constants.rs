//! Global constants for the arena client

/// Rows shown per ranking table page unless configured otherwise
pub const DEFAULT_PAGE_LENGTH: usize = 5;

/// Backend endpoint that records a pairwise choice
pub const CHOICE_ENDPOINT: &str = "/submit_choice";

/// Alert text shown when a choice could not be submitted
pub const SUBMIT_FAILURE_MESSAGE: &str = "Error submitting choice.";

/// Key value (`KeyboardEvent.key`) that closes the image popup
pub const ESCAPE_KEY: &str = "Escape";

/// `document.readyState` while the HTML is still being parsed
pub const DOCUMENT_LOADING: &str = "loading";

/// Entity lookup service
pub mod lookup {
    /// Wikidata action API
    pub const API_URL: &str = "https://www.wikidata.org/w/api.php";

    /// Action that fetches entity records in bulk
    pub const ACTION: &str = "wbgetentities";

    /// Only labels are requested, nothing else of the entity record
    pub const PROPS: &str = "labels";

    /// Separator between identifiers in a batched request
    pub const ID_DELIMITER: &str = "|";

    pub const DEFAULT_LANGUAGE: &str = "en";
    pub const DEFAULT_FORMAT: &str = "json";

    /// Enables anonymous cross-origin reads
    pub const DEFAULT_ORIGIN: &str = "*";
}

/// DOM hooks rendered by the server templates
pub mod dom {
    pub const RANKING_TABLE: &str = "#rankingTable";
    pub const LABEL_ITEMS: &str = ".wikidata-item";
    pub const ID_ATTRIBUTE: &str = "data-id";
    pub const POPUP_ID: &str = "imagePopup";
    pub const POPUP_IMAGE: &str = "img";
    pub const CONFIG_SCRIPT_ID: &str = "arena-config";

    /// CSS `display` value of the popup while shown
    pub const POPUP_SHOWN_DISPLAY: &str = "flex";
    pub const POPUP_HIDDEN_DISPLAY: &str = "none";
}
