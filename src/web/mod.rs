//! Browser implementations of the controller traits (WASM only).

pub mod dom;
pub mod http;
pub mod page;

pub use dom::{DocumentKeys, DomLabels, DomPopup, DomTable};
pub use http::{HttpChoiceTransport, WikidataLookup};
pub use page::BrowserPage;
