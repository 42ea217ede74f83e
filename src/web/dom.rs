//! DOM-backed popup, label elements, ranking table and keyboard source.

use gloo_events::EventListener;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, KeyboardEvent};

use crate::bootstrap::{KeySource, RankingTable};
use crate::config::DomSelectors;
use crate::constants::dom::{POPUP_HIDDEN_DISPLAY, POPUP_SHOWN_DISPLAY};
use crate::error::ClientError;
use crate::labels::LabelView;
use crate::model::{ComparisonItem, PopupState};
use crate::popup::PopupView;

/// The current document.
pub fn document() -> Result<Document, ClientError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ClientError::dom("No document available"))
}

fn js_error(context: &str, value: JsValue) -> ClientError {
    ClientError::dom(format!("{}: {:?}", context, value))
}

/// Popup container located by id, looked up on every change.
pub struct DomPopup {
    popup_id: String,
    image_selector: String,
}

impl DomPopup {
    pub fn new(selectors: &DomSelectors) -> Self {
        Self {
            popup_id: selectors.popup_id.clone(),
            image_selector: selectors.popup_image.clone(),
        }
    }

    fn elements(&self) -> Result<(HtmlElement, HtmlImageElement), ClientError> {
        let container: HtmlElement = document()?
            .get_element_by_id(&self.popup_id)
            .ok_or_else(|| ClientError::dom(format!("No element #{}", self.popup_id)))?
            .dyn_into()
            .map_err(|_| ClientError::dom(format!("#{} is not an HTML element", self.popup_id)))?;

        let image: HtmlImageElement = container
            .query_selector(&self.image_selector)
            .map_err(|e| js_error("Invalid popup image selector", e))?
            .ok_or_else(|| ClientError::dom(format!("No image inside #{}", self.popup_id)))?
            .dyn_into()
            .map_err(|_| ClientError::dom("Popup image is not an <img>"))?;

        Ok((container, image))
    }
}

impl PopupView for DomPopup {
    fn apply(&self, state: &PopupState) {
        let (container, image) = match self.elements() {
            Ok(elements) => elements,
            Err(e) => {
                log::warn!("Popup not rendered: {}", e);
                return;
            }
        };

        let display = if state.is_visible() {
            POPUP_SHOWN_DISPLAY
        } else {
            POPUP_HIDDEN_DISPLAY
        };
        if let Err(e) = container.style().set_property("display", display) {
            log::warn!("Failed to set popup display: {:?}", e);
        }
        image.set_src(state.image_source());
    }
}

/// Identifier-bearing elements found when the view loaded.
pub struct DomLabels {
    items: Vec<(Element, ComparisonItem)>,
}

impl DomLabels {
    /// Snapshot every element matching `label_items` that carries the id attribute.
    pub fn collect(document: &Document, selectors: &DomSelectors) -> Result<Self, ClientError> {
        let nodes = document
            .query_selector_all(&selectors.label_items)
            .map_err(|e| js_error("Invalid label selector", e))?;

        let mut items = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(element) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            match element.get_attribute(&selectors.id_attribute) {
                Some(id) => items.push((element, ComparisonItem::new(id))),
                None => log::debug!(
                    "Skipping {} element without {}",
                    selectors.label_items,
                    selectors.id_attribute
                ),
            }
        }

        Ok(Self { items })
    }
}

impl LabelView for DomLabels {
    fn identifiers(&self) -> Vec<ComparisonItem> {
        self.items.iter().map(|(_, id)| id.clone()).collect()
    }

    fn set_label(&self, index: usize, label: &str) {
        if let Some((element, _)) = self.items.get(index) {
            element.set_text_content(Some(label));
        }
    }
}

/// jQuery DataTables attached to the ranking table.
pub struct DomTable {
    selector: String,
}

impl DomTable {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
        }
    }
}

impl RankingTable for DomTable {
    fn enable_paging(&self, page_length: usize) -> Result<(), ClientError> {
        let window = web_sys::window().ok_or_else(|| ClientError::dom("No window available"))?;

        let jquery: Function = Reflect::get(&window, &JsValue::from_str("jQuery"))
            .map_err(|e| js_error("Reading jQuery", e))?
            .dyn_into()
            .map_err(|_| ClientError::dom("jQuery is not loaded"))?;

        let table = jquery
            .call1(&JsValue::NULL, &JsValue::from_str(&self.selector))
            .map_err(|e| js_error("Selecting ranking table", e))?;

        let data_table: Function = Reflect::get(&table, &JsValue::from_str("DataTable"))
            .map_err(|e| js_error("Reading DataTable", e))?
            .dyn_into()
            .map_err(|_| ClientError::dom("DataTables plugin is not loaded"))?;

        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("pageLength"),
            &JsValue::from_f64(page_length as f64),
        )
        .map_err(|e| js_error("Building DataTable options", e))?;

        data_table
            .call1(&table, &options)
            .map_err(|e| js_error("Initializing DataTable", e))?;

        log::debug!("DataTable attached to {}", self.selector);
        Ok(())
    }
}

/// Keydown events on the whole document.
pub struct DocumentKeys {
    document: Document,
}

impl DocumentKeys {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl KeySource for DocumentKeys {
    type Guard = EventListener;

    fn on_key_down(&self, handler: Box<dyn Fn(&str)>) -> EventListener {
        EventListener::new(&self.document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                handler(&event.key());
            }
        })
    }
}
