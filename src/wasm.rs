//! WASM entry point and the functions exported to page scripts.
//!
//! Templates call `submitChoice`, `submitDraw`, `showPopup` and `hidePopup`
//! from inline handlers, so these keep the names the markup already uses.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;

use crate::bootstrap::{ViewController, content_ready};
use crate::choice::ChoiceSubmitter;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::labels::LabelResolver;
use crate::model::ComparisonItem;
use crate::web::{
    BrowserPage, DocumentKeys, DomLabels, DomPopup, DomTable, HttpChoiceTransport, WikidataLookup,
    dom,
};

type ArenaView = ViewController<DomPopup, DocumentKeys>;
type ArenaSubmitter = ChoiceSubmitter<HttpChoiceTransport, BrowserPage>;

/// Everything owned by the currently mounted view.
struct Session {
    view: ArenaView,
    choices: Rc<ArenaSubmitter>,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if console_log::init_with_level(log::Level::Trace).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::error!("Arena client failed to start: {}", e);
            return;
        }
    };

    // The config block, table and label elements only exist once parsing is done.
    if content_ready(&document.ready_state()) {
        load();
    } else {
        log::debug!("Document still loading, waiting for DOMContentLoaded");
        EventListener::once(&document, "DOMContentLoaded", |_| load()).forget();
    }
}

fn load() {
    let config = ClientConfig::load_from_document();
    log::set_max_level(config.log_level.to_level().to_level_filter());

    if let Err(e) = mount(&config) {
        log::error!("Arena client failed to start: {}", e);
    }
}

fn mount(config: &ClientConfig) -> Result<(), ClientError> {
    let document = dom::document()?;

    let mut view = ViewController::new(
        DomPopup::new(&config.selectors),
        DocumentKeys::new(document.clone()),
        config.page_length,
    );
    view.mount(&DomTable::new(&config.selectors.ranking_table));

    let choices = ChoiceSubmitter::new(
        HttpChoiceTransport::new(&config.choice_endpoint),
        BrowserPage,
    )
    .with_failure_message(config.failure_message.as_str());

    SESSION.with(|session| {
        *session.borrow_mut() = Some(Session {
            view,
            choices: Rc::new(choices),
        });
    });

    let labels = DomLabels::collect(&document, &config.selectors)?;
    let resolver = LabelResolver::new(WikidataLookup::new(config.lookup.clone()));
    wasm_bindgen_futures::spawn_local(async move {
        resolver.resolve_labels(&labels).await;
    });

    Ok(())
}

fn with_session<R>(f: impl FnOnce(&Session) -> R) -> Option<R> {
    let result = SESSION.with(|session| session.borrow().as_ref().map(f));
    if result.is_none() {
        log::warn!("Arena client is not mounted");
    }
    result
}

/// Accept string identifiers, and numbers as rendered by templates.
fn item_from_js(value: &JsValue) -> Option<ComparisonItem> {
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
        .filter(|id| !id.is_empty())
        .map(ComparisonItem::new)
}

fn spawn_submission(first: &JsValue, second: &JsValue, draw: bool) {
    let (Some(first), Some(second)) = (item_from_js(first), item_from_js(second)) else {
        log::error!("Ignoring submission with invalid identifiers: {:?}, {:?}", first, second);
        return;
    };
    let Some(choices) = with_session(|session| Rc::clone(&session.choices)) else {
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        // Reload or alert has already happened inside the submitter.
        let _ = if draw {
            choices.submit_draw(first, second).await
        } else {
            choices.submit_choice(first, second).await
        };
    });
}

/// Record that `winner` beat `loser`, then reload the page.
#[wasm_bindgen(js_name = submitChoice)]
pub fn submit_choice(winner: JsValue, loser: JsValue) {
    spawn_submission(&winner, &loser, false);
}

/// Record a tie between two items, then reload the page.
#[wasm_bindgen(js_name = submitDraw)]
pub fn submit_draw(first: JsValue, second: JsValue) {
    spawn_submission(&first, &second, true);
}

#[wasm_bindgen(js_name = showPopup)]
pub fn show_popup(src: String) {
    with_session(|session| session.view.show_popup(&src));
}

#[wasm_bindgen(js_name = hidePopup)]
pub fn hide_popup() {
    with_session(|session| session.view.hide_popup());
}

/// Tear down the mounted view and its key listener.
#[wasm_bindgen]
pub fn unmount() {
    let session = SESSION.with(|session| session.borrow_mut().take());
    if let Some(mut session) = session {
        session.view.unmount();
    }
}
