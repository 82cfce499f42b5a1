//! DOM-backed field access, alert notifications and submit interception

use std::cell::Cell;

use purchase_validation_core::{FieldSource, FormValidator, Notifier, ValidatorConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement};

/// Reads field values from `<input>` elements by id
pub struct DomFields {
    document: Document,
}

impl DomFields {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl FieldSource for DomFields {
    fn field_value(&self, id: &str) -> Option<String> {
        let element = self.document.get_element_by_id(id)?;
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(input.value()),
            Err(_) => {
                web_sys::console::warn_1(&format!("#{} is not an <input> element", id).into());
                None
            }
        }
    }
}

/// Shows notifications with the browser's blocking `alert()`
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            web_sys::console::error_1(&format!("Could not show alert: {}", message).into());
        }
    }
}

thread_local! {
    static ATTACHED: Cell<bool> = const { Cell::new(false) };
}

/// Returns false if a validator is already attached
fn claim_attachment() -> bool {
    ATTACHED.with(|attached| !attached.replace(true))
}

fn release_attachment() {
    ATTACHED.with(|attached| attached.set(false));
}

/// Attach the validator to the configured form once the page has loaded.
///
/// If the document is still loading, registration waits for
/// `DOMContentLoaded`; otherwise it happens immediately. Only the first
/// successful call registers a submit listener; later calls log a warning
/// and do nothing. A failed registration can be retried.
pub fn attach(config: ValidatorConfig) -> Result<(), JsValue> {
    if !claim_attachment() {
        web_sys::console::warn_1(&"Purchase validator is already attached".into());
        return Ok(());
    }

    let result = schedule_registration(config);
    if result.is_err() {
        release_attachment();
    }
    result
}

fn schedule_registration(config: ValidatorConfig) -> Result<(), JsValue> {
    let document = current_document()?;

    if document_is_loading(&document) {
        let on_loaded = Closure::once(move || {
            if let Err(err) = register_submit_handler(config) {
                release_attachment();
                web_sys::console::error_1(&err);
            }
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_loaded.as_ref().unchecked_ref(),
        )?;
        on_loaded.forget();
        Ok(())
    } else {
        register_submit_handler(config)
    }
}

fn register_submit_handler(config: ValidatorConfig) -> Result<(), JsValue> {
    let document = current_document()?;

    let form: HtmlFormElement = document
        .query_selector(&config.form_selector)?
        .ok_or_else(|| JsValue::from_str(&format!("No form matches '{}'", config.form_selector)))?
        .dyn_into()
        .map_err(|_| {
            JsValue::from_str(&format!("'{}' is not a <form> element", config.form_selector))
        })?;

    let fields = DomFields::new(document);
    let validator = FormValidator::with_config(config, AlertNotifier);

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if validator.handle_submit(&fields).should_prevent_default() {
            event.prevent_default();
        }
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    Ok(())
}

fn current_document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window available"))?
        .document()
        .ok_or_else(|| JsValue::from_str("No document available"))
}

fn document_is_loading(document: &Document) -> bool {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .map(|state| state == "loading")
        .unwrap_or(false)
}
