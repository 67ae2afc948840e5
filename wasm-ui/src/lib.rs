//! Web UI for claims-desk
//!
//! Two independent Yew screens compiled to WebAssembly: the invoice fraud
//! dashboard and the processed-claims list. The host page mounts either one
//! (or both) into an element of its choosing.

mod browser;
mod claim_list;
mod components;
mod dashboard;
mod notice;

use wasm_bindgen::prelude::*;

/// Module initialisation: panic messages and `tracing` events go to the
/// devtools console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

fn mount_point(root_id: &str) -> Result<web_sys::Element, JsValue> {
    gloo::utils::document()
        .get_element_by_id(root_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{root_id}'")))
}

/// Mount the invoice fraud dashboard into the element with id `root_id`.
#[wasm_bindgen]
pub fn run_invoice_dashboard(root_id: &str) -> Result<(), JsValue> {
    let root = mount_point(root_id)?;
    yew::Renderer::<dashboard::InvoiceDashboard>::with_root(root).render();
    Ok(())
}

/// Mount the processed-claims list into the element with id `root_id`.
///
/// With `notify_on_error` a failed fetch raises an alert; otherwise it is
/// only logged and the list stays empty.
#[wasm_bindgen]
pub fn run_claim_list(root_id: &str, notify_on_error: bool) -> Result<(), JsValue> {
    let root = mount_point(root_id)?;
    let props = claim_list::ClaimsProps { notify_on_error };
    yew::Renderer::<claim_list::ClaimsApp>::with_root_and_props(root, props).render();
    Ok(())
}
