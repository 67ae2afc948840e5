//! Browser tests: `wasm-pack test --headless --firefox wasm-ui`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn host(id: &str) {
    let document = gloo::utils::document();
    let div = document.create_element("div").unwrap();
    div.set_id(id);
    gloo::utils::body().append_child(&div).unwrap();
}

#[wasm_bindgen_test]
fn test_missing_root_is_an_error() {
    assert!(claims_desk_web::run_invoice_dashboard("no-such-root").is_err());
    assert!(claims_desk_web::run_claim_list("no-such-root", false).is_err());
}

#[wasm_bindgen_test]
fn test_dashboard_mounts() {
    host("dashboard-root");
    claims_desk_web::run_invoice_dashboard("dashboard-root").unwrap();
}

#[wasm_bindgen_test]
fn test_claim_list_mounts() {
    host("claims-root");
    claims_desk_web::run_claim_list("claims-root", true).unwrap();
}
