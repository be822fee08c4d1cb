#![cfg(not(target_arch = "wasm32"))]

use super::*;

#[test]
fn media_query_signal_is_light_off_wasm() {
    assert!(!MediaQuerySignal.prefers_dark());
}

#[test]
fn apply_document_theme_is_noop_but_callable() {
    apply_document_theme(false);
    apply_document_theme(true);
}
