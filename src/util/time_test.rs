#![cfg(not(target_arch = "wasm32"))]

use super::*;

#[test]
fn now_iso_is_stable_on_the_host() {
    assert_eq!(now_iso(), now_iso());
}

#[test]
fn now_iso_looks_like_an_iso_timestamp() {
    let ts = now_iso();
    assert!(ts.contains('T'));
    assert!(ts.ends_with('Z'));
}
