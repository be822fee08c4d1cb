//! Client-side entry point: mounts the application into the document body.

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(taskpad::app::App);
}

// The binary target is still compiled for host-side test runs; the app
// itself only ever runs in the browser.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
