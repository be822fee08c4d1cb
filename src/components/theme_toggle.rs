//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::app::ThemeVersion;
use crate::state::theme::ThemeStore;

/// Header button switching between light and dark themes.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeStore>();
    let version = expect_context::<ThemeVersion>().0;

    let current = theme.clone();
    let is_dark = move || {
        version.get();
        current.current().is_dark()
    };

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| theme.toggle()
            title="Toggle dark mode"
        >
            {move || if is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
