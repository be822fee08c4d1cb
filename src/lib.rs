//! # taskpad
//!
//! Leptos + WASM single-page todo application. The list of todos and the
//! light/dark theme preference both persist to browser `localStorage` and
//! survive page reloads.
//!
//! This crate contains the root component, presentational components, the
//! two data-owning stores (`state::todos`, `state::theme`), and the browser
//! seams they depend on (`util`).

pub mod app;
pub mod components;
pub mod state;
pub mod util;
