//! Spendwise Dashboard
//!
//! Personal finance tracker frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Account registration and login
//! - Spending summary by category
//! - AI summary generation on demand
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Spendwise API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
