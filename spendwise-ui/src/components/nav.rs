//! Navigation Component
//!
//! Header navigation bar with logo and links.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"💸"</span>
                        <span class="text-xl font-bold text-white">"Spendwise"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        {move || {
                            if let Some(user) = state.current_user.get() {
                                view! {
                                    <NavLink href="/dashboard" label="Dashboard" />
                                    <span class="px-4 py-2 text-sm text-gray-400">
                                        {format!("Signed in as {}", user)}
                                    </span>
                                }.into_view()
                            } else {
                                view! {
                                    <NavLink href="/login" label="Login" />
                                    <NavLink href="/register" label="Register" />
                                }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
