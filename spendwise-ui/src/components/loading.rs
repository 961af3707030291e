//! Loading Component
//!
//! Skeleton states shown while a fetch is pending.

use leptos::*;

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-700 rounded h-10" />
            }).collect_view()}
        </div>
    }
}
