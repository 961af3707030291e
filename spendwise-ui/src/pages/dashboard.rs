//! Dashboard Page
//!
//! Spending summary list and AI summary generation.

use leptos::*;

use crate::api;
use crate::components::ListSkeleton;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (spending, set_spending) = create_signal(Vec::<api::SpendingItem>::new());
    let (summary, set_summary) = create_signal(None::<String>);
    let (error, set_error) = create_signal(None::<&'static str>);
    let (loading, set_loading) = create_signal(true);
    let (generating, set_generating) = create_signal(false);

    // Fetch spending data on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_spending_summary().await {
                Ok(items) => {
                    set_spending.set(items);
                }
                Err(e) => {
                    state.show_error(&e);
                    set_error.set(Some("Failed to fetch spending data"));
                }
            }
            set_loading.set(false);
        });
    });

    let on_generate = move |_| {
        set_generating.set(true);
        set_error.set(None);

        let state = state.clone();
        spawn_local(async move {
            match api::generate_summary().await {
                Ok(text) => {
                    set_summary.set(Some(text));
                }
                Err(e) => {
                    state.show_error(&e);
                    set_error.set(Some("Failed to generate summary"));
                }
            }
            set_generating.set(false);
        });
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Your spending at a glance"</p>
            </div>

            {move || {
                error.get().map(|msg| view! {
                    <p class="text-red-400 text-sm">{msg}</p>
                })
            }}

            // Spending list
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Spending Summary"</h2>

                {move || {
                    if loading.get() {
                        view! { <ListSkeleton count=4 /> }.into_view()
                    } else if spending.get().is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"No spending recorded yet"</p>
                        }.into_view()
                    } else {
                        view! {
                            <ul class="divide-y divide-gray-700">
                                {spending.get().into_iter().map(|item| view! {
                                    <li class="flex justify-between py-2">
                                        <span>{item.category}</span>
                                        <span class="font-semibold">
                                            {format_amount(item.amount)}
                                        </span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        }.into_view()
                    }
                }}
            </section>

            // AI summary
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"AI Summary"</h2>

                <button
                    on:click=on_generate
                    disabled=move || generating.get()
                    class="px-6 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if generating.get() {
                        "Generating..."
                    } else {
                        "Generate AI Summary"
                    }}
                </button>

                {move || {
                    if generating.get() {
                        view! {
                            <div class="mt-4 animate-pulse">
                                <div class="h-4 bg-gray-700 rounded w-3/4 mb-2" />
                                <div class="h-4 bg-gray-700 rounded w-full mb-2" />
                                <div class="h-4 bg-gray-700 rounded w-5/6" />
                            </div>
                        }.into_view()
                    } else if let Some(text) = summary.get() {
                        view! {
                            <div class="mt-4 bg-gray-700 rounded-lg p-4">
                                <div class="flex items-start space-x-3">
                                    <span class="text-2xl">"💡"</span>
                                    <p class="text-gray-200 leading-relaxed whitespace-pre-wrap">{text}</p>
                                </div>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </section>
        </div>
    }
}

/// Format a spending amount as dollars with two decimals
fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(150.5), "$150.50");
        assert_eq!(format_amount(75.0), "$75.00");
        assert_eq!(format_amount(0.0), "$0.00");
    }
}
