//! Login Page
//!
//! Credential form; navigates to the dashboard on success.

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::api;
use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<&'static str>);
    let (submitting, set_submitting) = create_signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let credentials = api::Credentials {
            username: username.get(),
            password: password.get(),
        };

        set_submitting.set(true);
        set_error.set(None);

        let navigate = navigate.clone();
        let state = state.clone();
        spawn_local(async move {
            match api::login(&credentials).await {
                Ok(()) => {
                    state.current_user.set(Some(credentials.username.clone()));
                    navigate("/dashboard", Default::default());
                }
                Err(_) => {
                    set_error.set(Some("Invalid credentials"));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-[70vh]">
            <div class="w-full max-w-md p-8 space-y-6 bg-gray-800 rounded-xl shadow-md">
                <h2 class="text-2xl font-bold text-center">"Login"</h2>

                {move || {
                    error.get().map(|msg| view! {
                        <p class="text-red-400 text-sm">{msg}</p>
                    })
                }}

                <form on:submit=on_submit class="space-y-6">
                    <div>
                        <label class="block text-sm font-medium text-gray-300">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full px-3 py-2 mt-1 bg-gray-700 rounded-lg
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                            required
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-300">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full px-3 py-2 mt-1 bg-gray-700 rounded-lg
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                            required
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() {
                            "Logging in..."
                        } else {
                            "Login"
                        }}
                    </button>
                </form>

                <p class="text-sm text-center text-gray-400">
                    "Don't have an account? "
                    <A href="/register" class="font-medium text-primary-400 hover:underline">
                        "Register"
                    </A>
                </p>
            </div>
        </div>
    }
}
