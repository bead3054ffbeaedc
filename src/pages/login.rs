//! Login page: email/password form driving the session login call.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::forms::{FormPhase, LoginForm};

/// Login page.
///
/// Submission runs the local email guard, then calls the login
/// endpoint. On success the identity is confirmed with a whoami call
/// (the store is only ever fed server-confirmed values) and the page
/// navigates home. On failure the form returns to idle with the
/// server's message, fields intact for retry.
#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());

    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut started = None;
        form.update(|f| started = f.begin_submit());
        let Some(credentials) = started else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            use crate::net::types::SessionResult;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::login(&credentials).await {
                    SessionResult::Success(_message) => {
                        // Cookie is set; confirm the identity from the
                        // server before anything reads the store.
                        if let SessionResult::Success(user) = api::fetch_current_user().await {
                            auth.update(|a| a.set_user(user));
                        }
                        navigate("/", NavigateOptions::default());
                    }
                    SessionResult::Failure(message) | SessionResult::NetworkError(message) => {
                        form.update(|f| f.fail(message));
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
        }
    };

    let submitting = move || form.get().phase == FormPhase::Submitting;

    view! {
        <main class="form-signin w-100 m-auto">
            <form on:submit=on_submit>
                <h1 class="h3 mb-3 fw-normal">"Please Sign In"</h1>

                <div class="form-floating">
                    <input
                        type="email"
                        class="form-control"
                        id="email"
                        placeholder="name@example.com"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        required
                    />
                    <label for="email">"Email address"</label>
                </div>
                <div class="form-floating">
                    <input
                        type="password"
                        class="form-control"
                        id="password"
                        placeholder="Password"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        required
                    />
                    <label for="password">"Password"</label>
                </div>

                <button class="btn btn-primary w-100 py-2" type="submit" prop:disabled=submitting>
                    {move || if submitting() { "Signing in..." } else { "Sign In" }}
                </button>

                {move || {
                    form.get()
                        .response_message
                        .map(|msg| view! { <p class="mt-5 mb-3 text-body-secondary">{msg}</p> })
                }}
            </form>
        </main>
    }
}
