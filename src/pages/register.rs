//! Register page: account creation form with local confirmation check.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::forms::{FormPhase, RegisterForm};

/// Register page.
///
/// The password-confirmation and email guards reject locally, before
/// any network call. A successful registration does not establish a
/// session, so the page navigates to the login form rather than
/// touching the auth store.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut started = None;
        form.update(|f| started = f.begin_submit());
        let Some(request) = started else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            use crate::net::types::SessionResult;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::register(&request).await {
                    SessionResult::Success(_message) => {
                        navigate("/login", NavigateOptions::default());
                    }
                    SessionResult::Failure(message) | SessionResult::NetworkError(message) => {
                        form.update(|f| f.fail(message));
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let submitting = move || form.get().phase == FormPhase::Submitting;

    view! {
        <main class="form-signin w-100 m-auto">
            <form on:submit=on_submit>
                <h1 class="h3 mb-3 fw-normal">"Please Register"</h1>

                <div class="form-floating">
                    <input
                        type="text"
                        class="form-control"
                        id="name"
                        placeholder="Your Name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        required
                    />
                    <label for="name">"Name"</label>
                </div>
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
                <div class="form-floating">
                    <input
                        type="password"
                        class="form-control"
                        id="confirmPassword"
                        placeholder="Confirm Password"
                        prop:value=move || form.get().confirm_password
                        on:input=move |ev| {
                            form.update(|f| f.confirm_password = event_target_value(&ev));
                        }
                        required
                    />
                    <label for="confirmPassword">"Confirm Password"</label>
                </div>

                <button class="btn btn-primary w-100 py-2" type="submit" prop:disabled=submitting>
                    {move || if submitting() { "Registering..." } else { "Register" }}
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
