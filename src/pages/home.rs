//! Home page greeting the authenticated user.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Home page — greets by name when a session exists, otherwise states
/// that no one is logged in. Reads the shared auth store only; it never
/// writes it.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || match auth.get().user {
        Some(user) => format!("Welcome, {}", user.name),
        None => "You are not Logged In".to_owned(),
    };

    view! {
        <div class="home-page">
            <h2>{greeting}</h2>
        </div>
    }
}
