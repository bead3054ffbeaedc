//! Top navigation bar reflecting the current session.
//!
//! Renders three branches: nothing identity-related until the initial
//! whoami probe resolves, then either the user's name with a logout
//! button or the login/register links.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::SessionResult;
use crate::state::auth::AuthState;

/// Navigation bar and identity banner.
///
/// Logout clears the auth store as soon as the server acknowledges,
/// even though the response carries no payload; a failed logout only
/// logs, leaving the last confirmed state in place.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            match api::logout().await {
                SessionResult::Success(()) => auth.update(|a| a.clear()),
                SessionResult::Failure(message) | SessionResult::NetworkError(message) => {
                    leptos::logging::warn!("logout failed: {message}");
                }
            }
        });
    };

    view! {
        <nav class="navbar navbar-expand-md navbar-dark fixed-top bg-dark">
            <div class="container-fluid">
                <a class="navbar-brand" href="/">
                    "Home"
                </a>
                {move || {
                    let state = auth.get();
                    if !state.resolved {
                        // Whoami still in flight; claim neither branch.
                        return view! { <ul class="navbar-nav me-auto"></ul> }.into_any();
                    }
                    match state.user {
                        Some(user) => {
                            view! {
                                <ul class="navbar-nav me-auto">
                                    <li class="nav-item">
                                        <span class="nav-link">{user.name}</span>
                                    </li>
                                    <li class="nav-item">
                                        <button class="nav-link btn btn-link" on:click=on_logout>
                                            "Logout"
                                        </button>
                                    </li>
                                </ul>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <ul class="navbar-nav me-auto">
                                    <li class="nav-item">
                                        <a class="nav-link" href="/login">
                                            "Login"
                                        </a>
                                    </li>
                                    <li class="nav-item">
                                        <a class="nav-link" href="/register">
                                            "Register"
                                        </a>
                                    </li>
                                </ul>
                            }
                                .into_any()
                        }
                    }
                }}
            </div>
        </nav>
    }
}
