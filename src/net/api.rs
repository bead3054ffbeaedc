//! Session API client for the identity endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Every request
//! sends cookies (`credentials: include`), whether or not it looks
//! authenticated, since the server alone decides if a session exists.
//! Server-side (SSR): stubs returning `NetworkError` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is a tagged `SessionResult`; nothing panics or throws
//! past this module. Non-2xx bodies are decoded once here into
//! `ErrorBody`, so callers never inspect raw response shapes, and a
//! body that fails to decode downgrades to the generic fallback rather
//! than crashing the caller.

#![allow(clippy::unused_async)]

use super::types::{Credentials, RegistrationRequest, SessionResult, User};

#[cfg(feature = "hydrate")]
use super::types::{ErrorBody, MessageBody};

/// Fallback when the server rejects a request without a readable body.
pub const REQUEST_FAILED: &str = "Request failed";

/// Message for transport-level failures. Carries no information about
/// credential validity.
pub const SERVER_UNREACHABLE: &str = "Could not reach the server";

#[cfg(not(feature = "hydrate"))]
const SSR_STUB: &str = "not available on the server";

/// Fetch the currently authenticated user via `GET /api/user`.
///
/// Callers treat `Failure` and `NetworkError` alike as "no session":
/// the server answers this probe with a non-2xx both when the cookie is
/// missing and when it is stale, and the banner renders the logged-out
/// branch either way.
pub async fn fetch_current_user() -> SessionResult<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get("/api/user")
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(_) => return SessionResult::NetworkError(SERVER_UNREACHABLE.to_owned()),
        };
        if resp.ok() {
            match resp.json::<User>().await {
                Ok(user) => SessionResult::Success(user),
                Err(_) => SessionResult::NetworkError(SERVER_UNREACHABLE.to_owned()),
            }
        } else {
            SessionResult::Failure(failure_message(resp).await)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SessionResult::NetworkError(SSR_STUB.to_owned())
    }
}

/// Log in via `POST /api/login`.
///
/// Success means the server has set the session cookie; the payload is
/// its confirmation message, not an identity. Callers that need the
/// identity confirm it with [`fetch_current_user`].
pub async fn login(credentials: &Credentials) -> SessionResult<String> {
    #[cfg(feature = "hydrate")]
    {
        let req = match gloo_net::http::Request::post("/api/login")
            .credentials(web_sys::RequestCredentials::Include)
            .json(credentials)
        {
            Ok(req) => req,
            Err(_) => return SessionResult::NetworkError(SERVER_UNREACHABLE.to_owned()),
        };
        message_outcome(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        SessionResult::NetworkError(SSR_STUB.to_owned())
    }
}

/// Create an account via `POST /api/register`.
///
/// Does not establish a session; a successful registration still
/// requires a login.
pub async fn register(request: &RegistrationRequest) -> SessionResult<String> {
    #[cfg(feature = "hydrate")]
    {
        let req = match gloo_net::http::Request::post("/api/register")
            .credentials(web_sys::RequestCredentials::Include)
            .json(request)
        {
            Ok(req) => req,
            Err(_) => return SessionResult::NetworkError(SERVER_UNREACHABLE.to_owned()),
        };
        message_outcome(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        SessionResult::NetworkError(SSR_STUB.to_owned())
    }
}

/// End the session via `POST /api/logout`. The response body is ignored.
pub async fn logout() -> SessionResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::post("/api/logout")
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(_) => return SessionResult::NetworkError(SERVER_UNREACHABLE.to_owned()),
        };
        if resp.ok() {
            SessionResult::Success(())
        } else {
            SessionResult::Failure(failure_message(resp).await)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SessionResult::NetworkError(SSR_STUB.to_owned())
    }
}

/// Drive a prepared request to completion and map the response to a
/// message-bearing outcome.
#[cfg(feature = "hydrate")]
async fn message_outcome(req: gloo_net::http::Request) -> SessionResult<String> {
    let resp = match req.send().await {
        Ok(resp) => resp,
        Err(_) => return SessionResult::NetworkError(SERVER_UNREACHABLE.to_owned()),
    };
    if resp.ok() {
        match resp.json::<MessageBody>().await {
            Ok(body) => SessionResult::Success(body.message),
            Err(_) => SessionResult::NetworkError(SERVER_UNREACHABLE.to_owned()),
        }
    } else {
        SessionResult::Failure(failure_message(resp).await)
    }
}

/// Extract the server's error text from a non-2xx response, falling
/// back to a generic message when the body is absent or unreadable.
#[cfg(feature = "hydrate")]
async fn failure_message(resp: gloo_net::http::Response) -> String {
    resp.json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| REQUEST_FAILED.to_owned())
}
