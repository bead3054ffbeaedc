//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain: `auth` holds the one cross-component
//! shared value (the server-confirmed identity), `forms` holds the
//! per-page submission machines. Form state is never shared between
//! components; only the auth store is.

pub mod auth;
pub mod forms;
