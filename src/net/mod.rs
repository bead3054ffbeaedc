//! Network layer: wire types and the session API client.

pub mod api;
pub mod types;
