//! Routed pages. Each page owns its form state and drives its own
//! session calls; shared identity lives in `state::auth`.

pub mod home;
pub mod login;
pub mod register;
