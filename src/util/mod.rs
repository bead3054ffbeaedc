//! Small shared helpers with no UI or network dependencies.

pub mod validate;
