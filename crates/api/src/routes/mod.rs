//! Request handlers.

pub mod records;
pub mod status;
