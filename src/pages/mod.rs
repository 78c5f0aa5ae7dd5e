//! Top-level route pages.

pub mod dashboard;
pub mod login;
pub mod signup;
