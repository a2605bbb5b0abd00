//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`string::wrap`] — word-wrapping used by the options printer

pub mod error;
pub mod string;
