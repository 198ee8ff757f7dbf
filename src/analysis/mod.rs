//! Input diagnostics
//!
//! Explains, without converting, how Base64 input will behave as audio:
//! - Report types
//! - Heuristics over the decoded payload

pub mod diagnostics;
pub mod result;
