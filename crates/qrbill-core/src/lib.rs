//! # QR Bill Core
//!
//! Core value types for QR bill payment documents.
//!
//! This crate provides:
//! - [`AlternativeScheme`] - a free-form alternative payment scheme instruction
//! - The anchored scheme-name scan used to split an instruction
//! - The error type for contract violations
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod error;
pub mod scan;
pub mod scheme;

pub use error::{Result, SchemeError};
pub use scan::{is_word_char, scheme_name_len, split_scheme_name};
pub use scheme::AlternativeScheme;
