//! Core business logic for PayCalc.
//!
//! This crate contains pure arithmetic: no web layer, no I/O, no logging.
//! Callers own presentation. The functions here return values and status
//! flags, never messages.
//!
//! # Modules
//!
//! - `conversion` - Forward (USD -> INR) and inverse (INR -> USD) payout math

pub mod conversion;
