//! Shared types and value coercions used across the SAP portal gateways.
//!
//! Everything here is pure: identifier padding, numeric parsing of SAP
//! amount/quantity strings, SAP date formatting and array coercion for
//! upstream payloads that may deliver one row as a bare object.

pub mod normalize;
pub mod types;

pub use normalize::{as_array, format_sap_date, parse_integer, parse_numeric};
pub use types::{ID_WIDTH, Padding, normalize_id};
