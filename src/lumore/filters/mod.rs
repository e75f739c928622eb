//! # Filter Query Builder
//!
//! Admins narrow user queries with a set of typed filters: one value per field,
//! where the field comes from a fixed catalog. This module is the whole
//! pipeline, and every stage is a plain synchronous function:
//!
//! ```text
//! raw text ──parse──▶ FilterValue ──upsert──▶ FilterSet ──encode──▶ query params / JSON
//! ```
//!
//! ## Field Kinds
//!
//! | Kind | Example key | Accepted input |
//! |------|-------------|----------------|
//! | `String` | `country` | any non-blank text |
//! | `Boolean` | `isVerified` | exactly `true` or `false` |
//! | `Number` | `minAge` | finite decimal number |
//! | `StringArray` | `interests` | comma separated, blanks dropped |
//!
//! ## Usage
//!
//! ```
//! use lumore_admin::filters::{encode_query_params, FilterSet};
//!
//! let mut filters = FilterSet::new();
//! filters.apply("minAge", "18").unwrap();
//! filters.apply("interests", "music, travel").unwrap();
//! assert!(filters.apply("isVerified", "yes").is_err());
//!
//! let params = encode_query_params(&filters);
//! assert_eq!(params["interests"], "music,travel");
//! ```

mod catalog;
mod encode;
mod set;
mod value;

pub use catalog::{kind_for, label_for, list_fields, resolve, FieldDescriptor, ValueKind, FIELDS};
pub use encode::{
    decode_json_object, decode_query_params, encode_json_object, encode_query_params,
    DecodeError, QueryParams,
};
pub use set::{DisplayEntry, FilterSet};
pub use value::{format_number, parse_value, FilterValue, ParseError};
