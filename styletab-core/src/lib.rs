//! Styletab core library.
//!
//! Turns a stream of [`StyleRecord`]s into a GitHub-flavoured Markdown table.
//! Records arrive through the [`StyleSource`] trait; providers such as the CSV
//! reader live in their own crates.
//!
//! Every record has its `keywords` and `effects` lists normalised with
//! [`normalize_list`] exactly once before it is written. The `name` column is
//! emitted verbatim inside bold markers.

mod error;
mod generator;
mod normalize;
mod record;
mod source;
pub mod table;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{Result, SourceError, SourceErrorCode, TableError, TableErrorCode},
    generator::{TableGenerator, TableSummary},
    normalize::normalize_list,
    record::{Column, StyleRecord},
    source::StyleSource,
};
