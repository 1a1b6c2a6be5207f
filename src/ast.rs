//! # cell_methods - Abstract Syntax Representation
//!
//! This module defines the typed representation of CF Conventions
//! `cell_methods` attribute strings, the controlled mini-language used in
//! climate and meteorology metadata to describe how a grid-cell value was
//! statistically derived.
//!
//! ## Architecture Overview
//!
//! The module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[nodes]** - Representation nodes (`CellMethods`, `CellMethod`,
//!   `Method`, `ExtraInfo`, `SxiInterval`)
//! - **[matching]** - Generic keyed matching against specification maps
//!
//! ## The language
//!
//! A `cell_methods` string is one or more entries of the form
//!
//! ```text
//! name: method [where type] [over dimension] [extra-info]
//! name: method within period [extra-info]
//! ```
//!
//! where `method` is a statistic name optionally followed by a bracketed
//! numeric parameter list, and `extra-info` is a parenthesized span holding
//! a standardized `interval: N unit` clause, a free-text comment, or both.
//! The two entry forms are alternative grammar productions, so `within`
//! never coexists with `where`/`over` on one entry.
//!
//! ```text
//! time: mean (interval: 1 day)
//! area: mean where sea_ice over sea
//! time: mean within days time: mean over days
//! models: percentile[5]
//! ```
//!
//! ## Core Concepts
//!
//! ### Order matters
//!
//! Later entries describe statistics computed over the results of earlier
//! ones: `time: mean within days time: mean over days` is a daily mean
//! subsequently averaged across days (a climatology), not two independent
//! annotations.
//!
//! ### Canonical rendering
//!
//! Every node implements [`Display`](std::fmt::Display), reconstructing a
//! syntactically valid string with absent fields omitted and single-space
//! joins. Parsing the rendering of a parsed value yields an equal value;
//! byte-identical round trips are not promised (whitespace normalizes).
//!
//! ### Keyed matching
//!
//! [`Match`](matching::Match) tests a node against a partial specification
//! map (`serde_json::Value`), recursing through nested sub-nodes. It is a
//! query convenience, not part of parsing.

pub mod matching;
pub mod nodes;
pub mod tokens;

pub use matching::Match;
pub use nodes::{CellMethod, CellMethods, ExtraInfo, Method, SxiInterval};
pub use tokens::Token;
