//! The attribute merge algebra.
//!
//! This module provides the kind-independent core:
//!
//! - [`Attribute`]: a typed configuration fact with a value-erased identity key
//! - [`Attributed`]: an ordered container of attributes of one kind, with
//!   query and merge operations
//! - [`merge`], [`merge_all`], [`MergeOptional`]: override-by-key merging
//! - [`CustomStyle`], [`recursive_merge`]: nested styles that merge recursively
//! - [`attributed!`](crate::attributed): declares a container for a kind
//!
//! Containers never mutate. Every merge builds a new one, so all operations
//! here can be called from any thread.

mod attribute;
mod container;
mod custom;
mod error;
mod macros;
mod merge;

pub use attribute::{strip_all, Attribute};
pub use container::{Attributed, Stripped};
pub use custom::{recursive_merge, AnyAttributed, CustomStyle};
pub use error::AttributeError;
pub use merge::{filter_stripped, merge, merge_all, MergeOptional};
