//! Values, variable bindings and their resolution for layerkit documents.
//!
//! This crate holds the parts of the document model that do not depend on
//! the node tree: scalar [`Value`]s, the [`Variable`] indirection, and the
//! pure functions that turn a variable into a concrete value given a
//! [`ResolutionContext`].
//!
//! # Resolution
//!
//! ```
//! use layerkit_model::{PropertyValues, ResolutionContext, Value, Variable};
//!
//! let mut values = PropertyValues::new();
//! values.insert("title".into(), Value::from("Welcome"));
//! let context = ResolutionContext::new().with_property_values(&values);
//!
//! assert_eq!(Variable::<String>::property("title").resolve(&context), "Welcome");
//! assert_eq!(Variable::<String>::property("missing").resolve(&context), "");
//! assert_eq!(Variable::<String>::property("missing").resolve_strict(&context), None);
//! ```
//!
//! # Architecture
//!
//! - `value.rs` - Scalar values, colors and image references
//! - `variable.rs` - Variable bindings and their wire shape
//! - `number.rs` - Wire form of numbers, including non-finite ones
//! - `resolve.rs` - Resolution context and fallback rules
//! - `key_path.rs` - Key paths into external data
//! - `condition.rs` - Predicates over resolved values
//! - `collection.rs` - Filter, sort and limit over data arrays
//! - `action.rs` - Actions, resolved actions and the handler registry

mod action;
mod collection;
mod condition;
mod error;
mod key_path;
pub mod number;
mod resolve;
mod value;
mod variable;

pub use action::{
    Action, ActionHandler, ActionHandlers, Parameter, ParameterValue, ResolvedAction,
};
pub use collection::{CollectionQuery, Limit, SortDescriptor};
pub use condition::{Condition, Predicate, all_hold};
pub use error::KeyPathError;
pub use key_path::{KeyPath, Segment};
pub use resolve::{
    DefaultReason, Resolvable, ResolutionContext, ResolutionDefaulted, Resolved, resolve,
    resolve_strict,
};
pub use value::{ColorValue, ImageReference, PropertyValues, Value};
pub use variable::{Binding, Literal, Variable};
