//! # View Group
//!
//! Registration and dispatch of container/child actions on native elements.
//!
//! A module registers callbacks typed against its concrete container and child types on a
//! [`DefinitionBuilder`]. Each callback is wrapped in an adapter that only speaks in terms of
//! `dyn Element` / `ElementRef`, so a dispatcher without static knowledge of those types can
//! invoke it. Adapters check the runtime type of every operand before forwarding and report
//! [`ViewGroupError::TypeMismatch`] instead of running the callback on the wrong type.
//!
//! ```rust
//! use std::sync::Arc;
//! use vbridge_derive::Element;
//! use vbridge_domain::action::ActionKind;
//! use vbridge_view_group::{ActionSlot, DefinitionBuilder};
//!
//! #[derive(Debug, Default, Element)]
//! struct Toolbar {
//!     buttons: Vec<Arc<Button>>,
//! }
//!
//! #[derive(Debug, Element)]
//! struct Button;
//!
//! # fn main() -> Result<(), vbridge_view_group::ViewGroupError> {
//! let mut builder = DefinitionBuilder::new();
//! builder.get_child_count(|toolbar: &Toolbar| toolbar.buttons.len());
//! let definition = builder.build();
//!
//! let toolbar = Toolbar { buttons: vec![Arc::new(Button)] };
//! if let Some(ActionSlot::GetChildCount(count)) = definition.lookup(ActionKind::GetChildCount) {
//!     assert_eq!(count.invoke(&toolbar)?, 1);
//! }
//! # Ok(())
//! # }
//! ```

mod action;
mod builder;
mod definition;
mod error;

pub use crate::action::{
    AddChildAction, GetChildAtAction, GetChildCountAction, RemoveChildAction, RemoveChildAtAction,
};
pub use crate::builder::DefinitionBuilder;
pub use crate::definition::{ActionSlot, ViewGroupDefinition};
pub use crate::error::{Operand, ViewGroupError, ViewGroupErrorExt};
