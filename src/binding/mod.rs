//! Binding-time primitives: namespace normalization and key-path composition.
//!
//! Every accessor constructor funnels through [`Namespace`], so a given
//! namespace/key pair always composes to the same path string. Nothing here
//! validates that a composed path exists in a store; unknown paths surface
//! only through the store handle itself.

mod namespace;

pub use namespace::{Namespace, SEPARATOR};
