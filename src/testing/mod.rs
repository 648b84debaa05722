//! Test-support store.
//!
//! The accessor layer never constructs a store of its own; this module
//! provides the in-memory stand-in the crate's tests and demos bind
//! against. [`MemoryStore`] implements
//! [`StoreHandle`](crate::handle::StoreHandle) with JSON values, registered
//! getters/mutations/actions and namespaced modules, and carries no
//! reactivity.

mod memory;

pub use memory::{ActionContext, Deferred, GetterView, MemoryStore, StateMut, StateView};
