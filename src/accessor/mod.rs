//! Accessor constructors for the four store member kinds.
//!
//! Each submodule exposes the same factory family, one function per
//! call-site shape:
//!
//! - `key(name)` - bare key at the store root
//! - `key_in(namespace, name)` - bare key under a namespace
//! - `map(transform)` - custom transform at the store root
//! - `map_in(namespace, transform)` - custom transform under a namespace
//!
//! (Getters have no transform form.) Factories return a *binding*: a
//! reusable, store-agnostic mapper. Calling `bind` on a binding with a
//! concrete [`StoreHandle`](crate::handle::StoreHandle) produces the
//! terminal bound accessor.

pub mod action;
pub mod getter;
pub mod mutation;
pub mod state;

use std::sync::Arc;

use crate::handle::StoreHandle;

/// Erased read: resolves a value from the store at every call.
pub(crate) type ResolveFn<S, R> = Arc<dyn Fn(&S) -> R + Send + Sync>;

/// Erased invoker: forwards a payload into the store's side-effect surface.
pub(crate) type InvokeFn<S, R> =
    Arc<dyn Fn(&S, <S as StoreHandle>::Payload) -> R + Send + Sync>;

pub use action::{ActionBinding, BoundAction};
pub use getter::{BoundGetter, GetterBinding};
pub use mutation::{BoundMutation, MutationBinding};
pub use state::{BoundState, StateBinding};
