//! Action-invoke accessors.

use std::sync::Arc;

use tracing::trace;

use super::InvokeFn;
use crate::binding::Namespace;
use crate::handle::{Dispatcher, StoreHandle};

/// Mapper for an action invoker.
pub struct ActionBinding<S: StoreHandle, R> {
    invoke: InvokeFn<S, R>,
}

impl<S: StoreHandle, R> ActionBinding<S, R> {
    /// Close over `store` and produce the terminal accessor.
    pub fn bind(&self, store: &S) -> BoundAction<S, R> {
        BoundAction {
            store: store.clone(),
            invoke: Arc::clone(&self.invoke),
        }
    }
}

impl<S: StoreHandle, R> Clone for ActionBinding<S, R> {
    fn clone(&self) -> Self {
        Self {
            invoke: Arc::clone(&self.invoke),
        }
    }
}

/// Bound action invoker.
pub struct BoundAction<S: StoreHandle, R> {
    store: S,
    invoke: InvokeFn<S, R>,
}

impl<S: StoreHandle, R> BoundAction<S, R> {
    /// Invoke the action with `payload`.
    ///
    /// Bare-key bindings return the store's deferred result verbatim; it is
    /// never awaited or wrapped here. Transform bindings return the
    /// transform's value and drop the native deferred unless the transform
    /// chooses to surface it.
    pub fn dispatch(&self, payload: S::Payload) -> R {
        (self.invoke)(&self.store, payload)
    }
}

impl<S: StoreHandle, R> Clone for BoundAction<S, R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            invoke: Arc::clone(&self.invoke),
        }
    }
}

/// Bind a top-level action key.
pub fn key<S: StoreHandle>(key: impl Into<String>) -> ActionBinding<S, S::Deferred> {
    key_in(Namespace::root(), key)
}

/// Bind an action key under a namespace.
pub fn key_in<S: StoreHandle>(
    namespace: impl Into<Namespace>,
    key: impl Into<String>,
) -> ActionBinding<S, S::Deferred> {
    let path = namespace.into().qualify(&key.into());
    ActionBinding {
        invoke: Arc::new(move |store: &S, payload| {
            trace!(%path, "dispatch");
            store.dispatch(&path, payload)
        }),
    }
}

/// Bind a custom dispatch transform at the store root.
///
/// The transform receives a [`Dispatcher`] in place of the raw store, plus
/// the payload. Its return value becomes the accessor's return value.
pub fn map<S, F, R>(transform: F) -> ActionBinding<S, R>
where
    S: StoreHandle,
    F: Fn(&Dispatcher<S>, S::Payload) -> R + Send + Sync + 'static,
{
    map_in(Namespace::root(), transform)
}

/// Bind a custom dispatch transform under a namespace.
pub fn map_in<S, F, R>(namespace: impl Into<Namespace>, transform: F) -> ActionBinding<S, R>
where
    S: StoreHandle,
    F: Fn(&Dispatcher<S>, S::Payload) -> R + Send + Sync + 'static,
{
    let namespace = namespace.into();
    ActionBinding {
        invoke: Arc::new(move |store: &S, payload| {
            let dispatcher = Dispatcher::new(store.clone(), namespace.clone());
            transform(&dispatcher, payload)
        }),
    }
}
