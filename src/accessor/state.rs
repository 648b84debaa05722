//! State-read accessors.

use std::sync::Arc;

use super::ResolveFn;
use crate::binding::Namespace;
use crate::handle::StoreHandle;

/// Mapper for a state read.
///
/// Produced by [`key`], [`key_in`], [`map`] and [`map_in`]; bind it to a
/// store to obtain a [`BoundState`]. A binding is pure with respect to its
/// namespace, key and transform: it can be bound against any number of
/// stores and captures no store contents itself.
pub struct StateBinding<S, R> {
    resolve: ResolveFn<S, R>,
}

impl<S: StoreHandle, R> StateBinding<S, R> {
    /// Close over `store` and produce the terminal accessor.
    ///
    /// Captures the handle only; store contents are read at call time.
    pub fn bind(&self, store: &S) -> BoundState<S, R> {
        BoundState {
            store: store.clone(),
            resolve: Arc::clone(&self.resolve),
        }
    }
}

impl<S, R> Clone for StateBinding<S, R> {
    fn clone(&self) -> Self {
        Self {
            resolve: Arc::clone(&self.resolve),
        }
    }
}

/// Bound state accessor.
///
/// Every [`get`](BoundState::get) re-reads the store; values are never
/// cached, so a mutation executed elsewhere between two calls is visible in
/// the second.
pub struct BoundState<S, R> {
    store: S,
    resolve: ResolveFn<S, R>,
}

impl<S: StoreHandle, R> BoundState<S, R> {
    /// Read the current value.
    pub fn get(&self) -> R {
        (self.resolve)(&self.store)
    }
}

impl<S: Clone, R> Clone for BoundState<S, R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            resolve: Arc::clone(&self.resolve),
        }
    }
}

/// Bind a top-level state key.
pub fn key<S: StoreHandle>(key: impl Into<String>) -> StateBinding<S, S::Value> {
    key_in(Namespace::root(), key)
}

/// Bind a state key under a namespace.
pub fn key_in<S: StoreHandle>(
    namespace: impl Into<Namespace>,
    key: impl Into<String>,
) -> StateBinding<S, S::Value> {
    let path = namespace.into().qualify(&key.into());
    StateBinding {
        resolve: Arc::new(move |store: &S| store.read_state(&path)),
    }
}

/// Bind a custom projection over the root state and getters.
///
/// The transform receives the store's root state slice and root getters
/// slice on every call and its result becomes the accessor's value.
pub fn map<S, F, R>(transform: F) -> StateBinding<S, R>
where
    S: StoreHandle,
    F: Fn(&S::ScopedState, &S::ScopedGetters) -> R + Send + Sync + 'static,
{
    map_in(Namespace::root(), transform)
}

/// Bind a custom projection over a namespaced state and getters slice.
pub fn map_in<S, F, R>(namespace: impl Into<Namespace>, transform: F) -> StateBinding<S, R>
where
    S: StoreHandle,
    F: Fn(&S::ScopedState, &S::ScopedGetters) -> R + Send + Sync + 'static,
{
    let namespace = namespace.into();
    StateBinding {
        resolve: Arc::new(move |store: &S| {
            let state = store.scoped_state(&namespace);
            let getters = store.scoped_getters(&namespace);
            transform(&state, &getters)
        }),
    }
}
