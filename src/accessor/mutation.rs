//! Mutation-invoke accessors.

use std::sync::Arc;

use tracing::trace;

use super::InvokeFn;
use crate::binding::Namespace;
use crate::handle::{Committer, StoreHandle};

/// Mapper for a mutation invoker.
pub struct MutationBinding<S: StoreHandle, R> {
    invoke: InvokeFn<S, R>,
}

impl<S: StoreHandle, R> MutationBinding<S, R> {
    /// Close over `store` and produce the terminal accessor.
    pub fn bind(&self, store: &S) -> BoundMutation<S, R> {
        BoundMutation {
            store: store.clone(),
            invoke: Arc::clone(&self.invoke),
        }
    }
}

impl<S: StoreHandle, R> Clone for MutationBinding<S, R> {
    fn clone(&self) -> Self {
        Self {
            invoke: Arc::clone(&self.invoke),
        }
    }
}

/// Bound mutation invoker.
pub struct BoundMutation<S: StoreHandle, R> {
    store: S,
    invoke: InvokeFn<S, R>,
}

impl<S: StoreHandle, R> BoundMutation<S, R> {
    /// Invoke the mutation with `payload`.
    ///
    /// Bare-key bindings return the store's native commit return, `()`.
    /// Transform bindings return the transform's value instead.
    pub fn commit(&self, payload: S::Payload) -> R {
        (self.invoke)(&self.store, payload)
    }
}

impl<S: StoreHandle, R> Clone for BoundMutation<S, R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            invoke: Arc::clone(&self.invoke),
        }
    }
}

/// Bind a top-level mutation key.
pub fn key<S: StoreHandle>(key: impl Into<String>) -> MutationBinding<S, ()> {
    key_in(Namespace::root(), key)
}

/// Bind a mutation key under a namespace.
pub fn key_in<S: StoreHandle>(
    namespace: impl Into<Namespace>,
    key: impl Into<String>,
) -> MutationBinding<S, ()> {
    let path = namespace.into().qualify(&key.into());
    MutationBinding {
        invoke: Arc::new(move |store: &S, payload| {
            trace!(%path, "commit");
            store.commit(&path, payload);
        }),
    }
}

/// Bind a custom commit transform at the store root.
///
/// The transform receives a [`Committer`] in place of the raw store, plus
/// the payload. Its return value becomes the accessor's return value.
pub fn map<S, F, R>(transform: F) -> MutationBinding<S, R>
where
    S: StoreHandle,
    F: Fn(&Committer<S>, S::Payload) -> R + Send + Sync + 'static,
{
    map_in(Namespace::root(), transform)
}

/// Bind a custom commit transform under a namespace.
///
/// Keys committed through the [`Committer`] are composed under `namespace`,
/// so the transform can chain several module-local commits and still report
/// a computed result to the caller.
pub fn map_in<S, F, R>(namespace: impl Into<Namespace>, transform: F) -> MutationBinding<S, R>
where
    S: StoreHandle,
    F: Fn(&Committer<S>, S::Payload) -> R + Send + Sync + 'static,
{
    let namespace = namespace.into();
    MutationBinding {
        invoke: Arc::new(move |store: &S, payload| {
            let committer = Committer::new(store.clone(), namespace.clone());
            transform(&committer, payload)
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::testing::MemoryStore;

    fn counter_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.set_state("value", json!(123));
        store.register_mutation("increment", |state, payload| {
            let current = state.get("value").as_i64().unwrap_or(0);
            let step = payload.as_i64().unwrap_or(0);
            state.set("value", json!(current + step));
        });
        store
    }

    #[test]
    fn bare_key_commits_and_returns_unit() {
        let store = counter_store();
        let increment = key("increment").bind(&store);
        increment.commit(json!(10));
        assert_eq!(store.state("value"), json!(133));
    }

    #[test]
    fn binding_is_reusable_across_stores() {
        let binding = key("increment");
        let first = counter_store();
        let second = counter_store();
        binding.bind(&first).commit(json!(1));
        binding.bind(&second).commit(json!(2));
        assert_eq!(first.state("value"), json!(124));
        assert_eq!(second.state("value"), json!(125));
    }

    #[test]
    fn transform_return_wins_over_native_return() {
        let store = counter_store();
        let binding = map(|commit: &Committer<MemoryStore>, payload: Value| {
            commit.commit("increment", payload.clone());
            payload
        });
        let increment = binding.bind(&store);
        // The side effect lands exactly once and the transform's value is
        // what the caller sees.
        assert_eq!(increment.commit(json!(7)), json!(7));
        assert_eq!(store.state("value"), json!(130));
    }
}
