use tracing::trace;

use super::StoreHandle;
use crate::binding::Namespace;

/// Commit capability scoped to one namespace.
///
/// Handed to mutation transforms in place of the raw store: every key passed
/// to [`commit`](Committer::commit) is composed under the captured namespace
/// before it reaches the store. A transform can chain several commits and
/// still report its own return value to the caller.
pub struct Committer<S: StoreHandle> {
    store: S,
    namespace: Namespace,
}

impl<S: StoreHandle> Committer<S> {
    pub(crate) fn new(store: S, namespace: Namespace) -> Self {
        Self { store, namespace }
    }

    /// Commit `payload` to the mutation `key` under the captured namespace.
    pub fn commit(&self, key: &str, payload: S::Payload) {
        let path = self.namespace.qualify(key);
        trace!(%path, "commit");
        self.store.commit(&path, payload);
    }
}

/// Dispatch capability scoped to one namespace.
///
/// The action-transform counterpart of [`Committer`]. The deferred result of
/// each forwarded dispatch is returned to the transform, which decides
/// whether to surface or drop it.
pub struct Dispatcher<S: StoreHandle> {
    store: S,
    namespace: Namespace,
}

impl<S: StoreHandle> Dispatcher<S> {
    pub(crate) fn new(store: S, namespace: Namespace) -> Self {
        Self { store, namespace }
    }

    /// Dispatch `payload` to the action `key` under the captured namespace.
    pub fn dispatch(&self, key: &str, payload: S::Payload) -> S::Deferred {
        let path = self.namespace.qualify(key);
        trace!(%path, "dispatch");
        self.store.dispatch(&path, payload)
    }
}
