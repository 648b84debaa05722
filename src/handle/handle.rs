use crate::binding::Namespace;

/// Capability contract a store must expose for accessors to bind against.
///
/// The accessor layer never constructs or mutates a store; it only calls
/// into these capabilities at invocation time. Handles are expected to be
/// cheap to clone (reference-counted views onto shared state) so bound
/// accessors can own one.
///
/// Errors are not raised by the accessor layer; whatever a capability does
/// for an unknown path propagates unchanged to the caller.
pub trait StoreHandle: Clone {
    /// Value produced by flat state and getter reads.
    type Value;

    /// Payload accepted by [`commit`](StoreHandle::commit) and
    /// [`dispatch`](StoreHandle::dispatch).
    type Payload;

    /// Deferred result produced by [`dispatch`](StoreHandle::dispatch).
    ///
    /// The accessor layer forwards it verbatim; it is never awaited,
    /// wrapped, or cancelled here.
    type Deferred;

    /// Namespaced state slice handed to state transforms.
    type ScopedState;

    /// Namespaced getters slice handed to state transforms.
    type ScopedGetters;

    /// Read one key from the flat state projection.
    fn read_state(&self, path: &str) -> Self::Value;

    /// Read one key from the flat getters projection.
    fn read_getter(&self, path: &str) -> Self::Value;

    /// Resolve the state slice registered under `namespace`.
    fn scoped_state(&self, namespace: &Namespace) -> Self::ScopedState;

    /// Resolve the getters slice registered under `namespace`.
    fn scoped_getters(&self, namespace: &Namespace) -> Self::ScopedGetters;

    /// Invoke the mutation registered under `path` with `payload`.
    fn commit(&self, path: &str, payload: Self::Payload);

    /// Invoke the action registered under `path` with `payload`.
    fn dispatch(&self, path: &str, payload: Self::Payload) -> Self::Deferred;
}
