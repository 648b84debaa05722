//! Getter-read accessors.

use crate::binding::Namespace;
use crate::handle::StoreHandle;

/// Mapper for a getter read. Getters have no transform form; the binding is
/// just the composed path.
#[derive(Clone, Debug)]
pub struct GetterBinding {
    path: String,
}

impl GetterBinding {
    /// Close over `store` and produce the terminal accessor.
    pub fn bind<S: StoreHandle>(&self, store: &S) -> BoundGetter<S> {
        BoundGetter {
            store: store.clone(),
            path: self.path.clone(),
        }
    }
}

/// Bound getter accessor. Re-reads the store on every call.
#[derive(Clone)]
pub struct BoundGetter<S> {
    store: S,
    path: String,
}

impl<S: StoreHandle> BoundGetter<S> {
    /// Read the getter's current value.
    pub fn get(&self) -> S::Value {
        self.store.read_getter(&self.path)
    }
}

/// Bind a top-level getter key.
pub fn key(key: impl Into<String>) -> GetterBinding {
    key_in(Namespace::root(), key)
}

/// Bind a getter key under a namespace.
pub fn key_in(namespace: impl Into<Namespace>, key: impl Into<String>) -> GetterBinding {
    GetterBinding {
        path: namespace.into().qualify(&key.into()),
    }
}
