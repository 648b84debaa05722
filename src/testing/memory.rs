use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;
use tokio::sync::oneshot;

use crate::binding::{Namespace, SEPARATOR};
use crate::handle::StoreHandle;

type GetterFn = Arc<dyn Fn(&StateView) -> Value + Send + Sync>;
type MutationFn = Arc<dyn Fn(&mut StateMut<'_>, Value) + Send + Sync>;
type ActionFn = Arc<dyn Fn(&ActionContext, Value) -> Value + Send + Sync>;

/// Deferred result produced by [`MemoryStore`] dispatch.
///
/// The action runs synchronously and its result is already waiting in the
/// channel; receive it with `await` or `blocking_recv()`.
pub type Deferred = oneshot::Receiver<Value>;

struct Inner {
    state: HashMap<String, Value>,
    getters: HashMap<String, GetterFn>,
    mutations: HashMap<String, MutationFn>,
    actions: HashMap<String, ActionFn>,
}

/// In-memory store handle for tests and demos.
///
/// All members are keyed by full path: `"value"` lives at the root,
/// `"cart/total"` in the `cart` module. Getters, mutations and actions are
/// registered as closures and receive views scoped to their own module, so
/// namespaced members read and write local keys. The store carries no
/// reactivity or subscriptions.
///
/// Failure policy: unknown state/getter reads yield [`Value::Null`];
/// committing or dispatching an unregistered path panics.
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                state: HashMap::new(),
                getters: HashMap::new(),
                mutations: HashMap::new(),
                actions: HashMap::new(),
            })),
        }
    }

    /// Seed or overwrite a state entry at `path`.
    pub fn set_state(&self, path: &str, value: Value) {
        self.inner
            .write()
            .unwrap()
            .state
            .insert(path.to_string(), value);
    }

    /// Read a state entry; `Null` when absent.
    pub fn state(&self, path: &str) -> Value {
        self.read_state(path)
    }

    /// Register a getter at `path`, computed from its module's state.
    pub fn register_getter(
        &self,
        path: &str,
        getter: impl Fn(&StateView) -> Value + Send + Sync + 'static,
    ) {
        self.inner
            .write()
            .unwrap()
            .getters
            .insert(path.to_string(), Arc::new(getter));
    }

    /// Register a mutation at `path`. The handler receives a mutable view of
    /// its module's state and the payload.
    pub fn register_mutation(
        &self,
        path: &str,
        mutation: impl Fn(&mut StateMut<'_>, Value) + Send + Sync + 'static,
    ) {
        self.inner
            .write()
            .unwrap()
            .mutations
            .insert(path.to_string(), Arc::new(mutation));
    }

    /// Register an action at `path`. The handler receives an
    /// [`ActionContext`] scoped to its module and the payload; its return
    /// value resolves the deferred handed back by dispatch.
    pub fn register_action(
        &self,
        path: &str,
        action: impl Fn(&ActionContext, Value) -> Value + Send + Sync + 'static,
    ) {
        self.inner
            .write()
            .unwrap()
            .actions
            .insert(path.to_string(), Arc::new(action));
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl StoreHandle for MemoryStore {
    type Value = Value;
    type Payload = Value;
    type Deferred = Deferred;
    type ScopedState = StateView;
    type ScopedGetters = GetterView;

    fn read_state(&self, path: &str) -> Value {
        self.inner
            .read()
            .unwrap()
            .state
            .get(path)
            .cloned()
            .unwrap_or(Value::Null)
    }

    fn read_getter(&self, path: &str) -> Value {
        let (getter, view) = {
            let inner = self.inner.read().unwrap();
            let getter = match inner.getters.get(path) {
                Some(getter) => Arc::clone(getter),
                None => return Value::Null,
            };
            let (namespace, _) = split_path(path);
            (getter, snapshot(&inner.state, &namespace))
        };
        // Evaluate outside the lock; getters may be arbitrarily expensive.
        getter(&view)
    }

    fn scoped_state(&self, namespace: &Namespace) -> StateView {
        snapshot(&self.inner.read().unwrap().state, namespace)
    }

    fn scoped_getters(&self, namespace: &Namespace) -> GetterView {
        GetterView {
            store: self.clone(),
            namespace: namespace.clone(),
        }
    }

    fn commit(&self, path: &str, payload: Value) {
        let mutation = {
            let inner = self.inner.read().unwrap();
            match inner.mutations.get(path) {
                Some(mutation) => Arc::clone(mutation),
                None => panic!("no mutation registered at `{path}`"),
            }
        };
        let (namespace, _) = split_path(path);
        let mut inner = self.inner.write().unwrap();
        let mut slice = StateMut {
            entries: &mut inner.state,
            namespace,
        };
        mutation(&mut slice, payload);
    }

    fn dispatch(&self, path: &str, payload: Value) -> Deferred {
        let action = {
            let inner = self.inner.read().unwrap();
            match inner.actions.get(path) {
                Some(action) => Arc::clone(action),
                None => panic!("no action registered at `{path}`"),
            }
        };
        let (namespace, _) = split_path(path);
        let context = ActionContext {
            store: self.clone(),
            namespace,
        };
        let (tx, rx) = oneshot::channel();
        let result = action(&context, payload);
        let _ = tx.send(result);
        rx
    }
}

/// Read-only snapshot of one module's state, keyed relative to the module.
#[derive(Clone, Debug)]
pub struct StateView {
    entries: HashMap<String, Value>,
}

impl StateView {
    /// Read a module-local key; `Null` when absent.
    pub fn get(&self, key: &str) -> Value {
        self.entries.get(key).cloned().unwrap_or(Value::Null)
    }
}

/// Lazy view over one module's getters; evaluates on read.
#[derive(Clone)]
pub struct GetterView {
    store: MemoryStore,
    namespace: Namespace,
}

impl GetterView {
    /// Evaluate a module-local getter; `Null` when absent.
    pub fn get(&self, key: &str) -> Value {
        self.store.read_getter(&self.namespace.qualify(key))
    }
}

/// Mutable view of one module's state, handed to mutation handlers.
pub struct StateMut<'a> {
    entries: &'a mut HashMap<String, Value>,
    namespace: Namespace,
}

impl StateMut<'_> {
    /// Read a module-local key; `Null` when absent.
    pub fn get(&self, key: &str) -> Value {
        self.entries
            .get(&self.namespace.qualify(key))
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// Write a module-local key.
    pub fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(self.namespace.qualify(key), value);
    }
}

/// Capability surface handed to action handlers, scoped to the action's
/// module.
pub struct ActionContext {
    store: MemoryStore,
    namespace: Namespace,
}

impl ActionContext {
    /// Commit a module-local mutation.
    pub fn commit(&self, key: &str, payload: Value) {
        self.store.commit(&self.namespace.qualify(key), payload);
    }

    /// Dispatch a module-local action.
    pub fn dispatch(&self, key: &str, payload: Value) -> Deferred {
        self.store.dispatch(&self.namespace.qualify(key), payload)
    }

    /// Snapshot of the module's current state.
    pub fn state(&self) -> StateView {
        self.store.scoped_state(&self.namespace)
    }
}

fn split_path(path: &str) -> (Namespace, &str) {
    match path.rfind(SEPARATOR) {
        Some(index) => (Namespace::new(&path[..index]), &path[index + 1..]),
        None => (Namespace::root(), path),
    }
}

fn snapshot(state: &HashMap<String, Value>, namespace: &Namespace) -> StateView {
    let entries = state
        .iter()
        .filter_map(|(path, value)| {
            relative_key(path, namespace).map(|key| (key.to_string(), value.clone()))
        })
        .collect();
    StateView { entries }
}

// A key belongs to a module only directly: nested sub-module keys are not
// part of the parent's slice.
fn relative_key<'a>(path: &'a str, namespace: &Namespace) -> Option<&'a str> {
    let rest = if namespace.is_root() {
        path
    } else {
        path.strip_prefix(namespace.prefix())?
    };
    if rest.contains(SEPARATOR) {
        None
    } else {
        Some(rest)
    }
}
