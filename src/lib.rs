//! # Tether
//!
//! Typed accessor bindings for centralized state stores.
//!
//! A store holds four kinds of members: state, getters (derived values),
//! mutations (synchronous writes) and actions (asynchronous operations).
//! Tether produces small bound functions for reading or invoking one named,
//! optionally namespaced member, so calling code never re-states the
//! store's key strings and never loses payload or return types.
//!
//! ## Bindings (mappers)
//!
//! Each of [`state`], [`getter`], [`mutation`] and [`action`] builds a
//! binding from a bare key, a namespace and key, or a custom transform.
//! Bindings are reusable and store-agnostic: they hold the composed key
//! path (or the transform), never store contents.
//!
//! ## Bound accessors
//!
//! `bind`ing against a concrete [`StoreHandle`] yields the terminal
//! accessor. Reads re-read the store on every call; invokers forward a
//! payload to the store's `commit`/`dispatch` capability under the composed
//! key path.
//!
//! ```
//! use serde_json::json;
//! use tether::testing::MemoryStore;
//! use tether::{getter, mutation};
//!
//! let store = MemoryStore::new();
//! store.set_state("value", json!(2));
//! store.register_getter("double", |state| {
//!     json!(state.get("value").as_i64().unwrap_or(0) * 2)
//! });
//! store.register_mutation("set", |state, payload| {
//!     state.set("value", payload);
//! });
//!
//! let double = getter::key("double").bind(&store);
//! let set = mutation::key("set").bind(&store);
//!
//! assert_eq!(double.get(), json!(4));
//! set.commit(json!(10));
//! assert_eq!(double.get(), json!(20));
//! ```

pub mod accessor;
pub mod binding;
pub mod handle;
pub mod testing;

// Re-export main types for convenience
pub use accessor::{action, getter, mutation, state};
pub use accessor::{
    ActionBinding, BoundAction, BoundGetter, BoundMutation, BoundState, GetterBinding,
    MutationBinding, StateBinding,
};
pub use binding::{Namespace, SEPARATOR};
pub use handle::{Committer, Dispatcher, StoreHandle};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_works() {
        // Basic smoke test
        let store = testing::MemoryStore::new();
        store.set_state("value", json!(123));

        let value = state::key("value").bind(&store);
        assert_eq!(value.get(), json!(123));
    }
}
