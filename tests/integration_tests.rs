//! Integration tests for Tether

use serde_json::{json, Value};
use tether::testing::MemoryStore;
use tether::{action, getter, mutation, state, Committer, Dispatcher};

fn counter_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.set_state("value", json!(123));
    store.register_getter("double", |state| {
        json!(state.get("value").as_i64().unwrap_or(0) * 2)
    });
    store.register_mutation("increment", |state, payload| {
        let current = state.get("value").as_i64().unwrap_or(0);
        let step = payload.as_i64().unwrap_or(0);
        state.set("value", json!(current + step));
    });
    store.register_action("doubleIncrement", |context, payload| {
        let step = payload.as_i64().unwrap_or(0);
        context.commit("increment", json!(step * 2));
        json!(null)
    });
    store
}

fn message_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.set_state("test/message", json!("Foo"));
    store.register_mutation("test/update", |state, payload| {
        state.set("message", payload);
    });
    store.register_getter("test/greet", |state| {
        json!(format!(
            "Hello, {}",
            state.get("message").as_str().unwrap_or_default()
        ))
    });
    store.register_action("test/doubleAssign", |context, payload| {
        let message = payload.as_str().unwrap_or_default();
        context.commit("update", json!(format!("{message}{message}")));
        json!(null)
    });
    store
}

#[test]
fn state_read() {
    let store = counter_store();

    let value = state::key("value").bind(&store);
    assert_eq!(value.get(), json!(123));
}

#[test]
fn state_read_is_never_cached() {
    let store = counter_store();

    let value = state::key("value").bind(&store);
    assert_eq!(value.get(), json!(123));

    let increment = mutation::key("increment").bind(&store);
    increment.commit(json!(10));

    // Same accessor, fresh read: the intervening mutation is visible.
    assert_eq!(value.get(), json!(133));
}

#[test]
fn state_transform_receives_scoped_slices() {
    let store = message_store();

    let binding = state::map_in(
        "test",
        |state: &tether::testing::StateView, getters: &tether::testing::GetterView| {
            let message = state.get("message");
            let greet = getters.get("greet");
            json!({ "message": message, "greet": greet })
        },
    );
    let summary = binding.bind(&store);

    assert_eq!(
        summary.get(),
        json!({ "message": "Foo", "greet": "Hello, Foo" })
    );
}

#[test]
fn getter_read() {
    let store = counter_store();

    let double = getter::key("double").bind(&store);
    assert_eq!(double.get(), json!(246));
}

#[test]
fn namespaced_getter_read() {
    let store = message_store();

    let greet = getter::key_in("test", "greet").bind(&store);
    assert_eq!(greet.get(), json!("Hello, Foo"));
}

#[test]
fn mutation_commit() {
    let store = counter_store();

    let increment = mutation::key("increment").bind(&store);
    increment.commit(json!(10));

    assert_eq!(store.state("value"), json!(133));
}

#[test]
fn namespaced_mutation_commit() {
    let store = message_store();

    let update = mutation::key_in("test", "update").bind(&store);
    update.commit(json!("Bar"));

    assert_eq!(store.state("test/message"), json!("Bar"));
}

#[test]
fn mapped_mutation_returns_transform_value() {
    let store = MemoryStore::new();
    store.set_state("foo/message", json!("Foo"));
    store.register_mutation("foo/update", |state, payload| {
        state.set("message", payload);
    });

    let binding = mutation::map_in("foo", |commit: &Committer<MemoryStore>, payload: Value| {
        let message = format!("{} from mapper", payload.as_str().unwrap_or_default());
        commit.commit("update", json!(message));
        payload
    });
    let update = binding.bind(&store);

    assert_eq!(update.commit(json!("Bar")), json!("Bar"));
    assert_eq!(store.state("foo/message"), json!("Bar from mapper"));
}

#[test]
fn action_dispatch_forwards_deferred() {
    let store = counter_store();

    let double_increment = action::key("doubleIncrement").bind(&store);
    let deferred = double_increment.dispatch(json!(10));

    assert_eq!(store.state("value"), json!(143));
    // The deferred comes straight from the store's dispatch capability.
    assert_eq!(deferred.blocking_recv().unwrap(), json!(null));
}

#[test]
fn namespaced_action_dispatch() {
    let store = message_store();

    let double_assign = action::key_in("test", "doubleAssign").bind(&store);
    let _ = double_assign.dispatch(json!("Bar"));

    assert_eq!(store.state("test/message"), json!("BarBar"));
}

#[test]
fn mapped_action_composes_with_inner_dispatch() {
    let store = message_store();

    let binding = action::map_in(
        "test",
        |dispatch: &Dispatcher<MemoryStore>, payload: Value| {
            let message = payload.as_str().unwrap_or_default();
            let _ = dispatch.dispatch("doubleAssign", json!(format!("{message}{message}")));
            payload
        },
    );
    let assign = binding.bind(&store);

    assert_eq!(assign.dispatch(json!("Bar")), json!("Bar"));
    // doubleAssign doubles its own payload, so both compositions apply.
    assert_eq!(store.state("test/message"), json!("BarBarBarBar"));
}

#[test]
fn bindings_rebind_across_stores() {
    let binding = getter::key("double");

    let first = counter_store();
    let second = counter_store();
    second.set_state("value", json!(1));

    assert_eq!(binding.bind(&first).get(), json!(246));
    assert_eq!(binding.bind(&second).get(), json!(2));
}
