//! Demonstration of binding accessors against a flat store

use serde_json::json;
use tether::testing::MemoryStore;
use tether::{action, getter, mutation, state};

fn main() {
    println!("=== Tether Example: Counter ===\n");

    // Build the store: one state key, a derived getter, a mutation and an
    // action that orchestrates the mutation.
    println!("1. Setting up the store");
    let store = MemoryStore::new();
    store.set_state("count", json!(0));
    store.register_getter("doubled", |state| {
        json!(state.get("count").as_i64().unwrap_or(0) * 2)
    });
    store.register_mutation("increment", |state, payload| {
        let current = state.get("count").as_i64().unwrap_or(0);
        let step = payload.as_i64().unwrap_or(0);
        state.set("count", json!(current + step));
    });
    store.register_action("incrementTwice", |context, payload| {
        context.commit("increment", payload.clone());
        context.commit("increment", payload);
        json!(null)
    });

    // Bind accessors once; keys never appear at the call sites below.
    println!("2. Binding accessors");
    let count = state::key("count").bind(&store);
    let doubled = getter::key("doubled").bind(&store);
    let increment = mutation::key("increment").bind(&store);
    let increment_twice = action::key("incrementTwice").bind(&store);

    println!("\n3. Initial values");
    println!("   count = {}, doubled = {}", count.get(), doubled.get());

    println!("\n4. Committing increment(5)");
    increment.commit(json!(5));
    println!("   count = {}, doubled = {}", count.get(), doubled.get());

    println!("\n5. Dispatching incrementTwice(10)");
    let deferred = increment_twice.dispatch(json!(10));
    let result = deferred.blocking_recv().expect("action completed");
    println!("   action resolved with {result}");
    println!("   count = {}, doubled = {}", count.get(), doubled.get());

    println!("\n✓ Example complete!");
}
