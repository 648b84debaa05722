//! Demonstration of namespaced modules and custom transforms

use serde_json::{json, Value};
use tether::testing::MemoryStore;
use tether::{mutation, state, Committer};

fn main() {
    println!("=== Tether Example: Namespaced Cart ===\n");

    println!("1. Setting up a store with a `cart` module");
    let store = MemoryStore::new();
    store.set_state("cart/items", json!(0));
    store.set_state("cart/total", json!(0.0));
    store.register_getter("cart/summary", |state| {
        json!(format!(
            "{} item(s), {:.2} total",
            state.get("items").as_i64().unwrap_or(0),
            state.get("total").as_f64().unwrap_or(0.0)
        ))
    });
    store.register_mutation("cart/addItem", |state, payload| {
        let items = state.get("items").as_i64().unwrap_or(0);
        let total = state.get("total").as_f64().unwrap_or(0.0);
        let price = payload.as_f64().unwrap_or(0.0);
        state.set("items", json!(items + 1));
        state.set("total", json!(total + price));
    });

    println!("2. Binding namespaced accessors");
    let items = state::key_in("cart", "items").bind(&store);
    let add_item = mutation::key_in("cart", "addItem").bind(&store);

    // A transform over the module slice: reads state and getters together.
    let overview = state::map_in(
        "cart",
        |state: &tether::testing::StateView, getters: &tether::testing::GetterView| {
            json!({
                "items": state.get("items"),
                "summary": getters.get("summary"),
            })
        },
    )
    .bind(&store);

    // A transform that chains module-local commits and reports its own
    // result back to the caller.
    let restock = mutation::map_in("cart", |commit: &Committer<MemoryStore>, payload: Value| {
        let count = payload.as_u64().unwrap_or(0);
        for _ in 0..count {
            commit.commit("addItem", json!(9.99));
        }
        json!(count)
    })
    .bind(&store);

    println!("\n3. Adding items");
    add_item.commit(json!(3.50));
    add_item.commit(json!(12.00));
    println!("   items = {}", items.get());
    println!("   overview = {}", overview.get());

    println!("\n4. Restocking through a mapped mutation");
    let added = restock.commit(json!(3));
    println!("   restock reported {added} commits");
    println!("   overview = {}", overview.get());

    println!("\n✓ Example complete!");
}
