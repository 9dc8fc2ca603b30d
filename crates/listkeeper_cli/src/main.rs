//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `listkeeper_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use listkeeper_core::{MemorySessionStore, SessionContext};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("listkeeper_core version={}", listkeeper_core::core_version());

    // One request-shaped round trip through the core: load, mutate, persist,
    // reload, render in display order.
    let mut store = MemorySessionStore::new();

    let mut ctx = SessionContext::load(&store, "smoke")?;
    let groceries = ctx.create_list("Groceries")?;
    ctx.add_todo(groceries, "Milk")?;
    let eggs = ctx.add_todo(groceries, "Eggs")?;
    ctx.toggle_todo(groceries, eggs)?;
    ctx.persist(&mut store, "smoke")?;

    let ctx = SessionContext::load(&store, "smoke")?;
    for list in ctx.lists_sorted() {
        println!(
            "list title={} done={}/{}",
            list.title,
            list.count_done(),
            list.size()
        );
    }
    for todo in ctx.todos_sorted(groceries)? {
        println!("todo title={} done={}", todo.title, todo.done);
    }

    Ok(())
}
