//! Bag commands.

use anyhow::Result;
use auro_commerce::cart::{recommendations, CartContext, RECOMMENDATION_LIMIT};
use auro_commerce::catalog::SizeSelection;

use super::{confirm, CartArgs, CartCommand};
use crate::context::Context;
use crate::output::truncate;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let cart = ctx.cart();
    match args.command {
        Some(CartCommand::Show) | None => show(&cart, ctx),
        Some(CartCommand::Add { id, qty, size }) => add(&cart, &id, qty, size.as_deref(), ctx),
        Some(CartCommand::Remove { id }) => {
            let name = cart.get_item(&id).map(|i| i.name);
            cart.remove_item(&id);
            match name {
                Some(name) => ctx.output.success(&format!("Removed {}", name)),
                None => ctx.output.warn(&format!("{} is not in your bag", id)),
            }
            summary(&cart, ctx);
            Ok(())
        }
        Some(CartCommand::Qty { id, qty }) => {
            cart.update_qty(&id, qty);
            match cart.get_item(&id) {
                Some(item) => ctx.output.success(&format!("{} × {}", item.name, item.qty)),
                None => ctx.output.warn(&format!("{} is not in your bag", id)),
            }
            summary(&cart, ctx);
            Ok(())
        }
        Some(CartCommand::Clear { yes }) => {
            if confirm(ctx, yes, "Empty your bag?")? {
                cart.clear();
                ctx.output.success("Your bag is empty");
                summary(&cart, ctx);
            }
            Ok(())
        }
    }
}

fn add(cart: &CartContext, id: &str, qty: i64, size: Option<&str>, ctx: &Context) -> Result<()> {
    let product = ctx.catalog.require_product(id)?;
    let mut picker = SizeSelection::for_product(product);
    if let Some(size) = size {
        picker.select(product, size)?;
    }
    let entry = picker.entry_for(product)?;
    let name = entry.name.clone();
    cart.add_item(entry, qty);

    let line = cart.get_item(id).map(|i| i.qty.get()).unwrap_or_default();
    ctx.output.success(&format!("Added {} (now {} in bag)", name, line));
    summary(cart, ctx);
    Ok(())
}

fn show(cart: &CartContext, ctx: &Context) -> Result<()> {
    let items = cart.items();
    let suggested = recommendations(&ctx.catalog, &items, RECOMMENDATION_LIMIT);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": items,
            "count": cart.count(),
            "subtotal": cart.subtotal(),
            "recommendations": suggested,
        }));
        return Ok(());
    }

    if items.is_empty() {
        ctx.output.header("Your bag is empty");
        ctx.output.info("Run `auro shop` to find something you love.");
        return Ok(());
    }

    ctx.output.header("Your bag");
    let widths = [16, 36, 12, 5, 12];
    ctx.output
        .table_row(&["ID", "NAME", "PRICE", "QTY", "TOTAL"], &widths);
    for item in &items {
        let name = truncate(&item.name, widths[1]);
        let price = item.price.display();
        let qty = item.qty.to_string();
        let total = item.line_total().display();
        ctx.output.table_row(
            &[item.id.as_str(), name.as_str(), price.as_str(), qty.as_str(), total.as_str()],
            &widths,
        );
    }
    println!();
    ctx.output.kv("items", &cart.count().to_string());
    ctx.output.kv("subtotal", &cart.subtotal().display());
    ctx.output.kv("shipping", "Calculated at checkout");

    if !suggested.is_empty() {
        ctx.output.header("You may also like");
        for p in suggested {
            ctx.output.list_item(&format!("{} ({}) {}", p.name, p.id, p.price.display()));
        }
    }
    Ok(())
}

fn summary(cart: &CartContext, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "count": cart.count(),
            "subtotal": cart.subtotal(),
        }));
        return;
    }
    ctx.output.kv("bag", &format!("{} items, {}", cart.count(), cart.subtotal().display()));
}
