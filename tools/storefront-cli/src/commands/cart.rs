//! Build a cart from product ids and print its summary.

use anyhow::{bail, Result};
use storefront_sdk::storefront_commerce::cart::{CartStore, CartSummary};

use super::CartArgs;
use crate::context::Context;

const TABLE_WIDTHS: [usize; 4] = [28, 10, 5, 10];

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let mut cart = storefront.new_cart();

    let spinner = ctx.output.spinner("Looking up products...");
    let mut missing = Vec::new();
    for item in &args.items {
        match storefront.query().product(item.id).await {
            Some(product) => cart.add_to_cart_with_quantity(&product, item.quantity),
            None => missing.push(item.id),
        }
    }
    spinner.finish_and_clear();

    for id in &missing {
        ctx.output.warn(&format!("Product {} not found, skipped", id));
    }

    for set in &args.set {
        if cart.entry(set.id).is_none() {
            ctx.output.warn(&format!("Product {} is not in the cart", set.id));
        }
        cart.update_quantity(set.id, set.quantity);
    }
    for id in &args.remove {
        cart.remove_from_cart(*id);
    }

    if missing.len() == args.items.len() {
        bail!("None of the requested products were found");
    }

    print_cart(&cart, ctx);
    Ok(())
}

fn print_cart(cart: &CartStore, ctx: &Context) {
    let summary = cart.summary();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "entries": cart.entries(),
            "summary": summary,
        }));
        return;
    }

    ctx.output.header("Cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }

    ctx.output.table_row(&["ITEM", "PRICE", "QTY", "TOTAL"], &TABLE_WIDTHS);
    for entry in cart.entries() {
        let price = entry.product.price.display();
        let quantity = entry.quantity.to_string();
        let total = entry.line_total().display();
        ctx.output.table_row(
            &[&entry.product.name, &price, &quantity, &total],
            &TABLE_WIDTHS,
        );
    }

    print_summary(&summary, ctx);
}

fn print_summary(summary: &CartSummary, ctx: &Context) {
    ctx.output.header("Order Summary");
    ctx.output.kv(
        &format!("Subtotal ({} items)", summary.item_count),
        &summary.subtotal.display(),
    );
    let shipping = if summary.has_free_shipping() {
        "Free".to_string()
    } else {
        summary.shipping.display()
    };
    ctx.output.kv("Shipping", &shipping);
    ctx.output.kv("Tax", &summary.tax.display());
    ctx.output.kv("Total", &summary.grand_total.display());
}
