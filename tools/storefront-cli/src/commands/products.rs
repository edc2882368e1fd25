//! Product browsing commands.

use anyhow::{bail, Context as _, Result};
use storefront_sdk::storefront_commerce::catalog::Product;
use storefront_sdk::storefront_commerce::search::{Facets, ProductSelector};
use storefront_sdk::storefront_commerce::ProductId;
use storefront_sdk::{ProductQueryService, QueryOutcome};

use super::{ListArgs, ProductsArgs, ProductsCommand};
use crate::context::Context;
use crate::output::stock_badge;

const TABLE_WIDTHS: [usize; 6] = [5, 28, 14, 14, 10, 14];

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ProductsCommand::List(list) => list_products(list, ctx).await,
        ProductsCommand::Show { id } => show_product(id, ctx).await,
        ProductsCommand::StockCheck { id, quantity } => stock_check(id, quantity, ctx).await,
        ProductsCommand::Facets => facets(ctx).await,
        ProductsCommand::Featured { limit } => featured(limit, ctx).await,
    }
}

async fn list_products(args: ListArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let filter = args.filter();
    let selector = args.selector(&filter);

    let spinner = ctx.output.spinner(&format!("Fetching {}...", selector));
    let outcome = storefront.query().query(&selector, &filter).await;
    spinner.finish_and_clear();

    print_outcome(&format!("Products ({})", selector), &outcome, ctx);
    Ok(())
}

async fn show_product(id: ProductId, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;

    let spinner = ctx.output.spinner(&format!("Fetching product {}...", id));
    let product = storefront.query().product(id).await;
    spinner.finish_and_clear();

    let Some(product) = product else {
        bail!("Product {} not found", id);
    };

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("price", &product.price.display());
    ctx.output.kv("category", &product.category);
    ctx.output.kv("brand", &product.brand);
    ctx.output.kv("stock", &stock_badge(product.stock_status()));
    if !product.active {
        ctx.output.kv("listed", "no");
    }
    if !product.description.is_empty() {
        ctx.output.info("");
        ctx.output.info(&product.description);
    }

    Ok(())
}

async fn stock_check(id: ProductId, quantity: u32, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;

    let spinner = ctx.output.spinner("Checking stock...");
    let result = storefront.products().check_stock(id, quantity).await;
    spinner.finish_and_clear();

    let available = result.with_context(|| format!("Failed to check stock for product {}", id))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "id": id,
            "quantity": quantity,
            "available": available,
        }));
    } else if available {
        ctx.output.success(&format!("{} unit(s) of product {} in stock", quantity, id));
    } else {
        ctx.output.warn(&format!("Fewer than {} unit(s) of product {} in stock", quantity, id));
    }

    Ok(())
}

async fn facets(ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;

    let spinner = ctx.output.spinner("Fetching catalog...");
    let outcome = storefront.query().resolve(&ProductSelector::All).await;
    spinner.finish_and_clear();

    warn_if_degraded(&outcome, ctx);
    let facets: Facets = ProductQueryService::facets(outcome.products());

    if ctx.output.is_json() {
        ctx.output.json(&facets);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &facets.categories {
        ctx.output.list_item(category);
    }
    ctx.output.header("Brands");
    for brand in &facets.brands {
        ctx.output.list_item(brand);
    }

    Ok(())
}

async fn featured(limit: Option<usize>, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let limit = limit.unwrap_or(ctx.config.catalog.featured_limit);

    let spinner = ctx.output.spinner("Fetching featured products...");
    let outcome = storefront.query().featured(limit).await;
    spinner.finish_and_clear();

    print_outcome("Featured", &outcome, ctx);
    Ok(())
}

fn warn_if_degraded(outcome: &QueryOutcome, ctx: &Context) {
    if let Some(reason) = outcome.reason() {
        ctx.output
            .warn(&format!("Product API unavailable, showing offline catalog ({})", reason));
    }
}

fn print_outcome(title: &str, outcome: &QueryOutcome, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "source": if outcome.is_degraded() { "fallback" } else { "api" },
            "reason": outcome.reason(),
            "products": outcome.products(),
        }));
        return;
    }

    warn_if_degraded(outcome, ctx);
    ctx.output.header(title);

    if outcome.is_empty() {
        ctx.output.info("No products found");
        return;
    }

    ctx.output.table_row(
        &["ID", "NAME", "BRAND", "CATEGORY", "PRICE", "STOCK"],
        &TABLE_WIDTHS,
    );
    for product in outcome.products() {
        print_row(product, ctx);
    }
    ctx.output.info("");
    ctx.output.info(&format!("{} product(s)", outcome.len()));
}

fn print_row(product: &Product, ctx: &Context) {
    let id = product.id.to_string();
    let price = product.price.display();
    let stock = product.stock_status().label();
    ctx.output.table_row(
        &[&id, &product.name, &product.brand, &product.category, &price, &stock],
        &TABLE_WIDTHS,
    );
}
