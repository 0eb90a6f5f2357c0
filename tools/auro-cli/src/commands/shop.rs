//! Storefront browsing commands.

use anyhow::Result;
use auro_commerce::catalog::{deal_of_the_day, size_options, Product};
use auro_commerce::search::ShopQuery;
use chrono::Utc;

use super::{DealArgs, ProductArgs, ShopArgs};
use crate::context::Context;
use crate::output::{format_price, truncate};

/// Related products shown on a product page.
const RELATED_LIMIT: usize = 4;

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let default_sort = ctx.config.shop.default_sort.as_str();
    let mut params: Vec<(&str, &str)> = vec![("sort", args.sort.as_deref().unwrap_or(default_sort))];
    for (key, value) in [
        ("q", &args.q),
        ("category", &args.category),
        ("min", &args.min),
        ("max", &args.max),
    ] {
        if let Some(value) = value.as_deref() {
            params.push((key, value));
        }
    }
    let query = ShopQuery::from_params(params);
    tracing::debug!(?query, "shop query");

    let results = query.apply(&ctx.catalog);
    let limit = args.limit.unwrap_or(ctx.config.shop.page_size);
    let shown = &results[..results.len().min(limit)];

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "total": results.len(),
            "sort": query.sort.as_str(),
            "products": shown,
        }));
        return Ok(());
    }

    let title = query
        .category
        .as_ref()
        .map(|c| ctx.catalog.category_title(c.as_str()).to_string())
        .unwrap_or_else(|| "Shop".to_string());
    ctx.output.header(&title);
    ctx.output.kv("sort", query.sort.display_name());
    ctx.output.kv("results", &results.len().to_string());

    if results.is_empty() {
        ctx.output.info("No products match these filters.");
        return Ok(());
    }

    println!();
    let widths = [16, 28, 12, 12];
    ctx.output.table_row(&["ID", "NAME", "PRICE", "CATEGORY"], &widths);
    for product in shown {
        print_row(ctx, product, &widths);
    }
    if shown.len() < results.len() {
        ctx.output.info(&format!("… and {} more", results.len() - shown.len()));
    }

    Ok(())
}

/// Run the product command.
pub fn run_product(args: ProductArgs, ctx: &Context) -> Result<()> {
    let product = ctx.catalog.require_product(&args.id)?;
    let sizes = size_options(product.category.as_str());
    let related = ctx.catalog.related(product, RELATED_LIMIT);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": product,
            "categoryTitle": ctx.catalog.category_title(product.category.as_str()),
            "sizes": sizes,
            "related": related,
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("price", &product.price.display());
    ctx.output.kv("category", ctx.catalog.category_title(product.category.as_str()));
    if let Some(tag) = &product.tag {
        ctx.output.kv("tag", tag);
    }
    ctx.output.kv("sizes", &sizes.join(", "));
    ctx.output.kv("images", &product.gallery().len().to_string());

    if !related.is_empty() {
        ctx.output.header("You may also like");
        for p in related {
            ctx.output.list_item(&format!("{} ({}) {}", p.name, p.id, p.price.display()));
        }
    }

    Ok(())
}

/// Run the deal command.
pub fn run_deal(args: DealArgs, ctx: &Context) -> Result<()> {
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());
    let Some(deal) = deal_of_the_day(&ctx.catalog, date) else {
        ctx.output.info("No deal today.");
        return Ok(());
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "date": date,
            "product": deal.product,
            "compareAt": deal.compare_at,
        }));
        return Ok(());
    }

    ctx.output.header(&format!("Deal of the day · {}", date));
    ctx.output.kv("product", &deal.product.name);
    ctx.output.kv("id", deal.product.id.as_str());
    ctx.output.kv("price", &format_price(deal.product.price, Some(deal.compare_at)));

    Ok(())
}

fn print_row(ctx: &Context, product: &Product, widths: &[usize]) {
    let name = truncate(&product.name, widths[1]);
    let price = product.price.display();
    ctx.output.table_row(
        &[
            product.id.as_str(),
            name.as_str(),
            price.as_str(),
            ctx.catalog.category_title(product.category.as_str()),
        ],
        widths,
    );
}
