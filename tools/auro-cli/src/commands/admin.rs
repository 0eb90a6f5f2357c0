//! Admin console commands.

use anyhow::{Context as _, Result};
use auro_commerce::admin::{
    stats_by_email, CustomerPatch, DashboardSummary, Order, OrderStatus, PaymentStatus,
    ProductPatch,
};
use auro_commerce::catalog::Product;
use auro_commerce::{CategoryId, Money};
use chrono::{DateTime, Utc};

use super::{
    confirm, AdminArgs, AdminCommand, CustomersArgs, CustomersCommand, OrdersArgs, OrdersCommand,
    PaymentsArgs, PaymentsCommand, ProductsArgs, ProductsCommand,
};
use crate::context::{AdminBooks, Context};
use crate::output::{status_badge, truncate};

/// Run the admin command.
pub fn run(args: AdminArgs, ctx: &Context) -> Result<()> {
    let mut books = ctx.admin();
    match args.command {
        AdminCommand::Dashboard => dashboard(&books, ctx),
        AdminCommand::Orders(args) => orders(args, &mut books, ctx),
        AdminCommand::Payments(args) => payments(args, &mut books, ctx),
        AdminCommand::Customers(args) => customers(args, &mut books, ctx),
        AdminCommand::Products(args) => products(args, &mut books, ctx),
    }
}

fn dashboard(books: &AdminBooks, ctx: &Context) -> Result<()> {
    let summary = DashboardSummary::collect(&ctx.catalog, &books.orders);
    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.header("Dashboard");
    ctx.output.kv("products", &summary.products.to_string());
    ctx.output.kv("categories", &summary.categories.to_string());
    ctx.output.kv("top product", summary.top_product.as_deref().unwrap_or("-"));
    ctx.output.kv("orders", &summary.orders.count.to_string());
    ctx.output.kv("pending", &summary.orders.pending.to_string());
    ctx.output.kv("processing", &summary.orders.processing.to_string());
    ctx.output.kv("shipped", &summary.orders.shipped.to_string());
    Ok(())
}

fn orders(args: OrdersArgs, books: &mut AdminBooks, ctx: &Context) -> Result<()> {
    let book = &mut books.orders;
    match args.command {
        None => {
            let status = args.status.as_deref().map(str::parse::<OrderStatus>).transpose()?;
            let search = args.search.unwrap_or_default();
            let list = book.filtered(status, &search);

            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "totals": book.totals(),
                    "orders": list,
                }));
                return Ok(());
            }

            let totals = book.totals();
            ctx.output.header("Orders");
            ctx.output.kv(
                "summary",
                &format!(
                    "{} orders · {} pending · {} processing · {} shipped",
                    totals.count, totals.pending, totals.processing, totals.shipped
                ),
            );
            if list.is_empty() {
                ctx.output.info("No orders found.");
                return Ok(());
            }
            println!();
            let widths = [20, 18, 12, 12];
            ctx.output.table_row(&["ID", "CUSTOMER", "TOTAL", "STATUS"], &widths);
            for order in list {
                print_order_row(ctx, order, &widths);
            }
            Ok(())
        }
        Some(OrdersCommand::Show { id }) => {
            let order = book
                .get(&id)
                .with_context(|| format!("Order not found: {}", id))?;
            if ctx.output.is_json() {
                ctx.output.json(order);
                return Ok(());
            }
            ctx.output.header(&format!("Order {}", order.id));
            ctx.output.kv("status", &status_badge(order.status.as_str()));
            ctx.output.kv("placed", &order.created_at.to_rfc3339());
            ctx.output.kv("customer", &format!("{} <{}>", order.customer.name, order.customer.email));
            if let Some(address) = order.customer.address.as_deref().filter(|a| !a.is_empty()) {
                ctx.output.kv("address", address);
            }
            for item in &order.items {
                ctx.output.list_item(&format!(
                    "{} × {} @ {}",
                    item.name,
                    item.qty,
                    item.price.display()
                ));
            }
            ctx.output.kv("total", &order.total().display());
            Ok(())
        }
        Some(OrdersCommand::Status { id, status }) => {
            let status: OrderStatus = status.parse()?;
            book.change_status(&id, status)?;
            ctx.output.success(&format!("Order {} is now {}", id, status_badge(status.as_str())));
            Ok(())
        }
        Some(OrdersCommand::New { product }) => {
            let now = Utc::now();
            let product = pick_product(ctx, product.as_deref(), now)?;
            let id = book.create_sample(product, now);
            report_created(ctx, "order", id.as_str());
            Ok(())
        }
        Some(OrdersCommand::Delete { id, yes }) => {
            if book.get(&id).is_none() {
                anyhow::bail!("Order not found: {}", id);
            }
            if confirm(ctx, yes, "Delete order?")? {
                book.remove(&id)?;
                ctx.output.success(&format!("Deleted order {}", id));
            }
            Ok(())
        }
    }
}

fn payments(args: PaymentsArgs, books: &mut AdminBooks, ctx: &Context) -> Result<()> {
    let book = &mut books.payments;
    match args.command {
        None => {
            let status = args.status.as_deref().map(str::parse::<PaymentStatus>).transpose()?;
            let list = book.filtered(status);

            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "counts": book.status_counts(),
                    "payments": list,
                }));
                return Ok(());
            }

            let counts = book.status_counts();
            ctx.output.header("Payments");
            ctx.output.kv(
                "summary",
                &format!(
                    "{} payments · {} succeeded · {} failed · {} refunded",
                    book.payments().len(),
                    counts.succeeded,
                    counts.failed,
                    counts.refunded
                ),
            );
            if list.is_empty() {
                ctx.output.info("No payments found.");
                return Ok(());
            }
            println!();
            let widths = [20, 20, 12, 12, 20];
            ctx.output
                .table_row(&["ID", "ORDER", "AMOUNT", "STATUS", "NOTE"], &widths);
            for payment in list {
                let order = payment.order_id.as_ref().map(|o| o.as_str()).unwrap_or("-");
                let amount = format!("{} {}", payment.amount.display_amount(), payment.currency);
                let status = status_badge(payment.status.as_str());
                let note = payment.failure_reason.as_deref().unwrap_or("");
                ctx.output.table_row(
                    &[payment.id.as_str(), order, amount.as_str(), status.as_str(), note],
                    &widths,
                );
            }
            Ok(())
        }
        Some(PaymentsCommand::Status { id, status, reason }) => {
            let status: PaymentStatus = status.parse()?;
            book.change_status(&id, status, reason)?;
            ctx.output.success(&format!("Payment {} is now {}", id, status_badge(status.as_str())));
            Ok(())
        }
        Some(PaymentsCommand::Refund { id, yes }) => {
            let payment = book
                .get(&id)
                .with_context(|| format!("Payment not found: {}", id))?;
            if payment.status == PaymentStatus::Refunded {
                ctx.output.info(&format!("Payment {} is already refunded", id));
                return Ok(());
            }
            let prompt = format!(
                "Refund {} {} for payment {}?",
                payment.amount.display_amount(),
                payment.currency,
                id
            );
            if confirm(ctx, yes, &prompt)? && book.refund(&id)? {
                ctx.output.success(&format!("Refunded payment {}", id));
            }
            Ok(())
        }
        Some(PaymentsCommand::New { product }) => {
            let now = Utc::now();
            let product = pick_product(ctx, product.as_deref(), now)?;
            let id = book.create_sample(product, now);
            report_created(ctx, "payment", id.as_str());
            Ok(())
        }
        Some(PaymentsCommand::Delete { id, yes }) => {
            if book.get(&id).is_none() {
                anyhow::bail!("Payment not found: {}", id);
            }
            if confirm(ctx, yes, "Delete payment record?")? {
                book.remove(&id)?;
                ctx.output.success(&format!("Deleted payment {}", id));
            }
            Ok(())
        }
    }
}

fn customers(args: CustomersArgs, books: &mut AdminBooks, ctx: &Context) -> Result<()> {
    let stats = stats_by_email(books.orders.orders());
    let book = &mut books.customers;
    match args.command {
        None => {
            let list = book.search(args.search.as_deref().unwrap_or(""), &stats);

            if ctx.output.is_json() {
                let rows: Vec<_> = list
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "customer": c,
                            "stats": stats.get(&c.email).copied().unwrap_or_default(),
                        })
                    })
                    .collect();
                ctx.output.json(&rows);
                return Ok(());
            }

            ctx.output.header("Customers");
            if list.is_empty() {
                ctx.output.info("No customers found.");
                return Ok(());
            }
            let widths = [18, 18, 26, 7, 12];
            ctx.output
                .table_row(&["ID", "NAME", "EMAIL", "ORDERS", "SPENT"], &widths);
            for customer in list {
                let stat = stats.get(&customer.email).copied().unwrap_or_default();
                let orders = stat.orders.to_string();
                let spent = stat.total.display();
                ctx.output.table_row(
                    &[
                        customer.id.as_str(),
                        customer.name.as_str(),
                        customer.email.as_str(),
                        orders.as_str(),
                        spent.as_str(),
                    ],
                    &widths,
                );
            }
            Ok(())
        }
        Some(CustomersCommand::New) => {
            let id = book.create(Utc::now());
            report_created(ctx, "customer", id.as_str());
            Ok(())
        }
        Some(CustomersCommand::Update {
            id,
            name,
            email,
            address,
            phone,
        }) => {
            book.update(
                &id,
                CustomerPatch {
                    name,
                    email,
                    address,
                    phone,
                },
            )?;
            ctx.output.success(&format!("Updated customer {}", id));
            Ok(())
        }
        Some(CustomersCommand::Delete { id, yes }) => {
            if book.get(&id).is_none() {
                anyhow::bail!("Customer not found: {}", id);
            }
            if confirm(ctx, yes, "Delete customer?")? {
                book.remove(&id)?;
                ctx.output.success(&format!("Deleted customer {}", id));
            }
            Ok(())
        }
    }
}

fn products(args: ProductsArgs, books: &mut AdminBooks, ctx: &Context) -> Result<()> {
    let book = &mut books.products;
    match args.command {
        None => {
            if ctx.output.is_json() {
                ctx.output.json(&book.products());
                return Ok(());
            }

            ctx.output.header("Products");
            if book.products().is_empty() {
                ctx.output.info("No products yet.");
                return Ok(());
            }
            let widths = [20, 28, 14, 12];
            ctx.output
                .table_row(&["ID", "NAME", "CATEGORY", "PRICE"], &widths);
            for product in book.products() {
                let name = truncate(&product.name, widths[1]);
                let price = product.price.display();
                ctx.output.table_row(
                    &[
                        product.id.as_str(),
                        name.as_str(),
                        book.category_title(product.category.as_str()),
                        price.as_str(),
                    ],
                    &widths,
                );
            }
            Ok(())
        }
        Some(ProductsCommand::New) => {
            let id = book.start_new(Utc::now());
            report_created(ctx, "product", id.as_str());
            Ok(())
        }
        Some(ProductsCommand::Edit {
            id,
            name,
            price,
            image,
            images,
            category,
            new_category,
            popularity,
        }) => {
            if book.get(&id).is_none() {
                anyhow::bail!("Product not found: {}", id);
            }
            let price = price
                .map(|p| {
                    if p.is_finite() && p >= 0.0 {
                        Ok(Money::from_decimal(p))
                    } else {
                        Err(anyhow::anyhow!("Price must be a non-negative number"))
                    }
                })
                .transpose()?;
            let category = match new_category {
                Some(title) => Some(
                    book.add_category(&title)
                        .with_context(|| format!("Not a usable category name: {:?}", title))?,
                ),
                None => category.map(CategoryId::new),
            };
            book.save(
                &id,
                ProductPatch {
                    name,
                    price,
                    image,
                    images: images.as_deref().map(split_list),
                    category,
                    popularity,
                },
            )?;
            ctx.output.success(&format!("Updated product {}", id));
            Ok(())
        }
        Some(ProductsCommand::Delete { id, yes }) => {
            if book.get(&id).is_none() {
                anyhow::bail!("Product not found: {}", id);
            }
            if confirm(ctx, yes, "Delete product? This cannot be undone.")? {
                book.remove(&id)?;
                ctx.output.success(&format!("Deleted product {}", id));
            }
            Ok(())
        }
        Some(ProductsCommand::Categories) => {
            if ctx.output.is_json() {
                ctx.output.json(&book.categories());
                return Ok(());
            }
            ctx.output.header("Categories");
            for category in book.categories() {
                ctx.output
                    .list_item(&format!("{} ({})", category.title, category.id));
            }
            Ok(())
        }
    }
}

/// Comma separated values, trimmed, blanks dropped.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The named product, or one picked from the clock.
fn pick_product<'a>(ctx: &'a Context, id: Option<&str>, now: DateTime<Utc>) -> Result<&'a Product> {
    match id {
        Some(id) => Ok(ctx.catalog.require_product(id)?),
        None => {
            let products = ctx.catalog.products();
            let index = now.timestamp_millis().unsigned_abs() as usize % products.len().max(1);
            products
                .get(index)
                .context("The catalog has no products")
        }
    }
}

fn report_created(ctx: &Context, kind: &str, id: &str) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "created": kind, "id": id }));
    } else {
        ctx.output.success(&format!("Created {} {}", kind, id));
    }
}

fn print_order_row(ctx: &Context, order: &Order, widths: &[usize]) {
    let total = order.total().display();
    let status = status_badge(order.status.as_str());
    ctx.output.table_row(
        &[
            order.id.as_str(),
            order.customer.name.as_str(),
            total.as_str(),
            status.as_str(),
        ],
        widths,
    );
}
