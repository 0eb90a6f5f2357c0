//! CLI command implementations.

pub mod admin;
pub mod cart;
pub mod config;
pub mod shop;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use dialoguer::Confirm;

use crate::context::Context;

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Search product names.
    #[arg(short, long)]
    pub q: Option<String>,

    /// Category id, or "all".
    #[arg(long)]
    pub category: Option<String>,

    /// featured, price_asc, price_desc, newest or popular.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Minimum price in dollars.
    #[arg(long)]
    pub min: Option<String>,

    /// Maximum price in dollars.
    #[arg(long)]
    pub max: Option<String>,

    /// Show at most N products (default: shop.page_size).
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: String,
}

/// Arguments for the deal command.
#[derive(Args)]
pub struct DealArgs {
    /// Date to pick the deal for (YYYY-MM-DD, default: today).
    #[arg(long)]
    pub date: Option<chrono::NaiveDate>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the bag.
    Show,
    /// Add a product to the bag.
    Add {
        /// Product id.
        id: String,

        /// Quantity to add.
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        qty: i64,

        /// Size, required when the product comes in several.
        #[arg(short, long)]
        size: Option<String>,
    },
    /// Remove a product from the bag.
    Remove {
        /// Product id.
        id: String,
    },
    /// Set the quantity of a line.
    Qty {
        /// Product id.
        id: String,

        /// New quantity (at least 1 is kept).
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Empty the bag.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Store overview.
    Dashboard,
    /// Manage orders.
    Orders(OrdersArgs),
    /// Manage payments.
    Payments(PaymentsArgs),
    /// Manage customers.
    Customers(CustomersArgs),
    /// Edit the product catalog.
    Products(ProductsArgs),
}

#[derive(Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: Option<OrdersCommand>,

    /// Only orders with this status.
    #[arg(long)]
    pub status: Option<String>,

    /// Match order id, customer or item names.
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// Show one order.
    Show {
        id: String,
    },
    /// Change an order's status.
    Status {
        id: String,
        status: String,
    },
    /// Create a sample order.
    New {
        /// Product to order (default: picked from the clock).
        #[arg(short, long)]
        product: Option<String>,
    },
    /// Delete an order.
    Delete {
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args)]
pub struct PaymentsArgs {
    #[command(subcommand)]
    pub command: Option<PaymentsCommand>,

    /// Only payments with this status.
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Subcommand)]
pub enum PaymentsCommand {
    /// Change a payment's status.
    Status {
        id: String,
        status: String,
        /// Failure reason to record.
        #[arg(long)]
        reason: Option<String>,
    },
    /// Refund a payment.
    Refund {
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Create a sample payment.
    New {
        #[arg(short, long)]
        product: Option<String>,
    },
    /// Delete a payment record.
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args)]
pub struct CustomersArgs {
    #[command(subcommand)]
    pub command: Option<CustomersCommand>,

    /// Match name, email or total spend.
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Subcommand)]
pub enum CustomersCommand {
    /// Add a placeholder customer.
    New,
    /// Change customer fields.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete a customer.
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: Option<ProductsCommand>,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// Add a blank product at the top of the list.
    New,
    /// Change product fields.
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        /// Unit price in dollars.
        #[arg(long)]
        price: Option<f64>,
        /// Main image URL.
        #[arg(long)]
        image: Option<String>,
        /// Gallery image URLs, comma separated.
        #[arg(long)]
        images: Option<String>,
        /// Existing category id.
        #[arg(long, conflicts_with = "new_category")]
        category: Option<String>,
        /// Create a category with this title and file the product under it.
        #[arg(long)]
        new_category: Option<String>,
        #[arg(long)]
        popularity: Option<u32>,
    },
    /// Delete a product.
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
    /// List categories.
    Categories,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Ask before a destructive action unless `yes` was passed.
///
/// JSON mode never prompts, so it requires `--yes`.
pub(crate) fn confirm(ctx: &Context, yes: bool, prompt: &str) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if ctx.output.is_json() {
        bail!("{} Pass --yes to confirm in JSON mode.", prompt);
    }
    let confirmed = Confirm::new().with_prompt(prompt).default(false).interact()?;
    if !confirmed {
        ctx.output.warn("Cancelled");
    }
    Ok(confirmed)
}
