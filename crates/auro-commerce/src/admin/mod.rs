//! Admin console ledgers.
//!
//! Orders, payments, customers and the editable product catalog are each a
//! persisted list under their own key, seeded the first time the console
//! opens.

mod customers;
mod dashboard;
mod ledger;
mod orders;
mod payments;
mod products;

pub use customers::{
    customers_from_orders, stats_by_email, Customer, CustomerBook, CustomerPatch, CustomerStats,
    CUSTOMERS_STORAGE_KEY,
};
pub use dashboard::DashboardSummary;
pub use ledger::{Ledger, Record};
pub use orders::{
    sample_orders, Order, OrderBook, OrderCustomer, OrderItem, OrderStatus, OrderTotals,
    ORDERS_STORAGE_KEY,
};
pub use payments::{
    sample_payments, Payment, PaymentBook, PaymentCounts, PaymentStatus, PAYMENTS_STORAGE_KEY,
};
pub use products::{
    slugify, ProductBook, ProductPatch, CATEGORIES_STORAGE_KEY, PRODUCTS_STORAGE_KEY,
};
