//! Admin payment records.

use std::fmt;
use std::str::FromStr;

use auro_cache::Cache;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::admin::{Ledger, Record};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{OrderId, PaymentId};
use crate::money::{Money, CURRENCY_CODE};

/// Storage key for payment records.
pub const PAYMENTS_STORAGE_KEY: &str = "admin-payments-v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Succeeded,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Pending,
        PaymentStatus::Succeeded,
        PaymentStatus::Failed,
        PaymentStatus::Refunded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Succeeded => "succeeded",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CommerceError::InvalidStatus(s.to_string()))
    }
}

/// A payment attempt against an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    pub amount: Money,
    pub currency: String,
    /// Processor method tag such as `card_visa`.
    pub method: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl Record for Payment {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Number of payments in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PaymentCounts {
    pub pending: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub refunded: usize,
}

/// The persisted payment list.
#[derive(Debug)]
pub struct PaymentBook {
    ledger: Ledger<Payment>,
}

impl PaymentBook {
    /// Open the payment list, seeding two sample records on first use.
    pub fn open(cache: Cache, now: DateTime<Utc>) -> Self {
        Self {
            ledger: Ledger::open(cache, PAYMENTS_STORAGE_KEY, || sample_payments(now)),
        }
    }

    pub fn payments(&self) -> &[Payment] {
        self.ledger.records()
    }

    pub fn get(&self, id: &str) -> Option<&Payment> {
        self.ledger.get(id)
    }

    pub fn filtered(&self, status: Option<PaymentStatus>) -> Vec<&Payment> {
        self.payments()
            .iter()
            .filter(|p| status.map_or(true, |s| p.status == s))
            .collect()
    }

    pub fn status_counts(&self) -> PaymentCounts {
        let mut counts = PaymentCounts::default();
        for payment in self.payments() {
            match payment.status {
                PaymentStatus::Pending => counts.pending += 1,
                PaymentStatus::Succeeded => counts.succeeded += 1,
                PaymentStatus::Failed => counts.failed += 1,
                PaymentStatus::Refunded => counts.refunded += 1,
            }
        }
        counts
    }

    /// Set the status of a payment. A `reason` of `None` keeps the old one.
    pub fn change_status(
        &mut self,
        id: &str,
        status: PaymentStatus,
        reason: Option<String>,
    ) -> Result<(), CommerceError> {
        self.ledger
            .modify(id, |p| {
                p.status = status;
                if reason.is_some() {
                    p.failure_reason = reason;
                }
            })
            .ok_or_else(|| CommerceError::PaymentNotFound(id.to_string()))
    }

    /// Mark a payment refunded. Returns `false` if it already was.
    pub fn refund(&mut self, id: &str) -> Result<bool, CommerceError> {
        let payment = self
            .get(id)
            .ok_or_else(|| CommerceError::PaymentNotFound(id.to_string()))?;
        if payment.status == PaymentStatus::Refunded {
            return Ok(false);
        }
        self.change_status(id, PaymentStatus::Refunded, None)?;
        Ok(true)
    }

    pub fn remove(&mut self, id: &str) -> Result<(), CommerceError> {
        if self.ledger.remove(id) {
            Ok(())
        } else {
            Err(CommerceError::PaymentNotFound(id.to_string()))
        }
    }

    /// Add a pending payment for `product` at the front.
    pub fn create_sample(&mut self, product: &Product, now: DateTime<Utc>) -> PaymentId {
        let id = PaymentId::timestamped(now);
        let method = if now.timestamp_millis() % 2 == 0 {
            "card_visa"
        } else {
            "card_master"
        };
        self.ledger.prepend(Payment {
            id: id.clone(),
            order_id: Some(OrderId::timestamped(now)),
            amount: product.price,
            currency: CURRENCY_CODE.to_string(),
            method: method.to_string(),
            status: PaymentStatus::Pending,
            created_at: now,
            failure_reason: None,
        });
        id
    }
}

/// The payments a fresh console starts with.
pub fn sample_payments(now: DateTime<Utc>) -> Vec<Payment> {
    let earlier = now - Duration::milliseconds(100_000);
    vec![
        Payment {
            id: PaymentId::timestamped(now),
            order_id: Some(OrderId::timestamped(now)),
            amount: Money::from_units(1290),
            currency: CURRENCY_CODE.to_string(),
            method: "card_visa".to_string(),
            status: PaymentStatus::Succeeded,
            created_at: now,
            failure_reason: None,
        },
        Payment {
            id: PaymentId::timestamped(earlier),
            order_id: Some(OrderId::timestamped(earlier)),
            amount: Money::from_units(420),
            currency: CURRENCY_CODE.to_string(),
            method: "card_master".to_string(),
            status: PaymentStatus::Failed,
            created_at: earlier,
            failure_reason: Some("Insufficient funds".to_string()),
        },
    ]
}
