//! Property tests for cart invariants under arbitrary edit sequences.

use std::collections::{HashMap, HashSet};

use auro_commerce::cart::{Cart, CartProduct};
use auro_commerce::Money;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add { id: u8, price: i64, qty: i64 },
    Remove { id: u8 },
    Update { id: u8, qty: i64 },
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0u8..6, 0i64..5_000, -3i64..20).prop_map(|(id, price, qty)| Op::Add { id, price, qty }),
        2 => (0u8..6).prop_map(|id| Op::Remove { id }),
        3 => (0u8..6, -3i64..20).prop_map(|(id, qty)| Op::Update { id, qty }),
        1 => Just(Op::Clear),
    ]
}

fn product(id: u8, price: i64) -> CartProduct {
    CartProduct {
        id: format!("p{}", id).into(),
        name: format!("Product {}", id),
        price: Money::new(price),
        image: String::new(),
    }
}

fn apply(cart: &mut Cart, op: &Op) {
    match *op {
        Op::Add { id, price, qty } => cart.add_item(product(id, price), qty),
        Op::Remove { id } => {
            cart.remove_item(&format!("p{}", id));
        }
        Op::Update { id, qty } => {
            cart.update_qty(&format!("p{}", id), qty);
        }
        Op::Clear => cart.clear(),
    }
}

proptest! {
    #[test]
    fn prop_lines_stay_unique_and_positive(ops in prop::collection::vec(op(), 0..60)) {
        let mut cart = Cart::new();
        for op in &ops {
            apply(&mut cart, op);

            let ids: HashSet<_> = cart.items().iter().map(|item| item.id.clone()).collect();
            prop_assert_eq!(ids.len(), cart.len());
            for item in cart.items() {
                prop_assert!(item.qty.get() >= 1);
            }
        }
    }

    #[test]
    fn prop_derived_values_match_lines(ops in prop::collection::vec(op(), 0..60)) {
        let mut cart = Cart::new();
        for op in &ops {
            apply(&mut cart, op);
        }

        let count: u64 = cart.items().iter().map(|item| item.qty.get()).sum();
        let subtotal: i64 = cart
            .items()
            .iter()
            .map(|item| item.price.amount_cents * item.qty.get() as i64)
            .sum();
        prop_assert_eq!(cart.count(), count);
        prop_assert_eq!(cart.subtotal(), Money::new(subtotal));
    }

    #[test]
    fn prop_first_added_details_win(ops in prop::collection::vec(op(), 1..60)) {
        let mut cart = Cart::new();
        let mut first_price: HashMap<String, i64> = HashMap::new();
        for op in &ops {
            apply(&mut cart, op);
            match op {
                Op::Add { id, price, .. } => {
                    first_price.entry(format!("p{}", id)).or_insert(*price);
                }
                Op::Remove { id } => {
                    first_price.remove(&format!("p{}", id));
                }
                Op::Clear => first_price.clear(),
                Op::Update { .. } => {}
            }
        }

        prop_assert_eq!(cart.len(), first_price.len());
        for item in cart.items() {
            prop_assert_eq!(Some(&item.price.amount_cents), first_price.get(item.id.as_str()));
        }
    }

    #[test]
    fn prop_snapshot_restores_the_same_cart(ops in prop::collection::vec(op(), 0..40)) {
        let mut cart = Cart::new();
        for op in &ops {
            apply(&mut cart, op);
        }

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored, cart);
    }

    #[test]
    fn prop_repeated_adds_sum(n in 1i64..50_000, m in 1i64..50_000) {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), n);
        cart.add_item(product(1, 100), m);
        prop_assert_eq!(cart.count(), (n + m) as u64);
    }

    #[test]
    fn prop_update_keeps_positive_values(qty in 1i64..1_000_000) {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 5);
        prop_assert!(cart.update_qty("p1", qty));
        prop_assert_eq!(cart.count(), qty as u64);
    }

    #[test]
    fn prop_update_clamps_to_one(qty in i64::MIN..=0) {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 5);
        prop_assert!(cart.update_qty("p1", qty));
        prop_assert_eq!(cart.count(), 1);
    }
}
