//! # Integration Flows
//!
//! Ledger, Menu Catalog and Order Fulfillment wired through the runtime
//! container, exercising the bridges between them.

use rust_decimal::Decimal;
use shared_types::{InventoryError, MenuItemId, Sku};
use sl_01_ingredient_ledger::ResupplyEntry;
use sl_03_order_fulfillment::OrderBatch;

use super::fixtures::{container, delivery, ingredient, recipe, today};

fn sku(value: &str) -> Sku {
    Sku::from(value)
}

// =============================================================================
// LEDGER + RESUPPLY
// =============================================================================

#[tokio::test]
async fn test_low_stock_clears_after_resupply() {
    let c = container();
    c.ledger.create_ingredient(ingredient("SKU-1", "Tomato", 10, 5)).await.unwrap();
    c.ledger
        .update_ingredient(&sku("SKU-1"), ingredient("SKU-1", "Tomato", 4, 5))
        .await
        .unwrap();

    let low = c.ledger.list_low_stock().await.unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].sku, sku("SKU-1"));

    let report = c.ledger.resupply(vec![delivery("SKU-1", 10)]).await.unwrap();
    assert_eq!(report.outcomes[0].stock, 14);
    assert!(c.ledger.list_low_stock().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_low_stock_is_strictly_below_threshold() {
    let c = container();
    c.ledger.create_ingredient(ingredient("SKU-1", "Tomato", 10, 5)).await.unwrap();
    c.ledger.create_ingredient(ingredient("SKU-2", "Basil", 5, 5)).await.unwrap();
    assert!(c.ledger.list_low_stock().await.unwrap().is_empty());

    c.ledger
        .update_ingredient(&sku("SKU-1"), ingredient("SKU-1", "Tomato", 10, 11))
        .await
        .unwrap();
    assert_eq!(c.ledger.list_low_stock().await.unwrap().len(), 1);

    c.ledger.resupply(vec![delivery("SKU-1", 10)]).await.unwrap();
    let record = c.ledger.get_ingredient(&sku("SKU-1")).await.unwrap();
    assert_eq!(record.stock, 20);
    // create, update, resupply
    assert_eq!(record.orders, 3);
    assert!(c.ledger.list_low_stock().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_resupply_stops_at_first_failure() {
    let c = container();
    c.ledger.create_ingredient(ingredient("SKU-1", "Tomato", 10, 5)).await.unwrap();

    let entries = vec![
        delivery("SKU-1", 5),
        delivery("MISSING", 5),
        delivery("SKU-1", 100),
    ];
    let err = c.ledger.resupply(entries).await.unwrap_err();
    assert!(err.is_not_found());

    // First entry committed, third never ran.
    let record = c.ledger.get_ingredient(&sku("SKU-1")).await.unwrap();
    assert_eq!(record.stock, 15);
    assert_eq!(record.orders, 2);
}

#[tokio::test]
async fn test_resupply_creates_flagged_new_ingredient() {
    let c = container();
    let entry = ResupplyEntry {
        sku: "SKU-7".into(),
        name: "Saffron".into(),
        stock: 2,
        expiry_date: "2026-10-21".into(),
        is_new_ingredient: true,
        ..Default::default()
    };
    let report = c.ledger.resupply(vec![entry]).await.unwrap();
    assert_eq!(report.created(), 1);

    let expiring = c
        .ledger
        .list_expiring_soon(today(), c.ledger.default_horizon())
        .await
        .unwrap();
    assert_eq!(expiring[0].name, "Saffron");
}

#[tokio::test]
async fn test_duplicate_create_leaves_record_untouched() {
    let c = container();
    c.ledger.create_ingredient(ingredient("SKU-1", "Tomato", 10, 5)).await.unwrap();
    let err = c
        .ledger
        .create_ingredient(ingredient("SKU-1", "Imposter", 99, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::DuplicateKey { .. }));

    let record = c.ledger.get_ingredient(&sku("SKU-1")).await.unwrap();
    assert_eq!(record.name, "Tomato");
    assert_eq!(record.orders, 1);
}

// =============================================================================
// ORDER FULFILLMENT THROUGH THE BRIDGES
// =============================================================================

#[tokio::test]
async fn test_batch_aggregates_into_single_decrement() {
    let c = container();
    c.ledger.create_ingredient(ingredient("SKU-1", "Tomato", 20, 5)).await.unwrap();

    let a = c
        .menu
        .create_menu_item(recipe("Bruschetta", &[("Tomato", Decimal::from(2))]))
        .await
        .unwrap();
    let b = c
        .menu
        .create_menu_item(recipe("Soup", &[("Tomato", Decimal::from(1))]))
        .await
        .unwrap();

    let mut batch = OrderBatch::new();
    batch.add(a.id.clone(), 2).add(b.id.clone(), 3);
    let report = c.orders.submit_orders(batch).await.unwrap();

    assert_eq!(report.consumed["Tomato"], Decimal::from(7));
    assert_eq!(report.remaining_stock["Tomato"], 13);

    let record = c.ledger.get_ingredient(&sku("SKU-1")).await.unwrap();
    assert_eq!(record.stock, 13);
    // Consumption is not a ledger touch.
    assert_eq!(record.orders, 1);

    assert_eq!(c.menu.get_menu_item(&a.id).await.unwrap().orders, 2);
    assert_eq!(c.menu.get_menu_item(&b.id).await.unwrap().orders, 3);
}

#[tokio::test]
async fn test_overconsumption_clamps_and_fractions_round_up() {
    let c = container();
    c.ledger.create_ingredient(ingredient("SKU-1", "Tomato", 3, 5)).await.unwrap();
    c.ledger.create_ingredient(ingredient("SKU-2", "Oil", 10, 1)).await.unwrap();

    let dish = c
        .menu
        .create_menu_item(recipe(
            "Stew",
            &[("Tomato", Decimal::from(2)), ("Oil", Decimal::new(15, 1))],
        ))
        .await
        .unwrap();

    let mut batch = OrderBatch::new();
    batch.add(dish.id.clone(), 3);
    c.orders.submit_orders(batch).await.unwrap();

    // 3 * 2 = 6 against 3 on hand; 3 * 1.5 = 4.5 rounds to 5.
    assert_eq!(c.ledger.get_ingredient(&sku("SKU-1")).await.unwrap().stock, 0);
    assert_eq!(c.ledger.get_ingredient(&sku("SKU-2")).await.unwrap().stock, 5);
}

#[tokio::test]
async fn test_unknown_names_and_recipes_are_reported_not_raised() {
    let c = container();
    c.ledger.create_ingredient(ingredient("SKU-1", "Tomato", 10, 5)).await.unwrap();
    let dish = c
        .menu
        .create_menu_item(recipe(
            "Salad",
            &[("Tomato", Decimal::ONE), ("Dragonfruit", Decimal::ONE)],
        ))
        .await
        .unwrap();

    let mut batch = OrderBatch::new();
    batch.add(dish.id.clone(), 1).add(MenuItemId::from("ghost"), 4);
    let report = c.orders.submit_orders(batch).await.unwrap();

    assert_eq!(report.skipped_ingredients, vec!["Dragonfruit".to_string()]);
    assert!(!report.consumed.contains_key("Dragonfruit"));
    assert_eq!(report.missing_recipes, vec![MenuItemId::from("ghost")]);
    assert_eq!(report.applied(), 1);
    assert_eq!(c.ledger.get_ingredient(&sku("SKU-1")).await.unwrap().stock, 9);
}

#[tokio::test]
async fn test_join_by_name_uses_lowest_sku() {
    let c = container();
    c.ledger.create_ingredient(ingredient("SKU-B", "Onion", 10, 0)).await.unwrap();
    c.ledger.create_ingredient(ingredient("SKU-A", "Onion", 10, 0)).await.unwrap();
    let dish = c
        .menu
        .create_menu_item(recipe("Onion Rings", &[("Onion", Decimal::from(4))]))
        .await
        .unwrap();

    let mut batch = OrderBatch::new();
    batch.add(dish.id.clone(), 1);
    c.orders.submit_orders(batch).await.unwrap();

    assert_eq!(c.ledger.get_ingredient(&sku("SKU-A")).await.unwrap().stock, 6);
    assert_eq!(c.ledger.get_ingredient(&sku("SKU-B")).await.unwrap().stock, 10);
}

#[tokio::test]
async fn test_delete_is_idempotent_across_subsystems() {
    let c = container();
    c.ledger.create_ingredient(ingredient("SKU-1", "Tomato", 10, 5)).await.unwrap();
    assert!(c.ledger.delete_ingredient(&sku("SKU-1")).await.unwrap());
    assert!(!c.ledger.delete_ingredient(&sku("SKU-1")).await.unwrap());

    let dish = c
        .menu
        .create_menu_item(recipe("Toast", &[("Bread", Decimal::ONE)]))
        .await
        .unwrap();
    assert!(c.menu.delete_menu_item(&dish.id).await.unwrap());
    assert!(!c.menu.delete_menu_item(&dish.id).await.unwrap());
}

#[tokio::test]
async fn test_concurrent_batches_never_lose_decrements() {
    let c = std::sync::Arc::new(container());
    c.ledger.create_ingredient(ingredient("SKU-1", "Flour", 1000, 0)).await.unwrap();
    let dish = c
        .menu
        .create_menu_item(recipe("Bread", &[("Flour", Decimal::from(3))]))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..40 {
        let c = std::sync::Arc::clone(&c);
        let id = dish.id.clone();
        handles.push(tokio::spawn(async move {
            let mut batch = OrderBatch::new();
            batch.add(id, 1);
            c.orders.submit_orders(batch).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(c.ledger.get_ingredient(&sku("SKU-1")).await.unwrap().stock, 880);
    assert_eq!(c.menu.get_menu_item(&dish.id).await.unwrap().orders, 40);
}
