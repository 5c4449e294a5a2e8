use restaurant_manager::clients::{ActorClient, Placement};
use restaurant_manager::lifecycle::{RestaurantSystem, SystemConfig};
use restaurant_manager::model::{Order, OrderStatus};
use restaurant_manager::order_actor::OrderError;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn order_for(table: u32, items: &[(u32, u32)]) -> Order {
    let mut order = Order::create(table);
    for (id, qty) in items {
        order.add_item(*id, *qty);
    }
    order
}

/// Table 5 orders two burgers and a water, moves to PREPARING and is billed.
#[tokio::test]
async fn test_table_five_lifecycle() {
    let system = RestaurantSystem::new(SystemConfig::default());

    let order = order_for(5, &[(1, 2), (6, 1)]);
    let expected_id = order.id.clone();
    let placement = system.order_book.place(order).await.expect("place failed");
    let Placement::Placed { order_id, total } = placement else {
        panic!("order should have been placed");
    };
    assert_eq!(order_id, expected_id);
    assert!(approx(total, 180.0));

    let active = system.order_book.list_active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].status, OrderStatus::Pending);
    assert_eq!(active[0].table_number, 5);
    assert_eq!(active[0].item_names, vec!["Classic Burger", "Mineral Water"]);

    let updated = system.order_book.update_status(1, OrderStatus::Preparing).await.unwrap();
    assert_eq!(updated.status, OrderStatus::Preparing);

    let invalid = system.order_book.update_status(2, OrderStatus::Complete).await;
    assert_eq!(invalid, Err(OrderError::InvalidOrderNumber(2)));
    let stored = system.order_book.get(order_id.clone()).await.unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::Preparing);

    let bill = system.order_book.close_and_bill(1).await.unwrap();
    assert_eq!(bill.order_id, order_id);
    assert_eq!(bill.table_number, 5);
    assert_eq!(
        format!("{:.2} {:.2} {:.2}", bill.subtotal, bill.tax, bill.total),
        "180.00 14.40 194.40"
    );
    assert!(system.order_book.list_active().await.unwrap().is_empty());
    assert!(system.order_book.get(order_id).await.unwrap().is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_order_is_discarded() {
    let system = RestaurantSystem::new(SystemConfig::default());

    let placement = system.order_book.place(Order::create(3)).await.unwrap();
    assert_eq!(placement, Placement::Cancelled);
    assert!(system.order_book.list_active().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_close_removes_exactly_one_order() {
    let system = RestaurantSystem::new(SystemConfig::default());
    for table in 1..=3 {
        system.order_book.place(order_for(table, &[(7, table)])).await.unwrap();
    }

    for position in [0, 4, -1] {
        let result = system.order_book.close_and_bill(position).await;
        assert_eq!(result, Err(OrderError::InvalidOrderNumber(position)));
    }
    assert_eq!(system.order_book.list_active().await.unwrap().len(), 3);

    // Positions shift after a removal; position 2 now names table 3.
    let first = system.order_book.close_and_bill(2).await.unwrap();
    assert_eq!(first.table_number, 2);
    let second = system.order_book.close_and_bill(2).await.unwrap();
    assert_eq!(second.table_number, 3);

    let remaining = system.order_book.list_active().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].table_number, 1);
    assert_eq!(remaining[0].position, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_items_are_tolerated() {
    let system = RestaurantSystem::new(SystemConfig::default());

    let placement = system.order_book.place(order_for(8, &[(404, 2), (3, 1)])).await.unwrap();
    assert!(matches!(placement, Placement::Placed { total, .. } if approx(total, 100.0)));

    let active = system.order_book.list_active().await.unwrap();
    assert_eq!(active[0].item_names, vec!["Salad"]);
    assert_eq!(active[0].more_items, 0);

    let bill = system.order_book.close_and_bill(1).await.unwrap();
    assert_eq!(bill.lines.len(), 1);
    assert!(approx(bill.total, 108.0));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_status_targets() {
    let system = RestaurantSystem::new(SystemConfig::default());
    system.order_book.place(order_for(2, &[(9, 1)])).await.unwrap();

    assert!("served".parse::<OrderStatus>().is_err());

    let pending = system.order_book.update_status(1, OrderStatus::Pending).await;
    assert!(matches!(pending, Err(OrderError::InvalidStatus(_))));

    let complete = system.order_book.update_status(1, OrderStatus::Complete).await.unwrap();
    assert_eq!(complete.status, OrderStatus::Complete);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_table_number() {
    let system = RestaurantSystem::new(SystemConfig::default());

    let result = system.order_book.place(order_for(0, &[(1, 1)])).await;
    assert!(matches!(result, Err(OrderError::Rejected(_))));
    assert!(system.order_book.list_active().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}
