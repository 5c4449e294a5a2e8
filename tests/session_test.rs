use restaurant_manager::lifecycle::{RestaurantSystem, SystemConfig};
use restaurant_manager::session::Session;

/// Runs a scripted session against a fresh system and returns everything printed.
async fn run_script(script: &str) -> (String, usize) {
    let config = SystemConfig::default();
    let system = RestaurantSystem::new(config.clone());

    let mut out = Vec::new();
    let session = Session::new(system.order_book.clone(), config.currency, script.as_bytes(), &mut out);
    session.run().await.expect("session failed");

    let remaining = system.order_book.list_active().await.unwrap().len();
    system.shutdown().await.unwrap();
    (String::from_utf8(out).unwrap(), remaining)
}

#[tokio::test]
async fn test_place_update_and_bill() {
    let script = "2\n5\n1 2\n6 1\ndone\n3\n1\n1\n1\n4\n1\n5\n";
    let (out, remaining) = run_script(script).await;

    assert!(out.contains("RESTAURANT MENU"));
    assert!(out.contains("Added 2 x Classic Burger to the order."));
    assert!(out.contains("Added 1 x Mineral Water to the order."));
    assert!(out.contains("placed successfully! Estimated Total: ₹180.00"));
    assert!(out.contains("Table: 5 | Status: PENDING"));
    assert!(out.contains("Items: Classic Burger, Mineral Water"));
    assert!(out.contains("status updated to: PREPARING"));
    assert!(out.contains("FINAL BILL FOR TABLE 5"));
    assert!(out.contains("₹ 180.00"));
    assert!(out.contains("₹  14.40"));
    assert!(out.contains("₹ 194.40"));
    assert!(out.contains("successfully closed and billed."));
    assert!(out.ends_with("Shutting down the Restaurant Manager. Have a good day!\n"));
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn test_all_invalid_entries_cancel_the_order() {
    let script = "2\n3\nabc\n1\n0 0\n42 1\n1 -1\nburger two\ndone\n3\n5\n";
    let (out, remaining) = run_script(script).await;

    assert!(out.contains("Invalid format. Use 'ID Quantity'."));
    assert!(out.contains("Quantity must be positive."));
    assert!(out.contains("Item ID 42 not found on the menu."));
    assert!(out.contains("Invalid input. Please enter valid numbers for ID and Quantity."));
    assert!(out.contains("Order cancelled as no items were added."));
    assert!(out.contains("There are no active orders currently."));
    assert!(!out.contains("Order Actions"));
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn test_bad_selections_do_not_mutate() {
    let script = concat!(
        "9\n",              // unknown main-menu choice
        "2\nx\n",           // non-numeric table
        "2\n-4\n",          // non-positive table
        "2\n1\n1 1\nDONE\n", // one order for table 1
        "3\n1\n2\n1\n",     // update position 2 of 1
        "3\n1\n1\n7\n",     // bad status option
        "4\nfirst\n",       // non-numeric position
        "4\n3\n",           // close position 3 of 1
        "3\n2\n",           // return to main menu
        "5\n",
    );
    let (out, remaining) = run_script(script).await;

    assert!(out.contains("❌ Invalid choice. Please enter a number between 1 and 5."));
    assert!(out.contains("Invalid input. Please enter a valid table number."));
    assert!(out.contains("Table number must be positive."));
    assert!(out.contains("⚠ Error: Invalid order number 2."));
    assert!(out.contains("Invalid status option."));
    assert!(out.contains("Invalid input. Please enter a valid order number."));
    assert!(out.contains("⚠ Error: Invalid order number 3."));
    assert!(!out.contains("status updated"));
    assert!(!out.contains("FINAL BILL"));
    assert_eq!(remaining, 1);
}

#[tokio::test]
async fn test_end_of_input_ends_session() {
    let (out, remaining) = run_script("2\n7\n1 1\n").await;

    assert!(out.contains("placed successfully! Estimated Total: ₹60.00"));
    assert!(out.contains("Have a good day!"));
    assert_eq!(remaining, 1);
}

#[tokio::test]
async fn test_quantity_overflow_is_rejected_and_entry_continues() {
    let script = "2\n5\n1 4294967295\n1 1\ndone\n5\n";
    let (out, remaining) = run_script(script).await;

    assert!(out.contains("Added 4294967295 x Classic Burger to the order."));
    assert!(out.contains("Quantity too large for item 1; the entry was not added."));
    assert!(!out.contains("Added 1 x Classic Burger"));
    assert!(out.contains("placed successfully! Estimated Total: ₹257698037700.00"));
    assert_eq!(remaining, 1);
}
