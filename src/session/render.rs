//! Console text for the menu, the active-order listing and bills.

use std::fmt::Write;
use crate::model::{Bill, MenuCatalog, OrderSummary};

pub const MAIN_MENU: &str = "\n--- Main Menu ---\n\
1. View Menu\n\
2. Place New Order\n\
3. View/Update Active Orders\n\
4. Close Order and Print Bill\n\
5. Exit System\n\
-----------------";

pub const ORDER_ACTIONS: &str = "\n--- Order Actions ---\n\
1. Change Order Status (PENDING -> PREPARING -> COMPLETE)\n\
2. Return to Main Menu";

pub const STATUS_OPTIONS: &str = "New Status Options: [1] Preparing, [2] Complete";

pub fn banner() -> String {
    let rule = "=".repeat(60);
    format!("\n{rule}\n           Welcome to the Restaurant Manager\n{rule}")
}

/// The full menu grouped by category.
pub fn menu(catalog: &MenuCatalog, currency: &str) -> String {
    let rule = "=".repeat(50);
    let mut out = format!("\n{rule}\n                 RESTAURANT MENU\n{rule}\n");
    for (category, items) in catalog.list_by_category() {
        let _ = writeln!(out, "\n--- {} ---", category.to_uppercase());
        for item in items {
            let _ = writeln!(out, "{:02}. {:<25} {currency}{:>6.2}", item.id, item.name, item.price);
        }
    }
    out.push_str(&rule);
    out
}

/// The active-order listing, or a notice when there are none.
pub fn order_summaries(summaries: &[OrderSummary]) -> String {
    if summaries.is_empty() {
        return "\nThere are no active orders currently.".to_string();
    }

    let rule = "-".repeat(60);
    let mut out = format!("\n{rule}\n                       ACTIVE ORDERS\n{rule}\n");
    for summary in summaries {
        let _ = writeln!(out, "[{}] {summary}", summary.position);
        if !summary.item_names.is_empty() {
            let _ = write!(out, "    Items: {}", summary.item_names.join(", "));
            if summary.more_items > 0 {
                let _ = write!(out, " and {} more items.", summary.more_items);
            }
            out.push('\n');
        }
    }
    out.push_str(&rule);
    out
}

/// The printed receipt for a closed order.
pub fn bill(bill: &Bill, currency: &str) -> String {
    let frame = "#".repeat(40);
    let rule = "-".repeat(40);
    let mut out = format!("\n{frame}\n");
    let _ = writeln!(out, "         FINAL BILL FOR TABLE {}", bill.table_number);
    let _ = writeln!(out, "         Order ID: {}", bill.order_id);
    let _ = writeln!(out, "         Time Placed: {}", bill.created_at.format("%Y-%m-%d %H:%M"));
    let _ = writeln!(out, "{rule}");
    for line in &bill.lines {
        let _ = writeln!(out, "  {}x {:<25} {currency}{:>7.2}", line.quantity, line.name, line.subtotal);
    }
    let _ = writeln!(out, "{rule}");
    let tax_label = format!("Tax ({:.0}%):", bill.tax_rate * 100.0);
    let _ = writeln!(out, "  {:<28} {currency}{:>7.2}", "Subtotal:", bill.subtotal);
    let _ = writeln!(out, "  {:<28} {currency}{:>7.2}", tax_label, bill.tax);
    let _ = writeln!(out, "  {:<28} {currency}{:>7.2}", "FINAL AMOUNT DUE:", bill.total);
    out.push_str(&frame);
    out
}
