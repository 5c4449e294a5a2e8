use chrono::{DateTime, Local};
use super::menu::MenuCatalog;
use super::order::Order;

/// Flat sales tax applied to every bill.
pub const DEFAULT_TAX_RATE: f64 = 0.08;

/// One printed line of a bill.
#[derive(Debug, Clone, PartialEq)]
pub struct BillLine {
    pub quantity: u32,
    pub name: String,
    pub subtotal: f64,
}

/// The final bill for a closed order.
///
/// Built from the order after it has left the active sequence; nothing keeps
/// the order once the bill is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub order_id: String,
    pub table_number: u32,
    pub created_at: DateTime<Local>,
    pub lines: Vec<BillLine>,
    pub subtotal: f64,
    pub tax_rate: f64,
    pub tax: f64,
    pub total: f64,
}

impl Bill {
    /// Prices `order` against the catalog. Lines whose item is no longer on
    /// the menu are left off the bill and out of the subtotal.
    pub fn for_order(order: &Order, catalog: &MenuCatalog, tax_rate: f64) -> Self {
        let lines = order
            .line_items
            .iter()
            .filter_map(|(id, qty)| {
                catalog.get(*id).map(|item| BillLine {
                    quantity: *qty,
                    name: item.name.clone(),
                    subtotal: item.price * f64::from(*qty),
                })
            })
            .collect();
        let subtotal = order.total(catalog);
        let tax = subtotal * tax_rate;

        Self {
            order_id: order.id.clone(),
            table_number: order.table_number,
            created_at: order.created_at,
            lines,
            subtotal,
            tax_rate,
            tax,
            total: subtotal + tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_tax_on_round_subtotal() {
        let catalog = MenuCatalog::initialize();
        let mut order = Order::create(9);
        order.add_item(3, 1); // Salad 100.00

        let bill = Bill::for_order(&order, &catalog, DEFAULT_TAX_RATE);
        assert!(approx(bill.subtotal, 100.0));
        assert!(approx(bill.tax, 8.0));
        assert!(approx(bill.total, 108.0));
        assert_eq!(format!("{:.2} {:.2}", bill.tax, bill.total), "8.00 108.00");
    }

    #[test]
    fn test_lines_skip_unknown_items() {
        let catalog = MenuCatalog::initialize();
        let mut order = Order::create(5);
        order.add_item(1, 2);
        order.add_item(77, 3);
        order.add_item(6, 1);

        let bill = Bill::for_order(&order, &catalog, DEFAULT_TAX_RATE);
        assert_eq!(
            bill.lines,
            vec![
                BillLine { quantity: 2, name: "Classic Burger".into(), subtotal: 120.0 },
                BillLine { quantity: 1, name: "Mineral Water".into(), subtotal: 60.0 },
            ]
        );
        assert_eq!(format!("{:.2} {:.2} {:.2}", bill.subtotal, bill.tax, bill.total), "180.00 14.40 194.40");
    }
}
