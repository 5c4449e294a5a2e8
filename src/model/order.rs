use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use super::menu::MenuCatalog;

/// Length of the random order token.
pub const ORDER_ID_LEN: usize = 8;

/// Represents one table's in-progress order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be owned by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters (a fully built [`Order`])
/// - Update parameters ([`OrderUpdate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub table_number: u32,
    /// Menu item id to quantity. Every quantity is at least 1.
    pub line_items: BTreeMap<u32, u32>,
    pub created_at: DateTime<Local>,
    pub status: OrderStatus,
}

impl Order {
    /// Starts a new, empty order for a table.
    ///
    /// The table number is validated by the caller. The id is a random token
    /// and the order starts out [`OrderStatus::Pending`].
    pub fn create(table_number: u32) -> Self {
        Self {
            id: generate_order_id(),
            table_number,
            line_items: BTreeMap::new(),
            created_at: Local::now(),
            status: OrderStatus::Pending,
        }
    }

    /// Adds `quantity` of an item, summing with any quantity already present.
    ///
    /// The quantity must be positive and the id is not checked against any
    /// catalog; both are the caller's responsibility. Returns the new quantity,
    /// or `None` without touching the order when the sum would overflow.
    pub fn add_item(&mut self, item_id: u32, quantity: u32) -> Option<u32> {
        let current = self.line_items.get(&item_id).copied().unwrap_or(0);
        let updated = current.checked_add(quantity)?;
        self.line_items.insert(item_id, updated);
        Some(updated)
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Sum of quantity × price. Ids missing from the catalog contribute nothing.
    pub fn total(&self, catalog: &MenuCatalog) -> f64 {
        self.line_items
            .iter()
            .filter_map(|(id, qty)| catalog.get(*id).map(|item| item.price * f64::from(*qty)))
            .sum()
    }

    /// Names of the referenced items that resolve against the catalog.
    pub fn item_names<'a>(&self, catalog: &'a MenuCatalog) -> Vec<&'a str> {
        self.line_items
            .keys()
            .filter_map(|id| catalog.get(*id).map(|item| item.name.as_str()))
            .collect()
    }
}

fn generate_order_id() -> String {
    let mut token = uuid::Uuid::new_v4().simple().to_string();
    token.truncate(ORDER_ID_LEN);
    token
}

/// Kitchen progress of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Complete,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Complete => "COMPLETE",
        }
    }

    /// Returns the status an order moves to when `target` is requested.
    ///
    /// Orders may move to PREPARING or COMPLETE from any state, including
    /// back from COMPLETE, but never return to PENDING.
    pub fn transition(self, target: OrderStatus) -> Result<OrderStatus, String> {
        match (self, target) {
            (_, OrderStatus::Pending) => Err(format!("cannot move order from {self} back to PENDING")),
            (OrderStatus::Pending | OrderStatus::Preparing | OrderStatus::Complete, next) => Ok(next),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    /// Case-insensitive parse of the status name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(OrderStatus::Pending),
            "PREPARING" => Ok(OrderStatus::Preparing),
            "COMPLETE" => Ok(OrderStatus::Complete),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

/// Payload for updating an existing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}

/// Number of item names shown in an order summary before collapsing the rest.
pub const SUMMARY_ITEM_LIMIT: usize = 2;

/// One line of the active-order listing.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    /// 1-based position in the active sequence at the time of listing.
    pub position: usize,
    pub order_id: String,
    pub table_number: u32,
    pub status: OrderStatus,
    pub created_at: DateTime<Local>,
    /// At most [`SUMMARY_ITEM_LIMIT`] names of items found on the menu.
    pub item_names: Vec<String>,
    /// How many further menu items the order references.
    pub more_items: usize,
}

impl OrderSummary {
    pub fn of(position: usize, order: &Order, catalog: &MenuCatalog) -> Self {
        let names = order.item_names(catalog);
        let more_items = names.len().saturating_sub(SUMMARY_ITEM_LIMIT);
        Self {
            position,
            order_id: order.id.clone(),
            table_number: order.table_number,
            status: order.status,
            created_at: order.created_at,
            item_names: names.into_iter().take(SUMMARY_ITEM_LIMIT).map(str::to_owned).collect(),
            more_items,
        }
    }
}

/// The one-line header of a listed order; item names are rendered separately.
impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order #{} | Table: {} | Status: {} | Time: {}",
            self.order_id,
            self.table_number,
            self.status,
            self.created_at.format("%H:%M")
        )
    }
}
