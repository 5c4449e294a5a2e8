//! Parsing of the free-text lines typed at each prompt.
//!
//! Every parser returns an [`InputError`] instead of failing the session; the
//! error's display text is the message shown before re-prompting.

use thiserror::Error;
use crate::model::{MenuCatalog, OrderStatus};

/// Sentinel that ends item entry, matched case-insensitively.
pub const DONE_SENTINEL: &str = "done";

/// Recoverable problems with a line of user input.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    /// Text where an integer was expected.
    #[error("Invalid input. Please enter {expected}.")]
    NotANumber { expected: &'static str },

    #[error("Invalid format. Use 'ID Quantity'.")]
    MalformedPair,

    #[error("Quantity must be positive.")]
    NonPositiveQuantity,

    #[error("Table number must be positive.")]
    NonPositiveTable,

    #[error("Item ID {0} not found on the menu.")]
    UnknownItem(i64),

    /// Adding the entry would push the item's quantity past what an order can hold.
    #[error("Quantity too large for item {0}; the entry was not added.")]
    QuantityTooLarge(u32),

    #[error("Invalid status option.")]
    InvalidStatusOption,

    #[error("Invalid choice. Please enter a number between 1 and 5.")]
    InvalidMenuChoice,
}

/// One line of item entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEntry {
    Item { item_id: u32, quantity: u32 },
    Done,
}

fn parse_integer(text: &str, expected: &'static str) -> Result<i64, InputError> {
    text.trim().parse().map_err(|_| InputError::NotANumber { expected })
}

/// Parses `"<item id> <quantity>"` or the `done` sentinel.
///
/// The quantity is checked before the id is looked up in the catalog.
pub fn parse_item_entry(line: &str, catalog: &MenuCatalog) -> Result<ItemEntry, InputError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case(DONE_SENTINEL) {
        return Ok(ItemEntry::Done);
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let [id_text, qty_text] = parts.as_slice() else {
        return Err(InputError::MalformedPair);
    };

    const EXPECTED: &str = "valid numbers for ID and Quantity";
    let item_id = parse_integer(id_text, EXPECTED)?;
    let quantity = parse_integer(qty_text, EXPECTED)?;

    if quantity <= 0 {
        return Err(InputError::NonPositiveQuantity);
    }
    let quantity = u32::try_from(quantity).map_err(|_| InputError::NotANumber { expected: EXPECTED })?;

    match u32::try_from(item_id) {
        Ok(id) if catalog.contains(id) => Ok(ItemEntry::Item { item_id: id, quantity }),
        _ => Err(InputError::UnknownItem(item_id)),
    }
}

pub fn parse_table_number(line: &str) -> Result<u32, InputError> {
    const EXPECTED: &str = "a valid table number";
    let table = parse_integer(line, EXPECTED)?;
    if table <= 0 {
        return Err(InputError::NonPositiveTable);
    }
    u32::try_from(table).map_err(|_| InputError::NotANumber { expected: EXPECTED })
}

/// Parses a 1-based order position. Range checks happen against the order book.
pub fn parse_position(line: &str) -> Result<i64, InputError> {
    parse_integer(line, "a valid order number")
}

/// Maps the status sub-menu: `1` is PREPARING, `2` is COMPLETE.
pub fn parse_status_option(line: &str) -> Result<OrderStatus, InputError> {
    match line.trim() {
        "1" => Ok(OrderStatus::Preparing),
        "2" => Ok(OrderStatus::Complete),
        _ => Err(InputError::InvalidStatusOption),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_entry_accepts_pairs_and_sentinel() {
        let catalog = MenuCatalog::initialize();
        assert_eq!(
            parse_item_entry("  1 2 ", &catalog),
            Ok(ItemEntry::Item { item_id: 1, quantity: 2 })
        );
        assert_eq!(parse_item_entry("DONE", &catalog), Ok(ItemEntry::Done));
        assert_eq!(parse_item_entry("Done\n", &catalog), Ok(ItemEntry::Done));
    }

    #[test]
    fn test_item_entry_rejections() {
        let catalog = MenuCatalog::initialize();
        assert_eq!(parse_item_entry("1", &catalog), Err(InputError::MalformedPair));
        assert_eq!(parse_item_entry("1 2 3", &catalog), Err(InputError::MalformedPair));
        assert_eq!(parse_item_entry("", &catalog), Err(InputError::MalformedPair));
        assert!(matches!(parse_item_entry("burger 2", &catalog), Err(InputError::NotANumber { .. })));
        assert_eq!(parse_item_entry("1 0", &catalog), Err(InputError::NonPositiveQuantity));
        assert_eq!(parse_item_entry("99 0", &catalog), Err(InputError::NonPositiveQuantity));
        assert_eq!(parse_item_entry("11 1", &catalog), Err(InputError::UnknownItem(11)));
        assert_eq!(parse_item_entry("-3 1", &catalog), Err(InputError::UnknownItem(-3)));
    }

    #[test]
    fn test_table_number() {
        assert_eq!(parse_table_number(" 5 "), Ok(5));
        assert_eq!(parse_table_number("0"), Err(InputError::NonPositiveTable));
        assert_eq!(parse_table_number("-2"), Err(InputError::NonPositiveTable));
        assert_eq!(
            parse_table_number("five").unwrap_err().to_string(),
            "Invalid input. Please enter a valid table number."
        );
    }

    #[test]
    fn test_position_and_status_option() {
        assert_eq!(parse_position("2"), Ok(2));
        assert_eq!(parse_position("-1"), Ok(-1));
        assert!(parse_position("x").is_err());

        assert_eq!(parse_status_option("1"), Ok(OrderStatus::Preparing));
        assert_eq!(parse_status_option("2"), Ok(OrderStatus::Complete));
        assert_eq!(parse_status_option("3"), Err(InputError::InvalidStatusOption));
    }
}
