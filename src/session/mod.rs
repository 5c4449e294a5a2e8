//! The interactive text-menu session.
//!
//! A [`Session`] is a small state machine over [`SessionState`]. Each state
//! reads what it needs from the input, talks to the order book, prints the
//! result, and names the state to enter next. Bad input is reported and the
//! loop carries on; only console I/O failures or a dead order book end the
//! session with an error.

pub mod input;
pub mod render;

use std::fmt::Display;
use std::io::Write;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, info, instrument};
use crate::clients::{OrderBookClient, Placement};
use crate::model::Order;
use crate::order_actor::OrderError;
use self::input::{InputError, ItemEntry};

/// Failures that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("order book unavailable: {0}")]
    OrderBook(#[from] OrderError),
}

/// States of the interactive control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MainMenu,
    ViewMenu,
    PlaceOrder,
    ManageOrders,
    CloseOrder,
    Exit,
}

impl SessionState {
    /// Maps a main-menu choice (`1`-`5`) to the state it opens.
    pub fn from_choice(choice: &str) -> Result<Self, InputError> {
        match choice.trim() {
            "1" => Ok(SessionState::ViewMenu),
            "2" => Ok(SessionState::PlaceOrder),
            "3" => Ok(SessionState::ManageOrders),
            "4" => Ok(SessionState::CloseOrder),
            "5" => Ok(SessionState::Exit),
            _ => Err(InputError::InvalidMenuChoice),
        }
    }
}

/// Drives the order book from line-oriented text input.
///
/// End of input is treated like the exit choice.
pub struct Session<R, W> {
    order_book: OrderBookClient,
    currency: String,
    lines: Lines<R>,
    out: W,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(order_book: OrderBookClient, currency: impl Into<String>, input: R, out: W) -> Self {
        Self {
            order_book,
            currency: currency.into(),
            lines: input.lines(),
            out,
        }
    }

    /// Runs the control loop until the user exits or input ends.
    pub async fn run(mut self) -> Result<(), SessionError> {
        writeln!(self.out, "{}", render::banner())?;

        let mut state = SessionState::MainMenu;
        loop {
            debug!(?state, "Entering state");
            state = match state {
                SessionState::MainMenu => self.main_menu().await?,
                SessionState::ViewMenu => {
                    self.show_menu()?;
                    SessionState::MainMenu
                }
                SessionState::PlaceOrder => self.place_order().await?,
                SessionState::ManageOrders => self.manage_orders().await?,
                SessionState::CloseOrder => self.close_order().await?,
                SessionState::Exit => {
                    writeln!(self.out, "Shutting down the Restaurant Manager. Have a good day!")?;
                    self.out.flush()?;
                    info!("Session ended");
                    return Ok(());
                }
            };
        }
    }

    /// Prints `text` and reads one line. `None` means the input is exhausted.
    async fn prompt(&mut self, text: &str) -> Result<Option<String>, SessionError> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let line = self.lines.next_line().await?;
        Ok(line.map(|l| l.trim().to_string()))
    }

    fn say(&mut self, message: impl Display) -> Result<(), SessionError> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    fn reject(&mut self, error: InputError) -> Result<(), SessionError> {
        debug!(%error, "Rejected input");
        self.say(error)
    }

    /// Reports order book errors caused by the user; anything else ends the session.
    fn order_failure(&mut self, error: OrderError) -> Result<(), SessionError> {
        if error.is_user_error() {
            self.say(format_args!("⚠ Error: {error}"))
        } else {
            Err(error.into())
        }
    }

    fn show_menu(&mut self) -> Result<(), SessionError> {
        let text = render::menu(self.order_book.catalog(), &self.currency);
        self.say(text)
    }

    /// Lists active orders and reports whether there are any.
    async fn show_active_orders(&mut self) -> Result<bool, SessionError> {
        let summaries = self.order_book.list_active().await?;
        self.say(render::order_summaries(&summaries))?;
        Ok(!summaries.is_empty())
    }

    async fn main_menu(&mut self) -> Result<SessionState, SessionError> {
        self.say(render::MAIN_MENU)?;
        let Some(choice) = self.prompt("Enter your choice (1-5): ").await? else {
            return Ok(SessionState::Exit);
        };
        match SessionState::from_choice(&choice) {
            Ok(next) => Ok(next),
            Err(error) => {
                self.say(format_args!("❌ {error}"))?;
                Ok(SessionState::MainMenu)
            }
        }
    }

    #[instrument(skip(self))]
    async fn place_order(&mut self) -> Result<SessionState, SessionError> {
        let Some(line) = self.prompt("Enter the Table Number for the new order: ").await? else {
            return Ok(SessionState::Exit);
        };
        let table = match input::parse_table_number(&line) {
            Ok(table) => table,
            Err(error) => {
                self.reject(error)?;
                return Ok(SessionState::MainMenu);
            }
        };

        self.show_menu()?;
        let mut order = Order::create(table);
        self.say(format_args!("\n--- Placing New Order for Table {table} (ID: {}) ---", order.id))?;

        let mut next = SessionState::MainMenu;
        loop {
            let Some(line) = self
                .prompt("Enter Item ID and Quantity (e.g., '1 2'), or 'done' to finish: ")
                .await?
            else {
                next = SessionState::Exit;
                break;
            };
            match input::parse_item_entry(&line, self.order_book.catalog()) {
                Ok(ItemEntry::Done) => break,
                Ok(ItemEntry::Item { item_id, quantity }) => {
                    if order.add_item(item_id, quantity).is_none() {
                        self.reject(InputError::QuantityTooLarge(item_id))?;
                        continue;
                    }
                    let name = self
                        .order_book
                        .catalog()
                        .get(item_id)
                        .map(|item| item.name.clone())
                        .unwrap_or_default();
                    self.say(format_args!("Added {quantity} x {name} to the order."))?;
                }
                Err(error) => self.reject(error)?,
            }
        }

        match self.order_book.place(order).await {
            Ok(Placement::Placed { order_id, total }) => {
                let message = format!(
                    "\n✅ Order #{order_id} placed successfully! Estimated Total: {}{total:.2}",
                    self.currency
                );
                self.say(message)?;
            }
            Ok(Placement::Cancelled) => self.say("Order cancelled as no items were added.")?,
            Err(error) => self.order_failure(error)?,
        }
        Ok(next)
    }

    #[instrument(skip(self))]
    async fn manage_orders(&mut self) -> Result<SessionState, SessionError> {
        if !self.show_active_orders().await? {
            return Ok(SessionState::MainMenu);
        }

        self.say(render::ORDER_ACTIONS)?;
        let Some(action) = self.prompt("Enter action (1 or 2): ").await? else {
            return Ok(SessionState::Exit);
        };
        if action != "1" {
            return Ok(SessionState::MainMenu);
        }

        let Some(line) = self.prompt("Enter the order number to update: ").await? else {
            return Ok(SessionState::Exit);
        };
        let position = match input::parse_position(&line) {
            Ok(position) => position,
            Err(error) => {
                self.reject(error)?;
                return Ok(SessionState::MainMenu);
            }
        };

        self.say(render::STATUS_OPTIONS)?;
        let Some(line) = self.prompt("Enter status option (1 or 2): ").await? else {
            return Ok(SessionState::Exit);
        };
        let status = match input::parse_status_option(&line) {
            Ok(status) => status,
            Err(error) => {
                self.reject(error)?;
                return Ok(SessionState::MainMenu);
            }
        };

        match self.order_book.update_status(position, status).await {
            Ok(order) => self.say(format_args!(
                "✅ Order #{} status updated to: {}",
                order.id, order.status
            ))?,
            Err(error) => self.order_failure(error)?,
        }
        Ok(SessionState::MainMenu)
    }

    #[instrument(skip(self))]
    async fn close_order(&mut self) -> Result<SessionState, SessionError> {
        if !self.show_active_orders().await? {
            return Ok(SessionState::MainMenu);
        }

        let Some(line) = self.prompt("Enter the order number to close and bill: ").await? else {
            return Ok(SessionState::Exit);
        };
        let position = match input::parse_position(&line) {
            Ok(position) => position,
            Err(error) => {
                self.reject(error)?;
                return Ok(SessionState::MainMenu);
            }
        };

        match self.order_book.close_and_bill(position).await {
            Ok(bill) => {
                let receipt = render::bill(&bill, &self.currency);
                self.say(receipt)?;
                self.say(format_args!("\n🎉 Order #{} successfully closed and billed.", bill.order_id))?;
            }
            Err(error) => self.order_failure(error)?,
        }
        Ok(SessionState::MainMenu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_choices() {
        assert_eq!(SessionState::from_choice("1"), Ok(SessionState::ViewMenu));
        assert_eq!(SessionState::from_choice(" 2 "), Ok(SessionState::PlaceOrder));
        assert_eq!(SessionState::from_choice("3"), Ok(SessionState::ManageOrders));
        assert_eq!(SessionState::from_choice("4"), Ok(SessionState::CloseOrder));
        assert_eq!(SessionState::from_choice("5"), Ok(SessionState::Exit));
        assert_eq!(SessionState::from_choice("6"), Err(InputError::InvalidMenuChoice));
        assert_eq!(SessionState::from_choice("menu"), Err(InputError::InvalidMenuChoice));
    }
}
