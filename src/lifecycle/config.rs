use crate::model::DEFAULT_TAX_RATE;

/// Runtime settings for a [`RestaurantSystem`](super::RestaurantSystem).
///
/// There is no config file; the binary runs with [`SystemConfig::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Flat tax applied to every bill.
    pub tax_rate: f64,
    /// Symbol printed in front of every amount.
    pub currency: String,
    /// Capacity of the order actor's mailbox.
    pub mailbox_size: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            currency: "₹".to_string(),
            mailbox_size: 32,
        }
    }
}
