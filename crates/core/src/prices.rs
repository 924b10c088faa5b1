//! Prices

use std::{iter::Sum, ops::Deref};

use serde::{Deserialize, Serialize};

/// Represents a price in pence/cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price {
    value: u64,
}

impl Price {
    /// Creates a new Price
    pub fn new(value: u64) -> Self {
        Price { value }
    }

    /// The price of `quantity` units at this unit price.
    ///
    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn line_total(self, quantity: u32) -> Price {
        Price::new(self.value.saturating_mul(u64::from(quantity)))
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        Price::new(iter.fold(0_u64, |total, price| total.saturating_add(price.value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_price() {
        let price = Price::new(1000);

        assert_eq!(price.value, 1000);
    }

    #[test]
    fn price_derefs_to_u64() {
        let price = Price { value: 100 };

        assert_eq!(*price, 100);
    }

    #[test]
    fn line_total_multiplies_by_quantity() {
        let price = Price::new(2_50);

        assert_eq!(price.line_total(3), Price::new(7_50));
        assert_eq!(price.line_total(0), Price::new(0));
    }

    #[test]
    fn line_total_saturates_instead_of_overflowing() {
        let price = Price::new(u64::MAX);

        assert_eq!(price.line_total(2), Price::new(u64::MAX));
    }

    #[test]
    fn prices_sum() {
        let total: Price = [Price::new(100), Price::new(200), Price::new(300)]
            .into_iter()
            .sum();

        assert_eq!(total, Price::new(600));
    }

    #[test]
    fn sum_saturates_instead_of_overflowing() {
        let total: Price = [Price::new(u64::MAX), Price::new(1)].into_iter().sum();

        assert_eq!(total, Price::new(u64::MAX));
    }
}
