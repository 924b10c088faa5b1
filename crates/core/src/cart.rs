//! Cart

use uuid::Uuid;

use crate::prices::Price;

/// A purchasable menu item as handed to the cart, before a quantity is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub item_id: Uuid,
    pub name: String,
    pub unit_price: Price,
    pub image: String,
}

/// One cart line: an item plus the desired quantity.
///
/// A line only exists while its quantity is at least one; a quantity of zero
/// removes the line rather than being stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub item_id: Uuid,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub image: String,
}

/// The current user's cart: an insertion-ordered set of lines, at most one
/// per item id.
///
/// The total is derived on every read and never stored, so it cannot desync
/// from the lines.
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Add one unit of `item` to the cart.
    ///
    /// If a line for the same item id already exists its quantity is
    /// incremented; otherwise a new line with quantity one is appended.
    pub fn add_item(&mut self, item: CartItem) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.item_id == item.item_id) {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine {
            item_id: item.item_id,
            name: item.name,
            unit_price: item.unit_price,
            quantity: 1,
            image: item.image,
        });
    }

    /// Set the quantity of the line for `item_id`.
    ///
    /// A quantity of zero removes the line entirely. An absent id is a no-op.
    pub fn update_quantity(&mut self, item_id: Uuid, quantity: u32) {
        if quantity == 0 {
            self.remove_item(item_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.item_id == item_id) {
            line.quantity = quantity;
        }
    }

    /// Remove the line for `item_id`, if present.
    pub fn remove_item(&mut self, item_id: Uuid) {
        self.lines.retain(|line| line.item_id != item_id);
    }

    /// Empty the cart. Called after a successful order submission.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The cart total: the sum of `unit_price` times `quantity` over all
    /// lines, recomputed on each call.
    pub fn total(&self) -> Price {
        self.lines
            .iter()
            .map(|line| line.unit_price.line_total(line.quantity))
            .sum()
    }

    /// Copy the current lines by value for checkout.
    ///
    /// Mutating the cart after taking a snapshot does not affect the
    /// snapshot, so an in-flight submission cannot race a concurrent edit.
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    /// The current lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    fn item(name: &str, unit_price: u64) -> CartItem {
        CartItem {
            item_id: Uuid::now_v7(),
            name: name.to_string(),
            unit_price: Price::new(unit_price),
            image: format!("{name}.jpg"),
        }
    }

    #[test]
    fn add_item_appends_with_quantity_one() {
        let mut cart = Cart::new();

        cart.add_item(item("Margherita", 10_00));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let mut cart = Cart::new();
        let margherita = item("Margherita", 10_00);

        for _ in 0..4 {
            cart.add_item(margherita.clone());
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 4);
    }

    #[test]
    fn update_quantity_to_zero_removes_the_line() {
        let mut cart = Cart::new();
        let margherita = item("Margherita", 10_00);

        cart.add_item(margherita.clone());
        cart.add_item(margherita.clone());
        cart.update_quantity(margherita.item_id, 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_sets_a_positive_quantity() {
        let mut cart = Cart::new();
        let margherita = item("Margherita", 10_00);

        cart.add_item(margherita.clone());
        cart.update_quantity(margherita.item_id, 7);

        assert_eq!(cart.lines()[0].quantity, 7);
    }

    #[test]
    fn update_quantity_for_absent_id_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add_item(item("Margherita", 10_00));

        cart.update_quantity(Uuid::now_v7(), 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn remove_item_is_unconditional() {
        let mut cart = Cart::new();
        let margherita = item("Margherita", 10_00);

        cart.add_item(margherita.clone());
        cart.remove_item(margherita.item_id);
        cart.remove_item(margherita.item_id);

        assert!(cart.is_empty());
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add_item(item("Margherita", 10_00));
        cart.add_item(item("Bruschetta", 4_50));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::new(0));
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new();
        let first = item("Margherita", 10_00);
        let second = item("Bruschetta", 4_50);

        cart.add_item(first.clone());
        cart.add_item(second.clone());
        cart.add_item(first.clone());

        let ids: Vec<_> = cart.lines().iter().map(|line| line.item_id).collect();
        assert_eq!(ids, vec![first.item_id, second.item_id]);
    }

    #[test]
    fn snapshot_is_immune_to_later_mutation() {
        let mut cart = Cart::new();
        let margherita = item("Margherita", 10_00);
        cart.add_item(margherita.clone());

        let snapshot = cart.snapshot();
        cart.update_quantity(margherita.item_id, 9);
        cart.clear();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].quantity, 1);
    }

    #[test]
    fn worked_example_totals() {
        let mut cart = Cart::new();
        let a = item("A", 10_00);
        let b = item("B", 5_00);

        cart.add_item(a.clone());
        cart.add_item(a.clone());
        cart.add_item(b.clone());
        assert_eq!(cart.total(), Price::new(25_00));

        cart.update_quantity(a.item_id, 1);
        assert_eq!(cart.total(), Price::new(15_00));

        // Only line A (1 × 10_00) remains; the total is recomputed from the
        // remaining lines.
        cart.remove_item(b.item_id);
        assert_eq!(cart.total(), Price::new(10_00));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn total_invariant_holds_for_random_operation_sequences() {
        let mut rng = StdRng::seed_from_u64(0x7a_f0_0d);
        let pool: Vec<CartItem> = (0..6)
            .map(|i| item(&format!("item-{i}"), u64::from(rng.gen_range(1_00..20_00_u32))))
            .collect();

        let mut cart = Cart::new();
        let mut model: HashMap<Uuid, (u64, u32)> = HashMap::new();

        for _ in 0..500 {
            let picked = &pool[rng.gen_range(0..pool.len())];

            match rng.gen_range(0..4_u8) {
                0 => {
                    cart.add_item(picked.clone());
                    model
                        .entry(picked.item_id)
                        .and_modify(|(_, quantity)| *quantity += 1)
                        .or_insert((*picked.unit_price, 1));
                }
                1 => {
                    let quantity = rng.gen_range(0..5_u32);
                    cart.update_quantity(picked.item_id, quantity);
                    if model.contains_key(&picked.item_id) {
                        if quantity == 0 {
                            model.remove(&picked.item_id);
                        } else if let Some(entry) = model.get_mut(&picked.item_id) {
                            entry.1 = quantity;
                        }
                    }
                }
                2 => {
                    cart.remove_item(picked.item_id);
                    model.remove(&picked.item_id);
                }
                _ => {
                    // Occasional clear, weighted rarely so carts grow.
                    if rng.gen_range(0..10_u8) == 0 {
                        cart.clear();
                        model.clear();
                    }
                }
            }

            let expected: u64 = model
                .values()
                .map(|(unit_price, quantity)| unit_price * u64::from(*quantity))
                .sum();

            assert_eq!(*cart.total(), expected);
            assert_eq!(cart.len(), model.len());
            assert!(cart.lines().iter().all(|line| line.quantity >= 1));
        }
    }
}
