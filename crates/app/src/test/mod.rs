//! Shared test support: in-memory repositories and a wired context.


pub(crate) use context::TestContext;
pub(crate) use memory::MemoryRestaurantsRepository;

use tavola::{cart::CartItem, prices::Price};
use uuid::Uuid;

/// A menu item fixture for cart tests.
pub(crate) fn menu_item(name: &str, unit_price: u64) -> CartItem {
    CartItem {
        item_id: Uuid::now_v7(),
        name: name.to_string(),
        unit_price: Price::new(unit_price),
        image: format!("{name}.jpg"),
    }
}
