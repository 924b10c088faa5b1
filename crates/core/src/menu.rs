//! Restaurants and menus

use serde::Deserialize;
use uuid::Uuid;

use crate::prices::Price;

/// A dish on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: String,
    pub category: String,
}

/// A restaurant with its nested menu, as read from the store.
#[derive(Debug, Clone, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub rating: f32,
    pub cuisine_type: String,
    pub delivery_time: String,
    pub minimum_order: String,
    /// The store nests menu rows under `menu_items`.
    #[serde(alias = "menu_items", default)]
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Look up a menu item by id.
    pub fn menu_item(&self, id: Uuid) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_with_nested_menu_items() -> TestResult {
        let json = serde_json::json!({
            "id": "0192d7f0-0000-7000-8000-000000000001",
            "name": "Trattoria da Gino",
            "image": "gino.jpg",
            "rating": 4.6,
            "cuisine_type": "Italian",
            "delivery_time": "25-35 min",
            "minimum_order": "£10",
            "menu_items": [{
                "id": "0192d7f0-0000-7000-8000-000000000002",
                "name": "Margherita",
                "description": "Tomato, mozzarella, basil",
                "price": 1000,
                "image": "margherita.jpg",
                "category": "Pizza"
            }]
        });

        let restaurant: Restaurant = serde_json::from_value(json)?;

        assert_eq!(restaurant.menu.len(), 1);
        assert_eq!(restaurant.menu[0].price, Price::new(1000));

        Ok(())
    }

    #[test]
    fn menu_defaults_to_empty_when_absent() -> TestResult {
        let json = serde_json::json!({
            "id": "0192d7f0-0000-7000-8000-000000000001",
            "name": "Trattoria da Gino",
            "image": "gino.jpg",
            "rating": 4.6,
            "cuisine_type": "Italian",
            "delivery_time": "25-35 min",
            "minimum_order": "£10"
        });

        let restaurant: Restaurant = serde_json::from_value(json)?;

        assert!(restaurant.menu.is_empty());

        Ok(())
    }

    #[test]
    fn menu_item_lookup() -> TestResult {
        let json = serde_json::json!({
            "id": "0192d7f0-0000-7000-8000-000000000001",
            "name": "Trattoria da Gino",
            "image": "gino.jpg",
            "rating": 4.6,
            "cuisine_type": "Italian",
            "delivery_time": "25-35 min",
            "minimum_order": "£10",
            "menu_items": [{
                "id": "0192d7f0-0000-7000-8000-000000000002",
                "name": "Margherita",
                "description": "Tomato, mozzarella, basil",
                "price": 1000,
                "image": "margherita.jpg",
                "category": "Pizza"
            }]
        });

        let restaurant: Restaurant = serde_json::from_value(json)?;
        let id: Uuid = "0192d7f0-0000-7000-8000-000000000002".parse()?;

        assert_eq!(restaurant.menu_item(id).map(|item| item.name.as_str()), Some("Margherita"));
        assert!(restaurant.menu_item(Uuid::now_v7()).is_none());

        Ok(())
    }
}
