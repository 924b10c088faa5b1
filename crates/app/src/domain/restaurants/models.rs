//! Search models.

use uuid::Uuid;

/// What a search hit refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Restaurant,
    Dish,
}

/// One match from a name search: a restaurant, or a dish on some menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: Uuid,
    pub name: String,
    pub kind: SearchKind,
    pub image: String,
}
