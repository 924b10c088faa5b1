//! Convenience re-exports of the most commonly used types.

pub use crate::{
    cart::{Cart, CartItem, CartLine},
    menu::{MenuItem, Restaurant},
    orders::{
        NewOrder, Order, OrderLine, OrderStatus, OrderValidationError, Progress,
        UnknownStatusError,
    },
    prices::Price,
    users::{Role, UnknownRoleError},
};
