use bigdecimal::BigDecimal;

use super::errors::DomainError;
use super::menu::{MenuItem, NewMenuItem};
use super::order::{OrderLineInput, OrderView};

pub trait MenuRepository: Send + Sync + 'static {
    /// All menu items, ordered by category then name.
    fn list(&self) -> Result<Vec<MenuItem>, DomainError>;
    fn create(&self, item: NewMenuItem) -> Result<MenuItem, DomainError>;
    fn delete(&self, id: i32) -> Result<(), DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    /// Persist an order and its lines as one atomic unit, returning the new
    /// order's id. `total` has already been computed from the lines.
    fn create(
        &self,
        customer_name: Option<String>,
        total: BigDecimal,
        lines: Vec<OrderLineInput>,
    ) -> Result<i32, DomainError>;

    /// Every order, newest first, each with its full line items.
    fn list(&self) -> Result<Vec<OrderView>, DomainError>;
}
