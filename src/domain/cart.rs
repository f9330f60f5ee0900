use bigdecimal::BigDecimal;

use super::errors::DomainError;
use super::menu::MenuItem;
use super::order::OrderLineInput;

/// One selected item in a cart, keyed by `item_id` (unique per cart).
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item_id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

impl CartLine {
    /// A line for a single unit of a catalog item.
    pub fn from_item(item: &MenuItem) -> Self {
        CartLine {
            item_id: item.id,
            name: item.name.clone(),
            price: item.price.clone(),
            quantity: 1,
        }
    }
}

/// The customer's in-memory cart: an ordered list of lines, one per menu
/// item, owned by a single session. Nothing here touches the network or
/// survives the session; checkout converts the lines into an order
/// submission and `clear` resets the cart once that submission succeeds.
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a line to the cart. If a line for the same item already exists,
    /// its quantity grows by the added amount; otherwise the line is
    /// appended as-is.
    pub fn add_item(&mut self, line: CartLine) {
        match self.lines.iter_mut().find(|l| l.item_id == line.item_id) {
            Some(existing) => existing.quantity += line.quantity,
            None => self.lines.push(line),
        }
    }

    /// Drop the line for `item_id` entirely, regardless of its quantity.
    pub fn remove_item(&mut self, item_id: i32) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// Set the quantity of an existing line. Quantities below 1 are
    /// rejected; removal goes through [`Cart::remove_item`]. Unknown ids are
    /// ignored.
    pub fn update_quantity(&mut self, item_id: i32, quantity: i32) -> Result<(), DomainError> {
        if quantity < 1 {
            return Err(DomainError::InvalidInput(format!(
                "quantity must be at least 1, got {quantity}"
            )));
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            line.quantity = quantity;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Σ price × quantity over all current lines.
    pub fn total(&self) -> BigDecimal {
        self.lines.iter().fold(BigDecimal::from(0), |acc, line| {
            acc + &line.price * BigDecimal::from(line.quantity)
        })
    }

    /// The submission this cart represents at checkout.
    pub fn order_lines(&self) -> Vec<OrderLineInput> {
        self.lines
            .iter()
            .map(|l| OrderLineInput {
                menu_item_id: l.item_id,
                quantity: l.quantity,
                price: l.price.clone(),
            })
            .collect()
    }
}
