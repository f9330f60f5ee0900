use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

/// One submitted cart line. The price is supplied by the caller and stored
/// as the at-purchase price; it is not re-derived from the catalog.
#[derive(Debug, Clone)]
pub struct OrderLineInput {
    pub menu_item_id: i32,
    pub quantity: i32,
    pub price: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct OrderLineView {
    pub id: i32,
    /// Current name of the referenced menu item, resolved at read time.
    /// `None` once the item has been deleted from the catalog.
    pub menu_item: Option<String>,
    pub quantity: i32,
    pub price: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: i32,
    pub customer_name: Option<String>,
    pub total_amount: BigDecimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderLineView>,
}

/// Total charged for a submission: Σ price × quantity over its lines.
pub fn order_total(lines: &[OrderLineInput]) -> BigDecimal {
    lines.iter().fold(BigDecimal::from(0), |acc, line| {
        acc + &line.price * BigDecimal::from(line.quantity)
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn line(price: &str, quantity: i32) -> OrderLineInput {
        OrderLineInput {
            menu_item_id: 1,
            quantity,
            price: BigDecimal::from_str(price).expect("valid decimal"),
        }
    }

    #[test]
    fn total_of_no_lines_is_zero() {
        assert_eq!(order_total(&[]), BigDecimal::from(0));
    }

    #[test]
    fn total_multiplies_price_by_quantity() {
        let total = order_total(&[line("10.00", 2), line("5.00", 1)]);
        assert_eq!(total, BigDecimal::from_str("25.00").unwrap());
    }

    #[test]
    fn total_keeps_decimal_precision() {
        // 3 × 9.99 must be exactly 29.97, not a float approximation.
        let total = order_total(&[line("9.99", 3)]);
        assert_eq!(total, BigDecimal::from_str("29.97").unwrap());
    }
}
