use crate::domain::errors::DomainError;
use crate::domain::order::{order_total, OrderLineInput, OrderView};
use crate::domain::ports::OrderRepository;

pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate a submission, price it, and hand it to the store as one
    /// atomic unit. The prices are taken from the caller as-is; they are not
    /// checked against the current catalog.
    pub fn create_order(
        &self,
        customer_name: Option<String>,
        lines: Vec<OrderLineInput>,
    ) -> Result<i32, DomainError> {
        if lines.is_empty() {
            return Err(DomainError::InvalidInput(
                "order must contain at least one item".to_string(),
            ));
        }
        if let Some(bad) = lines.iter().find(|l| l.quantity < 1) {
            return Err(DomainError::InvalidInput(format!(
                "quantity must be positive for menu item {}",
                bad.menu_item_id
            )));
        }

        let total = order_total(&lines);
        self.repo.create(customer_name, total, lines)
    }

    pub fn list_orders(&self) -> Result<Vec<OrderView>, DomainError> {
        self.repo.list()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::Mutex;

    use bigdecimal::BigDecimal;

    use super::*;

    /// Records what reaches the repository so tests can assert on the
    /// computed total without a database.
    #[derive(Default)]
    struct RecordingRepo {
        created: Mutex<Vec<(Option<String>, BigDecimal, usize)>>,
        fail: bool,
    }

    impl OrderRepository for RecordingRepo {
        fn create(
            &self,
            customer_name: Option<String>,
            total: BigDecimal,
            lines: Vec<OrderLineInput>,
        ) -> Result<i32, DomainError> {
            if self.fail {
                return Err(DomainError::Internal("connection lost".to_string()));
            }
            let mut created = self.created.lock().unwrap();
            created.push((customer_name, total, lines.len()));
            Ok(created.len() as i32)
        }

        fn list(&self) -> Result<Vec<OrderView>, DomainError> {
            Ok(vec![])
        }
    }

    fn line(menu_item_id: i32, price: &str, quantity: i32) -> OrderLineInput {
        OrderLineInput {
            menu_item_id,
            quantity,
            price: BigDecimal::from_str(price).expect("valid decimal"),
        }
    }

    #[test]
    fn create_order_computes_the_exact_total() {
        let service = OrderService::new(RecordingRepo::default());

        let id = service
            .create_order(
                Some("Alice".to_string()),
                vec![line(1, "10.00", 2), line(2, "5.00", 1)],
            )
            .expect("create failed");

        assert_eq!(id, 1);
        let repo_calls = service.repo.created.lock().unwrap();
        let (name, total, count) = &repo_calls[0];
        assert_eq!(name.as_deref(), Some("Alice"));
        assert_eq!(*total, BigDecimal::from_str("25.00").unwrap());
        assert_eq!(*count, 2);
    }

    #[test]
    fn create_order_allows_absent_customer_name() {
        let service = OrderService::new(RecordingRepo::default());

        service
            .create_order(None, vec![line(1, "3.50", 1)])
            .expect("create failed");

        let repo_calls = service.repo.created.lock().unwrap();
        assert_eq!(repo_calls[0].0, None);
    }

    #[test]
    fn create_order_rejects_an_empty_submission() {
        let service = OrderService::new(RecordingRepo::default());

        let err = service
            .create_order(Some("Alice".to_string()), vec![])
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(service.repo.created.lock().unwrap().is_empty());
    }

    #[test]
    fn create_order_rejects_non_positive_quantities() {
        let service = OrderService::new(RecordingRepo::default());

        for quantity in [0, -1] {
            let err = service
                .create_order(None, vec![line(1, "10.00", quantity)])
                .unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)));
        }
        assert!(service.repo.created.lock().unwrap().is_empty());
    }

    #[test]
    fn create_order_accepts_a_zero_price() {
        // Prices are non-negative; a free item is a valid line.
        let service = OrderService::new(RecordingRepo::default());

        service
            .create_order(None, vec![line(1, "0.00", 2)])
            .expect("create failed");

        let repo_calls = service.repo.created.lock().unwrap();
        assert_eq!(repo_calls[0].1, BigDecimal::from(0));
    }

    #[test]
    fn repository_failure_propagates() {
        let service = OrderService::new(RecordingRepo {
            fail: true,
            ..RecordingRepo::default()
        });

        let err = service
            .create_order(None, vec![line(1, "10.00", 1)])
            .unwrap_err();

        assert!(matches!(err, DomainError::Internal(_)));
    }
}
