use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::menu::{MenuItem, NewMenuItem};
use crate::domain::ports::MenuRepository;
use crate::schema::menu_items;

use super::models::{MenuItemRow, NewMenuItemRow};

pub struct DieselMenuRepository {
    pool: DbPool,
}

impl DieselMenuRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl MenuRepository for DieselMenuRepository {
    fn list(&self) -> Result<Vec<MenuItem>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = menu_items::table
            .select(MenuItemRow::as_select())
            .order((menu_items::category.asc(), menu_items::name.asc()))
            .load(&mut conn)?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    fn create(&self, item: NewMenuItem) -> Result<MenuItem, DomainError> {
        let mut conn = self.pool.get()?;

        let row: MenuItemRow = diesel::insert_into(menu_items::table)
            .values(&NewMenuItemRow {
                name: item.name,
                description: item.description,
                price: item.price,
                category: item.category,
                image_url: item.image_url,
            })
            .returning(MenuItemRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into())
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        // Deleting an id that no longer exists is not an error; the outcome
        // (no such row) is the same either way.
        diesel::delete(menu_items::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use super::DieselMenuRepository;
    use crate::domain::menu::NewMenuItem;
    use crate::domain::ports::MenuRepository;
    use crate::infrastructure::test_support::setup_db;

    fn item(name: &str, category: &str, price: &str) -> NewMenuItem {
        NewMenuItem {
            name: name.to_string(),
            description: Some(format!("{name} description")),
            price: BigDecimal::from_str(price).expect("valid decimal"),
            category: category.to_string(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_an_id_and_returns_the_record() {
        let (_container, pool) = setup_db().await;
        let repo = DieselMenuRepository::new(pool);

        let created = repo
            .create(item("Margherita", "pizza", "10.50"))
            .expect("create failed");

        assert!(created.id > 0);
        assert_eq!(created.name, "Margherita");
        assert_eq!(created.category, "pizza");
        assert_eq!(created.price, BigDecimal::from_str("10.50").unwrap());
        assert_eq!(
            created.description.as_deref(),
            Some("Margherita description")
        );
        assert_eq!(created.image_url, None);
    }

    #[tokio::test]
    async fn list_orders_by_category_then_name() {
        let (_container, pool) = setup_db().await;
        let repo = DieselMenuRepository::new(pool);

        repo.create(item("x", "b", "1.00")).expect("create failed");
        repo.create(item("z", "a", "1.00")).expect("create failed");
        repo.create(item("a", "a", "1.00")).expect("create failed");

        let listed = repo.list().expect("list failed");
        let keys: Vec<(&str, &str)> = listed
            .iter()
            .map(|i| (i.category.as_str(), i.name.as_str()))
            .collect();

        assert_eq!(keys, vec![("a", "a"), ("a", "z"), ("b", "x")]);
    }

    #[tokio::test]
    async fn delete_removes_the_item_from_the_listing() {
        let (_container, pool) = setup_db().await;
        let repo = DieselMenuRepository::new(pool);

        let created = repo
            .create(item("Margherita", "pizza", "10.50"))
            .expect("create failed");
        repo.delete(created.id).expect("delete failed");

        assert!(repo.list().expect("list failed").is_empty());
    }

    #[tokio::test]
    async fn delete_of_unknown_id_succeeds() {
        let (_container, pool) = setup_db().await;
        let repo = DieselMenuRepository::new(pool);

        repo.delete(424242).expect("delete should not error");
    }
}
