use crate::domain::errors::DomainError;
use crate::domain::menu::{MenuItem, NewMenuItem};
use crate::domain::ports::MenuRepository;

/// Catalog management. No validation happens here beyond what the storage
/// layer enforces; the admin UI is the only gate on field contents.
pub struct MenuService<R> {
    repo: R,
}

impl<R: MenuRepository> MenuService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_items(&self) -> Result<Vec<MenuItem>, DomainError> {
        self.repo.list()
    }

    pub fn create_item(&self, item: NewMenuItem) -> Result<MenuItem, DomainError> {
        self.repo.create(item)
    }

    pub fn delete_item(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id)
    }
}
