use bigdecimal::BigDecimal;

/// A catalog entry as stored. Items are created and deleted by admin
/// actions; there is no edit path, so no update type exists.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub category: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub category: String,
    pub image_url: Option<String>,
}
