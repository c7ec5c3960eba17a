//! Customer domain entity

/// Hotel guest on record
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub nationality: Option<String>,
}

/// Fields for creating a customer; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub nationality: Option<String>,
}
