//! Admin domain entity

/// Back-office staff member
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// manager, staff, ...
    pub role: Option<String>,
    pub is_active: bool,
}

/// Fields for creating an admin; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}
