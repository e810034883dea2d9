use chrono::{DateTime, Utc};

/// A row of the `employees` table
#[derive(Debug, Default, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Employee {
    pub id: i32,
    pub full_name: String,
    pub phone: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
