use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::category::errors::CategoryIdError;

/// Category aggregate entity.
///
/// Books reference categories by ID; the schema's foreign key keeps a
/// referenced category from being deleted out from under them.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
}

/// Category unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    /// Parse a category ID from a path parameter.
    ///
    /// # Errors
    /// * `InvalidFormat` - string is not a valid integer ID
    pub fn from_string(s: &str) -> Result<Self, CategoryIdError> {
        s.parse::<i64>()
            .map(CategoryId)
            .map_err(|e| CategoryIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Category data before the database has assigned an ID.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

/// Command to create a category; the actor comes from the authenticated
/// request, never from client input.
#[derive(Debug)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub created_by: String,
}

/// Command to rename an existing category.
#[derive(Debug)]
pub struct UpdateCategoryCommand {
    pub name: String,
    pub modified_by: String,
}
