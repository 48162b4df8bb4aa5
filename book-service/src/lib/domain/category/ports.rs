use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::NewCategory;
use crate::domain::category::models::UpdateCategoryCommand;

/// Port for category domain service operations.
#[async_trait]
pub trait CategoryServicePort: Send + Sync + 'static {
    /// List every category.
    ///
    /// # Errors
    /// * `DatabaseError` - database operation failed
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError>;

    /// Create a category attributed to the acting identity.
    ///
    /// # Errors
    /// * `DatabaseError` - database operation failed
    async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CategoryError>;

    /// Retrieve a category by identifier.
    ///
    /// # Errors
    /// * `NotFound` - category does not exist
    /// * `DatabaseError` - database operation failed
    async fn get_category(&self, id: &CategoryId) -> Result<Category, CategoryError>;

    /// Rename an existing category; the target must exist.
    ///
    /// # Errors
    /// * `NotFound` - category does not exist
    /// * `DatabaseError` - database operation failed
    async fn update_category(
        &self,
        id: &CategoryId,
        command: UpdateCategoryCommand,
    ) -> Result<Category, CategoryError>;

    /// Delete a category.
    ///
    /// # Errors
    /// * `NotFound` - category does not exist
    /// * `StillReferenced` - books still point at the category
    /// * `DatabaseError` - database operation failed
    async fn delete_category(&self, id: &CategoryId) -> Result<(), CategoryError>;
}

/// Persistence operations for the category aggregate.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    /// Persist a new category; the store assigns the ID.
    ///
    /// # Errors
    /// * `DatabaseError` - database operation failed
    async fn create(&self, category: NewCategory) -> Result<Category, CategoryError>;

    /// Retrieve a category by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - database operation failed
    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, CategoryError>;

    /// Retrieve all categories.
    ///
    /// # Errors
    /// * `DatabaseError` - database operation failed
    async fn list_all(&self) -> Result<Vec<Category>, CategoryError>;

    /// Update an existing category row.
    ///
    /// # Errors
    /// * `NotFound` - no row with this ID
    /// * `DatabaseError` - database operation failed
    async fn update(&self, category: Category) -> Result<Category, CategoryError>;

    /// Remove a category row.
    ///
    /// # Errors
    /// * `NotFound` - no row with this ID
    /// * `StillReferenced` - the foreign key from books fired
    /// * `DatabaseError` - database operation failed
    async fn delete(&self, id: &CategoryId) -> Result<(), CategoryError>;
}
