use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::NewCategory;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::domain::category::ports::CategoryRepository;
use crate::domain::category::ports::CategoryServicePort;

/// Domain service implementation for category operations.
///
/// Categories carry no business rule beyond actor attribution; the
/// interesting invariants live on the book side.
pub struct CategoryService<CR>
where
    CR: CategoryRepository,
{
    repository: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CategoryServicePort for CategoryService<CR>
where
    CR: CategoryRepository,
{
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        self.repository.list_all().await
    }

    async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CategoryError> {
        let category = NewCategory {
            name: command.name,
            created_at: Utc::now(),
            created_by: Some(command.created_by),
        };

        self.repository.create(category).await
    }

    async fn get_category(&self, id: &CategoryId) -> Result<Category, CategoryError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id.0))
    }

    async fn update_category(
        &self,
        id: &CategoryId,
        command: UpdateCategoryCommand,
    ) -> Result<Category, CategoryError> {
        let mut category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id.0))?;

        category.name = command.name;
        category.modified_at = Some(Utc::now());
        category.modified_by = Some(command.modified_by);

        self.repository.update(category).await
    }

    async fn delete_category(&self, id: &CategoryId) -> Result<(), CategoryError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestCategoryRepository {}

        #[async_trait]
        impl CategoryRepository for TestCategoryRepository {
            async fn create(&self, category: NewCategory) -> Result<Category, CategoryError>;
            async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, CategoryError>;
            async fn list_all(&self) -> Result<Vec<Category>, CategoryError>;
            async fn update(&self, category: Category) -> Result<Category, CategoryError>;
            async fn delete(&self, id: &CategoryId) -> Result<(), CategoryError>;
        }
    }

    fn fiction(id: i64) -> Category {
        Category {
            id: CategoryId(id),
            name: "Fiction".to_string(),
            created_at: Utc::now(),
            created_by: Some("alice".to_string()),
            modified_at: None,
            modified_by: None,
        }
    }

    #[tokio::test]
    async fn test_create_category_attributes_actor() {
        let mut repository = MockTestCategoryRepository::new();

        repository
            .expect_create()
            .withf(|category| {
                category.name == "Fiction" && category.created_by.as_deref() == Some("alice")
            })
            .times(1)
            .returning(|category| {
                Ok(Category {
                    id: CategoryId(1),
                    name: category.name,
                    created_at: category.created_at,
                    created_by: category.created_by,
                    modified_at: None,
                    modified_by: None,
                })
            });

        let service = CategoryService::new(Arc::new(repository));

        let command = CreateCategoryCommand {
            name: "Fiction".to_string(),
            created_by: "alice".to_string(),
        };

        let category = service.create_category(command).await.unwrap();
        assert_eq!(category.created_by.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_update_category_not_found() {
        let mut repository = MockTestCategoryRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = CategoryService::new(Arc::new(repository));

        let command = UpdateCategoryCommand {
            name: "Renamed".to_string(),
            modified_by: "alice".to_string(),
        };

        let result = service.update_category(&CategoryId(7), command).await;
        assert!(matches!(result.unwrap_err(), CategoryError::NotFound(7)));
    }

    #[tokio::test]
    async fn test_update_category_sets_modification_audit() {
        let mut repository = MockTestCategoryRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(fiction(id.0))));
        repository
            .expect_update()
            .withf(|category| {
                category.name == "Renamed"
                    && category.modified_at.is_some()
                    && category.modified_by.as_deref() == Some("bob")
            })
            .times(1)
            .returning(|category| Ok(category));

        let service = CategoryService::new(Arc::new(repository));

        let command = UpdateCategoryCommand {
            name: "Renamed".to_string(),
            modified_by: "bob".to_string(),
        };

        let category = service.update_category(&CategoryId(1), command).await.unwrap();
        assert_eq!(category.name, "Renamed");
    }

    #[tokio::test]
    async fn test_delete_category_still_referenced() {
        let mut repository = MockTestCategoryRepository::new();

        repository
            .expect_delete()
            .times(1)
            .returning(|id| Err(CategoryError::StillReferenced(id.0)));

        let service = CategoryService::new(Arc::new(repository));

        let result = service.delete_category(&CategoryId(3)).await;
        assert!(matches!(
            result.unwrap_err(),
            CategoryError::StillReferenced(3)
        ));
    }
}
