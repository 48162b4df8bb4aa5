use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::NewCategory;
use crate::domain::category::ports::CategoryRepository;

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    created_by: Option<String>,
    modified_at: Option<DateTime<Utc>>,
    modified_by: Option<String>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: CategoryId(row.id),
            name: row.name,
            created_at: row.created_at,
            created_by: row.created_by,
            modified_at: row.modified_at,
            modified_by: row.modified_by,
        }
    }
}

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create(&self, category: NewCategory) -> Result<Category, CategoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (name, created_at, created_by)
            VALUES ($1, $2, $3)
            RETURNING id, name, created_at, created_by, modified_at, modified_by
            "#,
        )
        .bind(&category.name)
        .bind(category.created_at)
        .bind(&category.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, CategoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, created_at, created_by, modified_at, modified_by
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(Category::from))
    }

    async fn list_all(&self) -> Result<Vec<Category>, CategoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, created_at, created_by, modified_at, modified_by
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn update(&self, category: Category) -> Result<Category, CategoryError> {
        let result = sqlx::query(
            r#"
            UPDATE categories
            SET name = $2, modified_at = $3, modified_by = $4
            WHERE id = $1
            "#,
        )
        .bind(category.id.0)
        .bind(&category.name)
        .bind(category.modified_at)
        .bind(&category.modified_by)
        .execute(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CategoryError::NotFound(category.id.0));
        }

        Ok(category)
    }

    async fn delete(&self, id: &CategoryId) -> Result<(), CategoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_foreign_key_violation() {
                        return CategoryError::StillReferenced(id.0);
                    }
                }
                CategoryError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(CategoryError::NotFound(id.0));
        }

        Ok(())
    }
}
