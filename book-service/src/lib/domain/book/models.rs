use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::book::errors::BookIdError;
use crate::domain::book::errors::BookValidationError;
use crate::domain::book::errors::ParseThicknessError;
use crate::domain::category::models::CategoryId;

/// Earliest accepted release year (inclusive).
pub const RELEASE_YEAR_MIN: i32 = 1980;
/// Latest accepted release year (inclusive).
pub const RELEASE_YEAR_MAX: i32 = 2024;

/// Book aggregate entity.
#[derive(Debug, Clone)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i64,
    pub total_page: i32,
    pub thickness: Thickness,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
}

/// Book unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub i64);

impl BookId {
    /// Parse a book ID from a path parameter.
    ///
    /// # Errors
    /// * `InvalidFormat` - string is not a valid integer ID
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        s.parse::<i64>()
            .map(BookId)
            .map_err(|e| BookIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Derived page-count classification.
///
/// Always computed from `total_page` on the server; client-supplied
/// values never reach the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Thickness {
    Thick,
    Thin,
}

impl Thickness {
    /// Strictly more than 100 pages is thick; exactly 100 is still thin.
    pub fn from_total_page(total_page: i32) -> Self {
        if total_page > 100 {
            Thickness::Thick
        } else {
            Thickness::Thin
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Thickness::Thick => "thick",
            Thickness::Thin => "thin",
        }
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Thickness {
    type Err = ParseThicknessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thick" => Ok(Thickness::Thick),
            "thin" => Ok(Thickness::Thin),
            other => Err(ParseThicknessError(other.to_string())),
        }
    }
}

/// Validated field set shared by book creation and update.
///
/// Construction is the only way to obtain one, so a draft that exists has
/// passed every range check and carries a server-computed thickness.
/// The category referential check needs the repository and stays with the
/// service.
#[derive(Debug, Clone)]
pub struct BookDraft {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i64,
    pub total_page: i32,
    pub thickness: Thickness,
    pub category_id: CategoryId,
}

impl BookDraft {
    /// Validate raw book fields into a draft.
    ///
    /// # Errors
    /// * `ReleaseYearOutOfRange` - year outside [1980, 2024]
    /// * `NegativePrice` - price below zero
    /// * `NonPositivePageCount` - page count below one
    pub fn new(
        title: String,
        description: String,
        image_url: String,
        release_year: i32,
        price: i64,
        total_page: i32,
        category_id: CategoryId,
    ) -> Result<Self, BookValidationError> {
        if !(RELEASE_YEAR_MIN..=RELEASE_YEAR_MAX).contains(&release_year) {
            return Err(BookValidationError::ReleaseYearOutOfRange {
                min: RELEASE_YEAR_MIN,
                max: RELEASE_YEAR_MAX,
                actual: release_year,
            });
        }

        if price < 0 {
            return Err(BookValidationError::NegativePrice(price));
        }

        if total_page < 1 {
            return Err(BookValidationError::NonPositivePageCount(total_page));
        }

        Ok(Self {
            title,
            description,
            image_url,
            release_year,
            price,
            thickness: Thickness::from_total_page(total_page),
            total_page,
            category_id,
        })
    }
}

/// Book data before the database has assigned an ID.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub draft: BookDraft,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

/// Command to create a book; the actor comes from the authenticated
/// request, never from client input.
#[derive(Debug)]
pub struct CreateBookCommand {
    pub draft: BookDraft,
    pub created_by: String,
}

/// Command to replace every client-settable field of an existing book.
#[derive(Debug)]
pub struct UpdateBookCommand {
    pub draft: BookDraft,
    pub modified_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(release_year: i32, price: i64, total_page: i32) -> Result<BookDraft, BookValidationError> {
        BookDraft::new(
            "Dune".to_string(),
            "Desert planet epic".to_string(),
            "https://example.com/dune.jpg".to_string(),
            release_year,
            price,
            total_page,
            CategoryId(1),
        )
    }

    #[test]
    fn test_release_year_bounds_are_inclusive() {
        assert!(draft_with(1980, 100, 50).is_ok());
        assert!(draft_with(2024, 100, 50).is_ok());

        assert!(matches!(
            draft_with(1979, 100, 50),
            Err(BookValidationError::ReleaseYearOutOfRange { actual: 1979, .. })
        ));
        assert!(matches!(
            draft_with(2025, 100, 50),
            Err(BookValidationError::ReleaseYearOutOfRange { actual: 2025, .. })
        ));
    }

    #[test]
    fn test_price_must_not_be_negative() {
        assert!(draft_with(2000, 0, 50).is_ok());
        assert!(matches!(
            draft_with(2000, -1, 50),
            Err(BookValidationError::NegativePrice(-1))
        ));
    }

    #[test]
    fn test_page_count_must_be_positive() {
        assert!(draft_with(2000, 100, 1).is_ok());
        assert!(matches!(
            draft_with(2000, 100, 0),
            Err(BookValidationError::NonPositivePageCount(0))
        ));
    }

    #[test]
    fn test_thickness_boundary_is_strict() {
        assert_eq!(Thickness::from_total_page(100), Thickness::Thin);
        assert_eq!(Thickness::from_total_page(101), Thickness::Thick);

        assert_eq!(draft_with(2000, 100, 100).unwrap().thickness, Thickness::Thin);
        assert_eq!(draft_with(2000, 100, 101).unwrap().thickness, Thickness::Thick);
    }

    #[test]
    fn test_thickness_wire_format() {
        assert_eq!(
            serde_json::to_value(Thickness::Thick).unwrap(),
            serde_json::json!("thick")
        );
        assert_eq!("thin".parse::<Thickness>().unwrap(), Thickness::Thin);
        assert!("medium".parse::<Thickness>().is_err());
    }
}
