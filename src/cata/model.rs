use crate::error::{CataError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_RATING: f32 = 1.0;
pub const MAX_RATING: f32 = 5.0;

/// One coffee-tasting log entry.
///
/// Field names serialize in camelCase so the persisted JSON matches the
/// schema this journal has always used (`isFavorite`, `imageUrl`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coffee {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub roaster: String,
    pub year: i32,
    pub rating: f32,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_favorite: bool,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<String>,
}

impl Coffee {
    /// Build a brand-new record from a validated draft.
    /// Assigns a fresh id and the current timestamp; favorites start off.
    pub fn new(draft: CoffeeDraft, ai_insights: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            origin: draft.origin,
            roaster: draft.roaster,
            year: draft.year,
            rating: draft.rating,
            notes: draft.notes,
            recipe: draft.recipe,
            image_url: draft.image_url,
            is_favorite: false,
            date: Utc::now(),
            ai_insights,
        }
    }
}

/// The user-editable fields of a record, as submitted by a form or the CLI.
/// Never carries id/date/favorite state; those belong to the journal.
#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeDraft {
    pub name: String,
    pub origin: String,
    pub roaster: String,
    pub year: i32,
    pub rating: f32,
    pub notes: String,
    pub recipe: Option<String>,
    pub image_url: Option<String>,
}

impl CoffeeDraft {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("origin", &self.origin),
            ("roaster", &self.roaster),
            ("notes", &self.notes),
        ] {
            if value.trim().is_empty() {
                return Err(CataError::Validation(format!(
                    "Field '{}' must not be empty",
                    field
                )));
            }
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(CataError::Validation(format!(
                "Rating must be between {} and {} (got {})",
                MIN_RATING, MAX_RATING, self.rating
            )));
        }
        Ok(())
    }
}

impl From<&Coffee> for CoffeeDraft {
    fn from(coffee: &Coffee) -> Self {
        Self {
            name: coffee.name.clone(),
            origin: coffee.origin.clone(),
            roaster: coffee.roaster.clone(),
            year: coffee.year,
            rating: coffee.rating,
            notes: coffee.notes.clone(),
            recipe: coffee.recipe.clone(),
            image_url: coffee.image_url.clone(),
        }
    }
}
