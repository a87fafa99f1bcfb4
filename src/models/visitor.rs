//! Visitor check-in model

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{Beach, SortOrder};

/// A recorded beach check-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Visitor {
    pub id: String,
    pub name: String,
    /// Origin city
    pub city: String,
    pub beach: Beach,
    /// Visit date (YYYY-MM-DD)
    pub date: String,
}

/// Fields of a visitor before the store assigns an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisitor {
    pub name: String,
    pub city: String,
    pub beach: Beach,
    pub date: String,
}

impl Visitor {
    pub fn with_id(id: impl Into<String>, data: NewVisitor) -> Self {
        Self {
            id: id.into(),
            name: data.name,
            city: data.city,
            beach: data.beach,
            date: data.date,
        }
    }
}

/// Add visitor request (the check-in form)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateVisitor {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(required(message = "Beach must be selected"))]
    pub beach: Option<Beach>,
    /// Visit date (YYYY-MM-DD), defaults to today
    pub date: Option<String>,
}

impl CreateVisitor {
    /// Trim free-text fields so whitespace-only input counts as empty
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            beach: self.beach,
            date: self.date.map(|d| d.trim().to_string()),
        }
    }
}

/// Query parameters for the visitor list
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct VisitorQuery {
    /// Beach name, or `all`
    pub beach: Option<String>,
    /// Case-insensitive name substring
    pub search: Option<String>,
    /// `newest` (default) or `oldest`
    #[param(value_type = Option<SortOrder>)]
    #[schema(value_type = Option<SortOrder>)]
    pub sort: Option<String>,
}
