//! Visitors service

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use validator::Validate;

use super::{filter_selection::Selection, visitor_query::query_visitors};
use crate::{
    error::{AppError, AppResult},
    models::visitor::{CreateVisitor, NewVisitor, Visitor},
    repository::Repository,
    seed::SEED_VISITORS,
};

static VISIT_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date pattern"));

/// Check a `YYYY-MM-DD` visit date: zero-padded and a real calendar day
pub fn validate_visit_date(date: &str) -> AppResult<()> {
    if !VISIT_DATE.is_match(date) || NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(AppError::Validation(format!(
            "Invalid visit date '{}', expected YYYY-MM-DD",
            date
        )));
    }
    Ok(())
}

#[derive(Clone)]
pub struct VisitorsService {
    repository: Repository,
}

impl VisitorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Visible list for a committed selection and a name search
    pub async fn query(&self, selection: Selection, search: &str) -> Vec<Visitor> {
        tracing::debug!(
            "Visitor query - beach: {}, search: {:?}, sort: {}",
            selection.beach_filter,
            search,
            selection.sort_order
        );
        let added = self.repository.visitors.list().await;
        query_visitors(
            &added,
            &SEED_VISITORS,
            selection.beach_filter,
            search,
            selection.sort_order,
        )
    }

    /// Visitors recorded in this process, newest first
    pub async fn list_added(&self) -> Vec<Visitor> {
        self.repository.visitors.list().await
    }

    /// Validate the check-in form and record it
    pub async fn create(&self, data: CreateVisitor) -> AppResult<Visitor> {
        let data = data.trimmed();
        data.validate()?;

        let date = match data.date.filter(|d| !d.is_empty()) {
            Some(date) => date,
            None => Local::now().date_naive().format("%Y-%m-%d").to_string(),
        };
        validate_visit_date(&date)?;

        let beach = data
            .beach
            .ok_or_else(|| AppError::Validation("Beach must be selected".to_string()))?;

        Ok(self
            .repository
            .visitors
            .add(NewVisitor {
                name: data.name,
                city: data.city,
                beach,
                date,
            })
            .await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{Beach, BeachFilter, SortOrder};
    use tokio_test::assert_err;

    fn form(name: &str, city: &str, beach: Option<Beach>, date: Option<&str>) -> CreateVisitor {
        CreateVisitor {
            name: name.to_string(),
            city: city.to_string(),
            beach,
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn test_visit_date_format() {
        assert!(validate_visit_date("2025-12-10").is_ok());
        assert!(validate_visit_date("2025-2-1").is_err());
        assert!(validate_visit_date("2025-02-30").is_err());
        assert!(validate_visit_date("10/12/2025").is_err());
    }

    #[tokio::test]
    async fn test_create_then_query_newest_first() {
        let service = VisitorsService::new(Repository::in_memory());
        service
            .create(form("Zed", "Solo", Some(Beach::Samas), Some("2025-12-10")))
            .await
            .unwrap();

        let result = service.query(Selection::default(), "").await;
        assert_eq!(result[0].name, "Zed");
        assert_eq!(result.len(), SEED_VISITORS.len() + 1);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_fields() {
        let service = VisitorsService::new(Repository::in_memory());
        assert_err!(service.create(form("   ", "Solo", Some(Beach::Samas), None)).await);
        assert_err!(service.create(form("Zed", "Solo", None, None)).await);
        assert_err!(service.create(form("Zed", "Solo", Some(Beach::Samas), Some("soon"))).await);
        assert!(service.list_added().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_defaults_date_to_today() {
        let service = VisitorsService::new(Repository::in_memory());
        let visitor = service
            .create(form(" Ayu ", "Bantul", Some(Beach::Depok), None))
            .await
            .unwrap();
        assert_eq!(visitor.name, "Ayu");
        assert_eq!(visitor.date, Local::now().date_naive().format("%Y-%m-%d").to_string());
    }

    #[tokio::test]
    async fn test_query_uses_selection() {
        let service = VisitorsService::new(Repository::in_memory());
        let selection = Selection {
            sort_order: SortOrder::Oldest,
            beach_filter: BeachFilter::Only(Beach::Kuwaru),
        };
        let result = service.query(selection, "").await;
        let ids: Vec<_> = result.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["m20", "m9"]);
    }
}
