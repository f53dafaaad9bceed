//! Request validation
//!
//! `ValidatedJson<T>` works like `axum::Json<T>`, but additionally runs
//! `validator::Validate::validate()` on the deserialized value. A payload
//! that fails is answered with a per-field error map and never reaches the
//! handler.

use std::borrow::Cow;
use std::collections::BTreeMap;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::api::errors::ApiError;
use crate::services::TeamView;

/// An extractor that deserializes JSON and validates it.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;

        value.validate().map_err(|errors| {
            let errors = field_messages(&errors);
            tracing::warn!(?errors, "Request body failed validation");
            ApiError::Validation(errors)
        })?;

        Ok(ValidatedJson(value))
    }
}

/// Flattens validation errors to one message per field
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

impl Validate for TeamView {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.add("name", error("not_blank", "Team name is required"));
        }

        if self.acronym.trim().is_empty() {
            errors.add("acronym", error("not_blank", "Acronym is required"));
        }

        match self.budget {
            None => errors.add("budget", error("required", "Budget is required")),
            Some(budget) if budget < Decimal::ZERO => {
                errors.add("budget", error("min", "Budget must be a positive value"))
            }
            Some(_) => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> TeamView {
        TeamView {
            id: None,
            name: "OGC Nice".to_string(),
            acronym: "OGCN".to_string(),
            budget: Some(Decimal::from(10_000_000)),
            players: None,
        }
    }

    fn messages(view: &TeamView) -> BTreeMap<String, String> {
        field_messages(&view.validate().unwrap_err())
    }

    #[test]
    fn valid_team_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn zero_budget_is_allowed() {
        let view = TeamView {
            budget: Some(Decimal::ZERO),
            ..valid()
        };
        assert!(view.validate().is_ok());
    }

    #[test]
    fn blank_name_and_missing_budget_are_both_reported() {
        let view = TeamView {
            name: "   ".to_string(),
            budget: None,
            ..valid()
        };

        let expected = BTreeMap::from([
            ("budget".to_string(), "Budget is required".to_string()),
            ("name".to_string(), "Team name is required".to_string()),
        ]);
        assert_eq!(messages(&view), expected);
    }

    #[test]
    fn negative_budget_is_rejected() {
        let view = TeamView {
            budget: Some(Decimal::from(-5000)),
            ..valid()
        };

        assert_eq!(
            messages(&view).get("budget").map(String::as_str),
            Some("Budget must be a positive value")
        );
    }

    #[test]
    fn blank_acronym_is_rejected() {
        let view = TeamView {
            acronym: String::new(),
            ..valid()
        };

        assert_eq!(
            messages(&view).get("acronym").map(String::as_str),
            Some("Acronym is required")
        );
    }
}
