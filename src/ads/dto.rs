use serde::{Deserialize, Serialize};

use crate::ads::repo::Ad;
use crate::error::ApiError;

const TITLE_MIN: usize = 3;
const TITLE_MAX: usize = 200;
const DESCRIPTION_MAX: usize = 2000;

#[derive(Debug, Deserialize)]
pub struct CreateAdRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl CreateAdRequest {
    pub fn normalize_and_validate(&mut self) -> Result<(), ApiError> {
        self.title = self.title.trim().to_string();
        self.description = self.description.trim().to_string();
        validate_title(&self.title)?;
        validate_description(&self.description)?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateAdRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateAdRequest {
    pub fn normalize_and_validate(&mut self) -> Result<(), ApiError> {
        if self.title.is_none() && self.description.is_none() {
            return Err(ApiError::validation(
                "At least one of title or description must be provided",
            ));
        }
        if let Some(title) = &mut self.title {
            *title = title.trim().to_string();
            validate_title(title)?;
        }
        if let Some(description) = &mut self.description {
            *description = description.trim().to_string();
            validate_description(description)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), ApiError> {
    // Character counts, not bytes: a multibyte title must fit the same
    // bounds the VARCHAR(200) column enforces
    let len = title.chars().count();
    if len < TITLE_MIN || len > TITLE_MAX {
        return Err(ApiError::validation_with_detail(
            "Invalid request data",
            format!("Title must be between {TITLE_MIN} and {TITLE_MAX} characters long"),
        ));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), ApiError> {
    if description.chars().count() > DESCRIPTION_MAX {
        return Err(ApiError::validation_with_detail(
            "Invalid request data",
            format!("Description must not exceed {DESCRIPTION_MAX} characters"),
        ));
    }
    Ok(())
}

/// List payload with pagination metadata.
#[derive(Debug, Serialize)]
pub struct AdListResponse {
    pub items: Vec<Ad>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
    pub pages: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_accepts_valid_payload() {
        let mut req = CreateAdRequest {
            title: "  Bike for sale  ".into(),
            description: "a valid description".into(),
        };
        req.normalize_and_validate().unwrap();
        assert_eq!(req.title, "Bike for sale");
    }

    #[test]
    fn create_allows_empty_description() {
        let mut req = CreateAdRequest {
            title: "abc".into(),
            description: String::new(),
        };
        assert!(req.normalize_and_validate().is_ok());
    }

    #[test]
    fn create_rejects_short_title() {
        let mut req = CreateAdRequest {
            title: "ab".into(),
            description: String::new(),
        };
        assert!(req.normalize_and_validate().is_err());
    }

    #[test]
    fn create_rejects_long_title() {
        let mut req = CreateAdRequest {
            title: "x".repeat(201),
            description: String::new(),
        };
        assert!(req.normalize_and_validate().is_err());
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        // 150 Cyrillic characters are 300 bytes but well within the limit
        let mut req = CreateAdRequest {
            title: "п".repeat(150),
            description: String::new(),
        };
        assert!(req.normalize_and_validate().is_ok());

        let mut req = CreateAdRequest {
            title: "п".repeat(201),
            description: String::new(),
        };
        assert!(req.normalize_and_validate().is_err());
    }

    #[test]
    fn description_length_counts_characters_not_bytes() {
        let mut req = CreateAdRequest {
            title: "abc".into(),
            description: "ж".repeat(2000),
        };
        assert!(req.normalize_and_validate().is_ok());

        let mut req = CreateAdRequest {
            title: "abc".into(),
            description: "ж".repeat(2001),
        };
        assert!(req.normalize_and_validate().is_err());
    }

    #[test]
    fn create_rejects_long_description() {
        let mut req = CreateAdRequest {
            title: "abc".into(),
            description: "x".repeat(2001),
        };
        assert!(req.normalize_and_validate().is_err());
    }

    #[test]
    fn update_requires_at_least_one_field() {
        let mut req = UpdateAdRequest {
            title: None,
            description: None,
        };
        assert!(req.normalize_and_validate().is_err());
    }

    #[test]
    fn update_accepts_single_field() {
        let mut req = UpdateAdRequest {
            title: Some("new title".into()),
            description: None,
        };
        assert!(req.normalize_and_validate().is_ok());
    }

    #[test]
    fn update_checks_provided_fields() {
        let mut req = UpdateAdRequest {
            title: Some("ab".into()),
            description: None,
        };
        assert!(req.normalize_and_validate().is_err());
    }
}
