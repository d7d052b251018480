//! Course request input and its field rules

use kernel::validation::Validator;

use crate::domain::entity::CourseChanges;
use crate::error::{CourseError, CourseResult};

pub const TITLE_REQUIRED: &str = "please put a title.";
pub const DESCRIPTION_REQUIRED: &str = "please put a description.";

/// Course body for create and update; every field may be missing
///
/// Optional fields distinguish left out (`None`) from `null` (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct CourseInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimated_time: Option<Option<String>>,
    pub materials_needed: Option<Option<String>>,
}

impl CourseInput {
    /// Validate and convert into a course write
    pub fn into_changes(self) -> CourseResult<CourseChanges> {
        Validator::new()
            .require(self.title.as_deref(), TITLE_REQUIRED)
            .require(self.description.as_deref(), DESCRIPTION_REQUIRED)
            .finish()?;

        match (self.title, self.description) {
            (Some(title), Some(description)) => Ok(CourseChanges {
                title,
                description,
                estimated_time: self.estimated_time,
                materials_needed: self.materials_needed,
            }),
            _ => Err(CourseError::Internal(
                "validated input is missing a field".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(input: CourseInput) -> Vec<String> {
        match input.into_changes() {
            Err(CourseError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_title() {
        let input = CourseInput {
            description: Some("Learn things".to_string()),
            ..Default::default()
        };
        assert_eq!(messages(input), vec![TITLE_REQUIRED]);
    }

    #[test]
    fn test_blank_fields() {
        let input = CourseInput {
            title: Some("  ".to_string()),
            description: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(messages(input), vec![TITLE_REQUIRED, DESCRIPTION_REQUIRED]);
    }

    #[test]
    fn test_valid() {
        let changes = CourseInput {
            title: Some("Build a Chair".to_string()),
            description: Some("Woodworking basics".to_string()),
            estimated_time: Some(Some("4 hours".to_string())),
            materials_needed: None,
        }
        .into_changes()
        .unwrap();

        assert_eq!(changes.title, "Build a Chair");
        assert_eq!(changes.estimated_time, Some(Some("4 hours".to_string())));
        assert!(changes.materials_needed.is_none());
    }
}
