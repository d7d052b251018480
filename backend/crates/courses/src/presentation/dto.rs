//! API DTOs (Data Transfer Objects)

use auth::UserResponse;
use kernel::id::{CourseId, UserId};
use serde::{Deserialize, Deserializer, Serialize};

use crate::application::CourseInput;
use crate::domain::entity::CourseWithOwner;

/// Create/update course request
///
/// `userId` is not read; the owner always comes from the credentials.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub estimated_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub materials_needed: Option<Option<String>>,
}

/// Marks a field as sent, keeping `null` apart from a missing key
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<CourseRequest> for CourseInput {
    fn from(req: CourseRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            estimated_time: req.estimated_time,
            materials_needed: req.materials_needed,
        }
    }
}

/// Course with its embedded owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: UserId,
    pub user: UserResponse,
}

impl From<CourseWithOwner> for CourseResponse {
    fn from(CourseWithOwner { course, owner }: CourseWithOwner) -> Self {
        Self {
            id: course.course_id,
            title: course.title,
            description: course.description,
            estimated_time: course.estimated_time,
            materials_needed: course.materials_needed,
            user_id: course.user_id,
            user: owner.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> CourseRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_missing_null_and_value_are_distinct() {
        let req = parse(r#"{"title":"T","estimatedTime":null,"materialsNeeded":"Saw"}"#);
        assert_eq!(req.estimated_time, Some(None));
        assert_eq!(req.materials_needed, Some(Some("Saw".to_string())));

        let req = parse(r#"{"title":"T"}"#);
        assert_eq!(req.estimated_time, None);
        assert_eq!(req.materials_needed, None);
    }
}
