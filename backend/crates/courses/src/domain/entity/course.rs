//! Course Entity

use auth::domain::entity::UserProfile;
use chrono::{DateTime, Utc};
use kernel::id::{CourseId, UserId};

/// Stored course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub course_id: CourseId,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    /// Owner; set from the authenticated identity only
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Course joined with its owner's public projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseWithOwner {
    pub course: Course,
    pub owner: UserProfile,
}

/// Course content as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseFields {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

/// Validated client write
///
/// For the optional fields, `None` means the field was left out and
/// `Some(None)` means it was sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseChanges {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<Option<String>>,
    pub materials_needed: Option<Option<String>>,
}

impl CourseChanges {
    /// Fields for a new course; left-out and `null` both store nothing
    pub fn into_fields(self) -> CourseFields {
        CourseFields {
            title: self.title,
            description: self.description,
            estimated_time: self.estimated_time.flatten(),
            materials_needed: self.materials_needed.flatten(),
        }
    }

    /// Apply an update; left-out optionals keep their stored value, `null` clears it
    pub fn merged_over(self, existing: &Course) -> CourseFields {
        CourseFields {
            title: self.title,
            description: self.description,
            estimated_time: self
                .estimated_time
                .unwrap_or_else(|| existing.estimated_time.clone()),
            materials_needed: self
                .materials_needed
                .unwrap_or_else(|| existing.materials_needed.clone()),
        }
    }
}

/// Course about to be inserted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub fields: CourseFields,
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        let now = Utc::now();
        Course {
            course_id: CourseId::from_raw(1),
            title: "Old".to_string(),
            description: "Old description".to_string(),
            estimated_time: Some("3 hours".to_string()),
            materials_needed: None,
            user_id: UserId::from_raw(7),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_ownership() {
        assert!(course().is_owned_by(UserId::from_raw(7)));
        assert!(!course().is_owned_by(UserId::from_raw(8)));
    }

    fn changes(
        estimated_time: Option<Option<&str>>,
        materials_needed: Option<Option<&str>>,
    ) -> CourseChanges {
        CourseChanges {
            title: "New".to_string(),
            description: "New description".to_string(),
            estimated_time: estimated_time.map(|v| v.map(str::to_string)),
            materials_needed: materials_needed.map(|v| v.map(str::to_string)),
        }
    }

    #[test]
    fn test_merge_keeps_omitted_optionals() {
        let merged = changes(None, Some(Some("Glue"))).merged_over(&course());
        assert_eq!(merged.title, "New");
        assert_eq!(merged.estimated_time.as_deref(), Some("3 hours"));
        assert_eq!(merged.materials_needed.as_deref(), Some("Glue"));
    }

    #[test]
    fn test_merge_null_clears_optional() {
        let merged = changes(Some(None), None).merged_over(&course());
        assert!(merged.estimated_time.is_none());
        assert!(merged.materials_needed.is_none());
    }

    #[test]
    fn test_new_fields_flatten_null() {
        let fields = changes(Some(None), Some(Some("Saw"))).into_fields();
        assert!(fields.estimated_time.is_none());
        assert_eq!(fields.materials_needed.as_deref(), Some("Saw"));
    }
}
