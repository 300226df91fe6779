use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A class, identified by its batch number.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Class {
    pub batch: i64,
    pub class_name: String,
    /// `faculty.id` of the instructor, if one is assigned.
    pub instructor_id: Option<i64>,
}

/// A class as offered in a selection list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ClassOption {
    pub value: i64,
    pub label: String,
}

impl From<Class> for ClassOption {
    fn from(class: Class) -> Self {
        Self {
            value: class.batch,
            label: class.class_name,
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct CreateClassDto {
    #[validate(range(min = 1))]
    pub batch: i64,
    #[validate(length(min = 1, max = 100))]
    pub class_name: String,
    pub instructor_id: Option<i64>,
}

/// The public subjects view.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubjectsPage {
    pub class_options: Vec<ClassOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_option_from_class() {
        let option = ClassOption::from(Class {
            batch: 2024,
            class_name: "Physics".to_string(),
            instructor_id: Some(1),
        });

        assert_eq!(option.value, 2024);
        assert_eq!(option.label, "Physics");
    }
}
