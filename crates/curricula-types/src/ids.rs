//! Identifier newtypes

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id! {
    /// Unique identifier for a course document
    CourseId
}

string_id! {
    /// Unique identifier for a comment
    CommentId
}

string_id! {
    /// Unique identifier for an actor (faculty, chair, officer, admin)
    ActorId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(CourseId::generate(), CourseId::generate());
    }

    #[test]
    fn test_display_round_trip() {
        let id = CourseId::new("MATH-101");
        assert_eq!(format!("{}", id), "MATH-101");
        assert_eq!(id.as_str(), "MATH-101");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let id = CommentId::new("c-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"c-1\"");
    }
}
