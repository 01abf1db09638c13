use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id as a string (DOM ids, select values)
    fn as_string(&self) -> String;

    /// Parse the id back from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s).map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_string_round_trip() {
        let id = uuid::Uuid::new_v4();
        let parsed = uuid::Uuid::from_string(&id.as_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_invalid_id_is_rejected() {
        assert!(uuid::Uuid::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_fresh_ids_are_distinct() {
        assert_ne!(uuid::Uuid::new_v4(), uuid::Uuid::new_v4());
    }
}
