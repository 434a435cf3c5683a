//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Carry weight of an element, and the unit bag capacities are measured in
pub type Weight = u32;

/// Hit points
pub type Health = u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_ids_are_unique() {
        let a = CharacterId::new();
        let b = CharacterId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_character_id_display_is_uuid() {
        let id = CharacterId::new();
        assert_eq!(id.to_string(), id.0.to_string());
    }
}
