//! User record types for the registry.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a user record.
///
/// The wire values are the Portuguese strings the registry has always
/// stored and printed, so serialization and display both use them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum UserStatus {
    #[default]
    #[serde(rename = "ativo")]
    Active,
    #[serde(rename = "inativo")]
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ativo",
            UserStatus::Inactive => "inativo",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One registered person.
///
/// All fields except `status` are immutable after creation; `status` is
/// only ever changed by the store's deactivation path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: u32,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub status: UserStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(UserStatus::Active.as_str(), "ativo");
        assert_eq!(UserStatus::Inactive.as_str(), "inativo");
        assert_eq!(
            serde_json::to_string(&UserStatus::Active).unwrap(),
            "\"ativo\""
        );
        assert_eq!(
            serde_json::to_string(&UserStatus::Inactive).unwrap(),
            "\"inativo\""
        );
    }

    #[test]
    fn test_status_defaults_to_active() {
        assert_eq!(UserStatus::default(), UserStatus::Active);
    }

    #[test]
    fn test_user_json_shape() {
        let user = User {
            id: 1,
            name: "Fulano de Tal".to_string(),
            email: "fulano@teste.com".to_string(),
            age: 25,
            is_admin: false,
            status: UserStatus::Active,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Fulano de Tal");
        assert_eq!(value["status"], "ativo");
    }
}
