//! User Model

use serde::{Deserialize, Serialize};

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Guest,
    Staff,
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Guest
    }
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Guest => "guest",
            UserRole::Staff => "staff",
            UserRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User directory record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    /// Staff only, e.g. "housekeeping"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde() {
        assert_eq!(serde_json::to_string(&UserRole::Staff).unwrap(), "\"staff\"");
        let parsed: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, UserRole::Admin);
    }

    #[test]
    fn test_department_omitted_for_guests() {
        let user = User {
            id: "u1".to_string(),
            email: "guest@example.com".to_string(),
            name: "Alice".to_string(),
            role: UserRole::Guest,
            department: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("department").is_none());
    }
}
