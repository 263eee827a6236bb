//! Employee model and related identity types.
//!
//! This module defines the Employee profile, the Role enum, and the
//! CurrentUser context passed explicitly to authorization-gated operations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the role assigned to a user of the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access, including employee management.
    Admin,
    /// Can record attendance and view reports for all employees.
    Manager,
    /// Can view their own attendance and fuel records only.
    Employee,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Manager => write!(f, "manager"),
            Role::Employee => write!(f, "employee"),
        }
    }
}

/// The identity and role of the user performing an operation.
///
/// Passed explicitly to any operation that is authorization-gated, rather
/// than pulled from ambient session state.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{CurrentUser, Role};
/// use uuid::Uuid;
///
/// let user = CurrentUser {
///     id: Uuid::new_v4(),
///     role: Role::Manager,
/// };
/// assert_eq!(user.role, Role::Manager);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// The user's internal identifier.
    pub id: Uuid,
    /// The user's role.
    pub role: Role,
}

/// Represents an employee profile.
///
/// Profiles are owned by the persistence layer; the engine reads them to
/// resolve identities and display names. Deactivation is soft: the profile
/// remains with `active` set to false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// The employee's email address, unique across profiles.
    pub email: String,
    /// The employee's display name.
    pub full_name: String,
    /// The role assigned to the employee.
    pub role: Role,
    /// Whether the profile is active. Deactivated profiles are retained.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee() -> Employee {
        Employee {
            id: Uuid::new_v4(),
            email: "jane@company.com".to_string(),
            full_name: "Jane Doe".to_string(),
            role: Role::Employee,
            active: true,
        }
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&Role::Manager).unwrap(),
            "\"manager\""
        );
        assert_eq!(
            serde_json::to_string(&Role::Employee).unwrap(),
            "\"employee\""
        );
    }

    #[test]
    fn test_role_display() {
        assert_eq!(format!("{}", Role::Admin), "admin");
        assert_eq!(format!("{}", Role::Manager), "manager");
        assert_eq!(format!("{}", Role::Employee), "employee");
    }

    #[test]
    fn test_deserialize_employee_defaults_to_active() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "email": "jane@company.com",
            "full_name": "Jane Doe",
            "role": "employee"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.active);
        assert_eq!(employee.email, "jane@company.com");
        assert_eq!(employee.role, Role::Employee);
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = create_test_employee();
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_deactivated_employee_round_trip() {
        let mut employee = create_test_employee();
        employee.active = false;

        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert!(!deserialized.active);
    }
}
