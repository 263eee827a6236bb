//! Privileged employee management operations.
//!
//! These operations model the backend's admin-only mutations: creating a
//! profile and soft-deactivating one. Both validate the requester's role
//! before touching any data, so callers can run them against any
//! [`crate::store::EmployeeDirectory`]-backed persistence layer.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::csv::is_valid_email;
use crate::error::{EngineError, EngineResult};
use crate::models::{CurrentUser, Employee, Role};

/// A validated request to create an employee profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Login email, unique within the directory.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Role assigned to the new profile.
    pub role: Role,
}

/// Checks that the requester holds the admin role.
fn require_admin(requester: &CurrentUser, action: &str) -> EngineResult<()> {
    if requester.role != Role::Admin {
        return Err(EngineError::Unauthorized {
            role: requester.role.to_string(),
            action: action.to_string(),
        });
    }
    Ok(())
}

/// Builds a new active employee profile from an admin's request.
///
/// Only admins may create profiles. The email must be syntactically valid
/// and the display name non-empty; both are rejected before any id is
/// allocated.
///
/// # Example
///
/// ```
/// use attendance_engine::admin::{CreateEmployeeRequest, create_employee};
/// use attendance_engine::models::{CurrentUser, Role};
/// use uuid::Uuid;
///
/// let admin = CurrentUser { id: Uuid::new_v4(), role: Role::Admin };
/// let employee = create_employee(&admin, CreateEmployeeRequest {
///     email: "jane@company.com".to_string(),
///     full_name: "Jane Doe".to_string(),
///     role: Role::Employee,
/// }).unwrap();
///
/// assert!(employee.active);
/// ```
pub fn create_employee(
    requester: &CurrentUser,
    request: CreateEmployeeRequest,
) -> EngineResult<Employee> {
    require_admin(requester, "create_employee")?;

    let email = request.email.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(EngineError::InvalidEmail {
            value: request.email,
        });
    }

    let full_name = request.full_name.trim().to_string();
    if full_name.is_empty() {
        return Err(EngineError::MissingField {
            field: "full_name".to_string(),
        });
    }

    let employee = Employee {
        id: Uuid::new_v4(),
        email,
        full_name,
        role: request.role,
        active: true,
    };

    info!(
        employee_id = %employee.id,
        email = %employee.email,
        role = %employee.role,
        "Created employee profile"
    );

    Ok(employee)
}

/// Soft-deactivates an employee profile.
///
/// Only admins may deactivate, and an admin cannot deactivate their own
/// profile. The profile is returned with `active` cleared rather than
/// removed, so historical attendance and fuel rows keep resolving to a
/// name.
pub fn deactivate_employee(
    requester: &CurrentUser,
    mut profile: Employee,
) -> EngineResult<Employee> {
    require_admin(requester, "deactivate_employee")?;

    if profile.id == requester.id {
        return Err(EngineError::Unauthorized {
            role: requester.role.to_string(),
            action: "deactivate own profile".to_string(),
        });
    }

    profile.active = false;

    info!(employee_id = %profile.id, "Deactivated employee profile");

    Ok(profile)
}
