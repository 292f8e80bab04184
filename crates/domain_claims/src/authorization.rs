//! Roles and capability checks
//!
//! Authorization is a pure membership check over the caller's roles,
//! independent of how the principal was authenticated. The HTTP layer
//! builds a [`Principal`] from the verified token; the service enforces
//! the required role set before running any operation.

use serde::{Deserialize, Serialize};

use core_kernel::LecturerId;

/// Roles recognised by the claim workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Lecturer,
    Coordinator,
    Manager,
    Hr,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Lecturer => "Lecturer",
            Role::Coordinator => "Coordinator",
            Role::Manager => "Manager",
            Role::Hr => "HR",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "Co-ordinator" appears in older role assignments
        match s {
            "Lecturer" => Ok(Role::Lecturer),
            "Coordinator" | "Co-ordinator" => Ok(Role::Coordinator),
            "Manager" => Ok(Role::Manager),
            "HR" | "Hr" => Ok(Role::Hr),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Roles allowed to approve, reject, or delete claims
pub const DECIDER_ROLES: &[Role] = &[Role::Coordinator, Role::Manager];

/// Roles allowed to view every claim in the system
pub const VIEW_ALL_ROLES: &[Role] = &[Role::Hr, Role::Manager, Role::Coordinator];

/// The authenticated identity making a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Stable identifier; for lecturers this is the id stamped on their claims
    pub id: LecturerId,
    /// Display name
    pub name: String,
    /// Role memberships
    pub roles: Vec<Role>,
}

impl Principal {
    pub fn new(id: LecturerId, name: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            id,
            name: name.into(),
            roles,
        }
    }

    /// True if the principal holds any of the required roles
    pub fn has_any_role(&self, required: &[Role]) -> bool {
        self.roles.iter().any(|r| required.contains(r))
    }

    pub fn is_lecturer(&self) -> bool {
        self.has_any_role(&[Role::Lecturer])
    }

    pub fn can_decide(&self) -> bool {
        self.has_any_role(DECIDER_ROLES)
    }

    pub fn can_view_all(&self) -> bool {
        self.has_any_role(VIEW_ALL_ROLES)
    }
}
