//! The principal on whose behalf an import runs.

use std::fmt;

/// Capabilities a caller may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Create links and link categories.
    ManageLinks,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::ManageLinks => f.write_str("manage_links"),
        }
    }
}

/// An authenticated caller.
///
/// Produced by [`crate::application::services::AuthService`] for API
/// requests, or built directly for trusted local tools.
#[derive(Debug, Clone, PartialEq)]
pub struct Caller {
    pub name: String,
    permissions: Vec<Permission>,
}

impl Caller {
    pub fn new(name: impl Into<String>, permissions: Vec<Permission>) -> Self {
        Self {
            name: name.into(),
            permissions,
        }
    }

    /// A caller holding every permission.
    pub fn administrator(name: impl Into<String>) -> Self {
        Self::new(name, vec![Permission::ManageLinks])
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_administrator_can_manage_links() {
        let caller = Caller::administrator("admin-cli");
        assert!(caller.has_permission(Permission::ManageLinks));
        assert_eq!(caller.name, "admin-cli");
    }

    #[test]
    fn test_caller_without_permissions() {
        let caller = Caller::new("read-only", vec![]);
        assert!(!caller.has_permission(Permission::ManageLinks));
    }

    #[test]
    fn test_permission_display() {
        assert_eq!(Permission::ManageLinks.to_string(), "manage_links");
    }
}
