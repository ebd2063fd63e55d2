//! API-side authorization guard.
//!
//! Enforces permissions at the handler boundary, keeping services and domain
//! code auth-agnostic.

use stockgrid_auth::{authorize, AuthzError, Permission, Principal, Role};

use crate::context::PrincipalContext;

/// Check that the request's principal holds a permission.
///
/// Intended to be called at the top of a handler, before touching services.
pub fn require(principal: &PrincipalContext, permission: &'static str) -> Result<(), AuthzError> {
    let resolved = Principal {
        user_id: principal.user_id(),
        roles: principal.roles().to_vec(),
        permissions: permissions_from_roles(principal.roles()),
    };

    authorize(&resolved, &Permission::new(permission))
}

/// Static role→permission policy.
///
/// - `admin`: everything.
/// - `planner`: read everything, write supply/demand/thresholds.
/// - `viewer`: read everything.
fn permissions_from_roles(roles: &[Role]) -> Vec<Permission> {
    const READS: [&str; 8] = [
        "items.read",
        "locations.read",
        "supply.read",
        "demand.read",
        "availability.read",
        "thresholds.read",
        "dashboard.read",
        "users.read",
    ];

    let mut permissions = Vec::new();
    for role in roles {
        match role.as_str() {
            "admin" => return vec![Permission::new("*")],
            "planner" => {
                permissions.extend(READS.iter().map(|p| Permission::new(*p)));
                permissions.extend(
                    ["supply.write", "demand.write", "thresholds.write"]
                        .iter()
                        .map(|p| Permission::new(*p)),
                );
            }
            "viewer" => permissions.extend(READS.iter().map(|p| Permission::new(*p))),
            _ => {}
        }
    }
    permissions
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockgrid_core::UserId;

    fn ctx(role: &'static str) -> PrincipalContext {
        PrincipalContext::new(UserId::new(), vec![Role::new(role)])
    }

    #[test]
    fn admin_can_do_everything() {
        assert!(require(&ctx("admin"), "items.write").is_ok());
        assert!(require(&ctx("admin"), "dashboard.read").is_ok());
    }

    #[test]
    fn planner_writes_supply_but_not_items() {
        assert!(require(&ctx("planner"), "supply.write").is_ok());
        assert!(require(&ctx("planner"), "items.read").is_ok());
        assert!(require(&ctx("planner"), "items.write").is_err());
    }

    #[test]
    fn viewer_is_read_only() {
        assert!(require(&ctx("viewer"), "availability.read").is_ok());
        assert!(require(&ctx("viewer"), "demand.write").is_err());
    }

    #[test]
    fn unknown_role_has_no_permissions() {
        assert!(require(&ctx("intern"), "items.read").is_err());
    }
}
