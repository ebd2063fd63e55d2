//! `stockgrid-auth` — authentication/authorization boundary.
//!
//! Claims, token signing/validation, credentials and RBAC primitives. This
//! crate is intentionally decoupled from HTTP and storage.

pub mod authorize;
pub mod claims;
pub mod credentials;
pub mod jwt;
pub mod permissions;
pub mod roles;
pub mod user;

pub use authorize::{authorize, AuthzError, Principal};
pub use claims::{validate_claims, JwtClaims, TokenValidationError};
pub use credentials::{hash_password, validate_password, verify_password, CredentialError};
pub use jwt::{Hs256Jwt, JwtError, JwtValidator};
pub use permissions::Permission;
pub use roles::Role;
pub use user::{NewUser, UserAccount, UserStatus};
