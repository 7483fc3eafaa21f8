//! # Authentication and Authorization
//!
//! TaskNest does not issue tokens. An external auth service signs JWTs
//! with the shared secret; this module validates them, turns them into
//! an [`AuthContext`] carried in request extensions, and checks record
//! ownership for mutations.
//!
//! ```
//! use tasknest_shared::auth::jwt::{create_token, validate_token, Claims};
//! use uuid::Uuid;
//!
//! let secret = "a-test-secret-of-at-least-32-chars!!";
//! let claims = Claims::new(Uuid::new_v4(), "ada");
//! let token = create_token(&claims, secret).unwrap();
//!
//! let verified = validate_token(&token, secret).unwrap();
//! assert_eq!(verified.username, "ada");
//! ```

pub mod jwt;
pub mod middleware;
pub mod ownership;

pub use jwt::{create_token, validate_token, Claims, JwtError};
pub use middleware::{create_jwt_middleware, AuthContext, AuthError};
pub use ownership::{check_owner, Ownership};
