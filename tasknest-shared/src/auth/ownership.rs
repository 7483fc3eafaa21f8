//! # Ownership Checks
//!
//! A task may only be updated or deleted by its owner. The check is a
//! pure comparison between the record's owner and the acting principal,
//! and it returns an explicit decision so callers have to handle both
//! outcomes.

use uuid::Uuid;

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Allowed,
    Forbidden,
}

/// Compares a record's owner against the acting principal.
///
/// ```
/// use tasknest_shared::auth::ownership::{check_owner, Ownership};
/// use uuid::Uuid;
///
/// let owner = Uuid::new_v4();
/// assert_eq!(check_owner(owner, owner), Ownership::Allowed);
/// assert_eq!(check_owner(owner, Uuid::new_v4()), Ownership::Forbidden);
/// ```
pub fn check_owner(owner_id: Uuid, acting_user_id: Uuid) -> Ownership {
    if owner_id == acting_user_id {
        Ownership::Allowed
    } else {
        Ownership::Forbidden
    }
}
