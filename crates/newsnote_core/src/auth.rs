//! Ownership gate: the single authorization decision point.
//!
//! # Responsibility
//! - Decide, for any principal/owner/intent triple, whether the operation
//!   may proceed and how a refusal must be surfaced.
//!
//! # Invariants
//! - Ownership is the only authorization axis; there is no role or admin
//!   concept anywhere in the core.
//! - A refusal for an authenticated non-owner is indistinguishable from
//!   "object does not exist" so that existence is never disclosed.
//! - An anonymous refusal is surfaced as authentication-required instead,
//!   because no object identity is at stake and the caller should be able
//!   to retry after logging in.

use crate::model::user::UserId;

/// Identity attached to a request by the external identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    Anonymous,
    User(UserId),
}

impl Principal {
    /// Returns the user id when the principal is authenticated.
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::Anonymous => None,
            Self::User(id) => Some(*id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::User(_))
    }
}

/// What the caller is trying to do with an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Listing views; the caller filters rows separately.
    ReadList,
    /// Detail view of one owned object.
    ReadDetail,
    Create,
    Update,
    Delete,
}

/// Gate decision, tagged with how a refusal must be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Refused; callers must report the object as missing.
    DeniedNotFound,
    /// Refused; callers must demand authentication and allow a retry.
    DeniedUnauthenticated,
}

/// Decides whether `principal` may apply `intent` to an object owned by
/// `owner`.
///
/// `owner` is `None` for intents that target no existing object (`Create`)
/// and for listing views.
pub fn authorize(principal: &Principal, owner: Option<UserId>, intent: Intent) -> Access {
    match intent {
        Intent::ReadList => Access::Granted,
        Intent::Create => match principal.user_id() {
            Some(_) => Access::Granted,
            None => Access::DeniedUnauthenticated,
        },
        Intent::ReadDetail | Intent::Update | Intent::Delete => match principal.user_id() {
            None => Access::DeniedUnauthenticated,
            Some(user) if owner == Some(user) => Access::Granted,
            Some(_) => Access::DeniedNotFound,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{authorize, Access, Intent, Principal};
    use uuid::Uuid;

    #[test]
    fn read_list_is_always_granted() {
        let owner = Uuid::new_v4();
        assert_eq!(
            authorize(&Principal::Anonymous, Some(owner), Intent::ReadList),
            Access::Granted
        );
        assert_eq!(
            authorize(&Principal::User(Uuid::new_v4()), None, Intent::ReadList),
            Access::Granted
        );
    }

    #[test]
    fn owner_passes_detail_update_delete() {
        let owner = Uuid::new_v4();
        for intent in [Intent::ReadDetail, Intent::Update, Intent::Delete] {
            assert_eq!(
                authorize(&Principal::User(owner), Some(owner), intent),
                Access::Granted
            );
        }
    }

    #[test]
    fn non_owner_is_denied_as_not_found() {
        let owner = Uuid::new_v4();
        let stranger = Principal::User(Uuid::new_v4());
        for intent in [Intent::ReadDetail, Intent::Update, Intent::Delete] {
            assert_eq!(
                authorize(&stranger, Some(owner), intent),
                Access::DeniedNotFound
            );
        }
    }

    #[test]
    fn anonymous_is_denied_as_unauthenticated() {
        let owner = Uuid::new_v4();
        for intent in [
            Intent::ReadDetail,
            Intent::Update,
            Intent::Delete,
            Intent::Create,
        ] {
            assert_eq!(
                authorize(&Principal::Anonymous, Some(owner), intent),
                Access::DeniedUnauthenticated
            );
        }
    }

    #[test]
    fn any_authenticated_user_may_create() {
        assert_eq!(
            authorize(&Principal::User(Uuid::new_v4()), None, Intent::Create),
            Access::Granted
        );
    }
}
