//! User Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// User Record
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub username: String,
    pub created_at: Timestamp,
}

impl UserRecord {
    /// The identity pair this user presents to the domain services.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity {
            uuid: self.uuid,
            username: self.username.clone(),
        }
    }
}

/// Authenticated caller identity, as supplied by the session layer.
///
/// The domain trusts this pair; it is never re-verified here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uuid: UserUuid,
    pub username: String,
}
