//! Profile record and view types.

use soroban_sdk::{contracttype, Address, String};

/// Stored per-token profile record.
///
/// This is the durable form written to storage. The avatar field holds the
/// raw value supplied by the owner; profiles that opted into the registry
/// default at mint time keep it empty and resolve against the current
/// default when read (see [`ProfileView`]).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    /// Token id, assigned monotonically starting at 1, never reused.
    pub token_id: u64,

    /// Address currently holding the token. One active profile per owner.
    pub owner: Address,

    /// Free-form display name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Raw avatar content reference. Empty while the profile tracks the
    /// registry default, or when the owner supplied no avatar.
    pub avatar_cid: String,

    /// Caller-supplied metadata pointer.
    pub token_uri: String,

    /// Recorded at mint; never rewritten afterwards.
    pub use_default_avatar: bool,
}

impl Profile {
    /// True when the displayed avatar should come from the registry default.
    ///
    /// An explicit non-empty avatar set later by the owner overrides the
    /// default; clearing it again resumes tracking, since the mint-time flag
    /// is permanent.
    pub fn tracks_default_avatar(&self) -> bool {
        self.use_default_avatar && self.avatar_cid.len() == 0
    }

    /// Convert into the caller-facing view, with the avatar already resolved.
    pub fn into_view(self, avatar_cid: String) -> ProfileView {
        ProfileView {
            token_id: self.token_id,
            owner: self.owner,
            name: self.name,
            description: self.description,
            avatar_cid,
            token_uri: self.token_uri,
        }
    }
}

/// Caller-facing projection of a [`Profile`].
///
/// `avatar_cid` here is the resolved value: the current registry default for
/// profiles tracking it, the stored value otherwise.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileView {
    pub token_id: u64,
    pub owner: Address,
    pub name: String,
    pub description: String,
    pub avatar_cid: String,
    pub token_uri: String,
}
