//! # Soroban Profile Registry
//!
//! Per-address profile NFTs for the Soroban blockchain.
//!
//! Each address may hold at most one profile token carrying display fields
//! (name, description), an avatar content reference, and a metadata URI.
//! Tokens are minted, partially updated, and burned by their owner; the
//! registry admin can replace the logic wasm in place without touching any
//! stored state, and can change the registry-wide default avatar that
//! opted-in profiles resolve against.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // One-time initialization, part of the deployment payload
//! client.initialize(&admin, &name, &symbol, &default_avatar_cid);
//!
//! // Mint a profile that tracks the registry default avatar
//! let token_id = client.mint_profile(
//!     &caller, &name, &description, &true, &empty, &token_uri,
//! );
//!
//! // Partial update: `None` keeps a field, `Some(value)` replaces it
//! client.update_profile(&caller, &token_id, &None, &Some(new_description), &None, &None);
//!
//! // Lifecycle
//! client.burn_profile(&caller, &token_id);
//! ```

#![no_std]

mod events;
mod profile;
mod storage;

pub use profile::{Profile, ProfileView};
pub use storage::DataKey;

use soroban_sdk::{contract, contracterror, contractimpl, Address, BytesN, Env, String};

use crate::events::*;

/// Error codes for the profile registry contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistryError {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Caller does not hold the admin capability.
    NotAuthorized = 3,
    /// Caller already owns an active profile.
    AlreadyHasProfile = 4,
    /// No active profile exists under this token id.
    ProfileNotFound = 5,
    /// Caller is not the owner of this token.
    NotOwner = 6,
}

#[contract]
pub struct ProfileRegistry;

#[contractimpl]
impl ProfileRegistry {
    // ========== Initialization ==========

    /// Initialize the registry with its admin and collection metadata.
    ///
    /// Runs exactly once, as the deployment payload; any later call fails
    /// with `AlreadyInitialized` and leaves every stored value untouched.
    /// `admin` must authorize so a third party cannot race the deployment
    /// and install a foreign admin.
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        default_avatar_cid: String,
    ) -> Result<(), RegistryError> {
        if storage::is_initialized(&env) {
            return Err(RegistryError::AlreadyInitialized);
        }

        admin.require_auth();

        storage::write_admin(&env, &admin);
        storage::write_name(&env, &name);
        storage::write_symbol(&env, &symbol);
        storage::write_default_avatar(&env, &default_avatar_cid);
        storage::init_counters(&env);

        Ok(())
    }

    /// Get the admin address.
    pub fn admin(env: Env) -> Result<Address, RegistryError> {
        storage::read_admin(&env)
    }

    /// Collection name.
    pub fn name(env: Env) -> Result<String, RegistryError> {
        storage::read_name(&env)
    }

    /// Collection symbol.
    pub fn symbol(env: Env) -> Result<String, RegistryError> {
        storage::read_symbol(&env)
    }

    /// Current registry-wide default avatar CID.
    pub fn default_avatar(env: Env) -> Result<String, RegistryError> {
        storage::read_default_avatar(&env)
    }

    // ========== Minting ==========

    /// Mint a profile token for `caller`.
    ///
    /// # Arguments
    /// * `caller` - Address receiving the token; must authorize.
    /// * `name` - Free-form display name.
    /// * `description` - Free-form description.
    /// * `use_default_avatar` - When true the profile resolves its avatar
    ///   against the registry default and `avatar_cid` is ignored (empty is
    ///   the expected convention in that case).
    /// * `avatar_cid` - Explicit avatar reference when not using the
    ///   default; may be empty, meaning no avatar.
    /// * `token_uri` - Metadata pointer stored verbatim.
    ///
    /// # Returns
    /// The newly assigned token id. Ids start at 1 and are never reused,
    /// even after a burn.
    ///
    /// # Errors
    /// * `NotInitialized` - before `initialize` has run.
    /// * `AlreadyHasProfile` - `caller` already owns an active profile.
    pub fn mint_profile(
        env: Env,
        caller: Address,
        name: String,
        description: String,
        use_default_avatar: bool,
        avatar_cid: String,
        token_uri: String,
    ) -> Result<u64, RegistryError> {
        caller.require_auth();
        storage::require_initialized(&env)?;

        if storage::read_owner_index(&env, &caller).is_some() {
            return Err(RegistryError::AlreadyHasProfile);
        }

        // Opted-in profiles store an empty CID and resolve against the
        // registry default at read time.
        let stored_avatar = if use_default_avatar {
            String::from_str(&env, "")
        } else {
            avatar_cid
        };

        let token_id = storage::allocate_token_id(&env);
        let profile = Profile {
            token_id,
            owner: caller.clone(),
            name,
            description,
            avatar_cid: stored_avatar,
            token_uri,
            use_default_avatar,
        };

        storage::write_profile(&env, &profile);
        storage::write_owner_index(&env, &caller, token_id);
        storage::increment_profile_count(&env);

        emit_profile_minted(&env, token_id, &caller);

        Ok(token_id)
    }

    // ========== Queries ==========

    /// Get the profile behind `token_id`, with the avatar resolved.
    ///
    /// Profiles minted with `use_default_avatar` and no explicit override
    /// show the registry default current at read time, not the one in effect
    /// when they were minted.
    pub fn get_profile(env: Env, token_id: u64) -> Result<ProfileView, RegistryError> {
        let profile = storage::read_profile(&env, token_id)?;

        let avatar_cid = if profile.tracks_default_avatar() {
            storage::read_default_avatar(&env)?
        } else {
            profile.avatar_cid.clone()
        };

        Ok(profile.into_view(avatar_cid))
    }

    /// True iff `owner` currently holds an active profile.
    pub fn has_profile(env: Env, owner: Address) -> bool {
        storage::read_owner_index(&env, &owner).is_some()
    }

    /// Owner of `token_id`.
    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, RegistryError> {
        Ok(storage::read_profile(&env, token_id)?.owner)
    }

    /// Metadata pointer of `token_id`.
    pub fn token_uri(env: Env, token_id: u64) -> Result<String, RegistryError> {
        Ok(storage::read_profile(&env, token_id)?.token_uri)
    }

    /// Number of currently active profiles.
    pub fn profile_count(env: Env) -> u64 {
        storage::read_profile_count(&env)
    }

    /// Logic version: 1 after initialization, bumped by every upgrade.
    pub fn version(env: Env) -> u32 {
        storage::read_logic_version(&env)
    }

    // ========== Updates ==========

    /// Update fields of `caller`'s profile.
    ///
    /// Each field is independent: `None` keeps the stored value, `Some(v)`
    /// replaces it, so an explicitly empty replacement is expressible. The
    /// mint-time `use_default_avatar` flag is not alterable; setting a
    /// non-empty `avatar_cid` overrides the default for an opted-in profile,
    /// and setting it back to `Some("")` resumes default tracking.
    ///
    /// # Errors
    /// * `ProfileNotFound` - no token under `token_id`.
    /// * `NotOwner` - `caller` does not own the token.
    pub fn update_profile(
        env: Env,
        caller: Address,
        token_id: u64,
        name: Option<String>,
        description: Option<String>,
        avatar_cid: Option<String>,
        token_uri: Option<String>,
    ) -> Result<(), RegistryError> {
        caller.require_auth();

        let mut profile = storage::read_profile(&env, token_id)?;
        if profile.owner != caller {
            return Err(RegistryError::NotOwner);
        }

        if let Some(name) = name {
            profile.name = name;
        }
        if let Some(description) = description {
            profile.description = description;
        }
        if let Some(avatar_cid) = avatar_cid {
            profile.avatar_cid = avatar_cid;
        }
        if let Some(token_uri) = token_uri {
            profile.token_uri = token_uri;
        }

        storage::write_profile(&env, &profile);

        emit_profile_updated(&env, token_id);

        Ok(())
    }

    // ========== Burning ==========

    /// Burn `caller`'s profile token.
    ///
    /// Clears the profile record and the owner index together, so the former
    /// owner may mint again; the burned id is permanently retired.
    ///
    /// # Errors
    /// * `ProfileNotFound` - no token under `token_id`.
    /// * `NotOwner` - `caller` does not own the token.
    pub fn burn_profile(env: Env, caller: Address, token_id: u64) -> Result<(), RegistryError> {
        caller.require_auth();

        let profile = storage::read_profile(&env, token_id)?;
        if profile.owner != caller {
            return Err(RegistryError::NotOwner);
        }

        storage::remove_profile(&env, token_id);
        storage::remove_owner_index(&env, &profile.owner);
        storage::decrement_profile_count(&env);

        emit_profile_burned(&env, token_id, &profile.owner);

        Ok(())
    }

    // ========== Admin ==========

    /// Change the registry-wide default avatar (admin only).
    ///
    /// Takes effect immediately for every profile tracking the default.
    pub fn set_default_avatar(
        env: Env,
        caller: Address,
        new_cid: String,
    ) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;

        storage::write_default_avatar(&env, &new_cid);

        emit_default_avatar_set(&env, &new_cid);

        Ok(())
    }

    /// Replace the installed logic wasm (admin only).
    ///
    /// Instance and persistent storage are untouched: profiles, counters,
    /// and configuration all survive the swap. The new code takes effect
    /// once the current invocation completes. Bumps the logic version.
    pub fn upgrade(
        env: Env,
        caller: Address,
        new_wasm_hash: BytesN<32>,
    ) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;

        storage::bump_logic_version(&env);
        emit_contract_upgraded(&env, &new_wasm_hash);

        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    // ========== Internal Helpers ==========

    /// Authenticate `caller` and check it against the stored admin.
    fn require_admin(env: &Env, caller: &Address) -> Result<(), RegistryError> {
        caller.require_auth();

        let admin = storage::read_admin(env)?;
        if *caller != admin {
            return Err(RegistryError::NotAuthorized);
        }

        Ok(())
    }
}
