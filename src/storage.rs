//! Storage layout and typed accessors for the profile registry.
//!
//! This module is the fixed side of the upgrade boundary: it owns the
//! complete durable key layout, and the contract entry points go through the
//! accessors below instead of touching `env.storage()` directly. Replacing
//! the logic wasm leaves every entry written under these keys in place, so
//! the layout is append-only: new variants may be added at the end, existing
//! variants must not be reordered, renamed, or removed.

use soroban_sdk::{contracttype, Address, Env, String};

use crate::profile::Profile;
use crate::RegistryError;

/// Durable storage keys.
///
/// Registry-wide configuration and counters live in instance storage;
/// per-token entries and the owner index live in persistent storage.
#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Privileged account: authorizes logic upgrades and default-avatar
    /// changes.
    Admin,

    /// Collection name, fixed at initialization.
    Name,

    /// Collection symbol, fixed at initialization.
    Symbol,

    /// Process-wide fallback avatar CID for profiles minted with
    /// `use_default_avatar`.
    DefaultAvatar,

    /// Next token id to hand out. Starts at 1, never decrements.
    NextTokenId,

    /// Number of currently active (unburned) profiles.
    ProfileCount,

    /// Logic version, bumped on every upgrade.
    LogicVersion,

    /// Maps token id to its Profile record.
    Profile(u64),

    /// Maps owner Address to their token id.
    /// Used to enforce the one-profile-per-owner rule.
    OwnerToken(Address),
}

/// Time-to-live for persistent profile entries in ledger entries.
pub const PROFILE_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const PROFILE_TTL_EXTEND: u32 = 2592000; // ~150 days

/// First token id handed out by the registry.
pub const FIRST_TOKEN_ID: u64 = 1;

// ========== Registry configuration ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

/// Fail with `NotInitialized` unless `initialize` has run.
pub fn require_initialized(env: &Env) -> Result<(), RegistryError> {
    if is_initialized(env) {
        Ok(())
    } else {
        Err(RegistryError::NotInitialized)
    }
}

pub fn read_admin(env: &Env) -> Result<Address, RegistryError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(RegistryError::NotInitialized)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_name(env: &Env) -> Result<String, RegistryError> {
    env.storage()
        .instance()
        .get(&DataKey::Name)
        .ok_or(RegistryError::NotInitialized)
}

pub fn write_name(env: &Env, name: &String) {
    env.storage().instance().set(&DataKey::Name, name);
}

pub fn read_symbol(env: &Env) -> Result<String, RegistryError> {
    env.storage()
        .instance()
        .get(&DataKey::Symbol)
        .ok_or(RegistryError::NotInitialized)
}

pub fn write_symbol(env: &Env, symbol: &String) {
    env.storage().instance().set(&DataKey::Symbol, symbol);
}

pub fn read_default_avatar(env: &Env) -> Result<String, RegistryError> {
    env.storage()
        .instance()
        .get(&DataKey::DefaultAvatar)
        .ok_or(RegistryError::NotInitialized)
}

pub fn write_default_avatar(env: &Env, cid: &String) {
    env.storage().instance().set(&DataKey::DefaultAvatar, cid);
}

// ========== Counters ==========

/// Seed the mint counter, active-profile count, and logic version.
/// Called exactly once, from `initialize`.
pub fn init_counters(env: &Env) {
    env.storage()
        .instance()
        .set(&DataKey::NextTokenId, &FIRST_TOKEN_ID);
    env.storage().instance().set(&DataKey::ProfileCount, &0u64);
    env.storage().instance().set(&DataKey::LogicVersion, &1u32);
}

/// Hand out the next token id and advance the counter.
///
/// Ids are monotonic and permanently retired on burn; the counter never
/// rolls back.
pub fn allocate_token_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::NextTokenId)
        .unwrap_or(FIRST_TOKEN_ID);
    env.storage()
        .instance()
        .set(&DataKey::NextTokenId, &(id + 1));
    id
}

pub fn read_profile_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProfileCount)
        .unwrap_or(0)
}

pub fn increment_profile_count(env: &Env) {
    let count = read_profile_count(env);
    env.storage()
        .instance()
        .set(&DataKey::ProfileCount, &(count + 1));
}

pub fn decrement_profile_count(env: &Env) {
    let count = read_profile_count(env);
    env.storage()
        .instance()
        .set(&DataKey::ProfileCount, &count.saturating_sub(1));
}

pub fn read_logic_version(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::LogicVersion)
        .unwrap_or(0)
}

pub fn bump_logic_version(env: &Env) {
    let version = read_logic_version(env);
    env.storage()
        .instance()
        .set(&DataKey::LogicVersion, &(version + 1));
}

// ========== Profiles ==========

pub fn read_profile(env: &Env, token_id: u64) -> Result<Profile, RegistryError> {
    env.storage()
        .persistent()
        .get(&DataKey::Profile(token_id))
        .ok_or(RegistryError::ProfileNotFound)
}

pub fn write_profile(env: &Env, profile: &Profile) {
    let key = DataKey::Profile(profile.token_id);
    env.storage().persistent().set(&key, profile);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROFILE_TTL_THRESHOLD, PROFILE_TTL_EXTEND);
}

pub fn remove_profile(env: &Env, token_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::Profile(token_id));
}

// ========== Owner index ==========

pub fn read_owner_index(env: &Env, owner: &Address) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::OwnerToken(owner.clone()))
}

pub fn write_owner_index(env: &Env, owner: &Address, token_id: u64) {
    let key = DataKey::OwnerToken(owner.clone());
    env.storage().persistent().set(&key, &token_id);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROFILE_TTL_THRESHOLD, PROFILE_TTL_EXTEND);
}

pub fn remove_owner_index(env: &Env, owner: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::OwnerToken(owner.clone()));
}
