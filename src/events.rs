//! Event emission helpers for the profile registry.

use soroban_sdk::{Address, BytesN, Env, String, Symbol};

/// Emit an event when a profile token is minted.
pub fn emit_profile_minted(env: &Env, token_id: u64, owner: &Address) {
    let topics = (Symbol::new(env, "profile_minted"),);
    env.events().publish(topics, (token_id, owner.clone()));
}

/// Emit an event when a profile's fields are updated.
pub fn emit_profile_updated(env: &Env, token_id: u64) {
    let topics = (Symbol::new(env, "profile_updated"),);
    env.events().publish(topics, token_id);
}

/// Emit an event when a profile token is burned.
pub fn emit_profile_burned(env: &Env, token_id: u64, owner: &Address) {
    let topics = (Symbol::new(env, "profile_burned"),);
    env.events().publish(topics, (token_id, owner.clone()));
}

/// Emit an event when the registry-wide default avatar changes.
pub fn emit_default_avatar_set(env: &Env, new_cid: &String) {
    let topics = (Symbol::new(env, "default_avatar_set"),);
    env.events().publish(topics, new_cid.clone());
}

/// Emit an event when the logic wasm is replaced.
pub fn emit_contract_upgraded(env: &Env, new_wasm_hash: &BytesN<32>) {
    let topics = (Symbol::new(env, "contract_upgraded"),);
    env.events().publish(topics, new_wasm_hash.clone());
}
