use common::Error;
use common_token::storage::{HIGH_USER_DATA_BUMP_LEDGERS, LOW_USER_DATA_BUMP_LEDGERS};
use reserve_aggregator_interface::types::reserve_config::ReserveConfig;
use reserve_aggregator_interface::types::reserve_state::ReserveState;
use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    ReserveConfig(Address),
    ReserveState(Address),
}

pub fn read_reserve_config(env: &Env, asset: &Address) -> Result<ReserveConfig, Error> {
    let key = DataKey::ReserveConfig(asset.clone());
    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NoReserve)?;

    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );

    Ok(config)
}

pub fn write_reserve_config(env: &Env, asset: &Address, config: &ReserveConfig) {
    let key = DataKey::ReserveConfig(asset.clone());
    env.storage().persistent().set(&key, config);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn read_reserve_state(env: &Env, asset: &Address) -> Result<ReserveState, Error> {
    let key = DataKey::ReserveState(asset.clone());
    let state = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NoReserve)?;

    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );

    Ok(state)
}

pub fn has_reserve_state(env: &Env, asset: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::ReserveState(asset.clone()))
}

pub fn write_reserve_state(env: &Env, asset: &Address, state: &ReserveState) {
    let key = DataKey::ReserveState(asset.clone());
    env.storage().persistent().set(&key, state);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}
