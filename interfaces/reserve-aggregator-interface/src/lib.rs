#![deny(warnings)]
#![no_std]

use common::Error;
use soroban_sdk::{contractclient, contractspecfn, Address, Env};
use types::reserve_config::ReserveConfig;
use types::reserve_snapshot::ReserveSnapshot;
use types::reserve_state::ReserveState;

pub mod types;

pub struct Spec;

/// Interface for the read side of a lending reserve
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "ReserveAggregatorClient")]
pub trait ReserveAggregatorTrait {
    fn initialize(env: Env, pool: Address) -> Result<(), Error>;

    fn version() -> u32;

    fn set_reserve(
        env: Env,
        caller: Address,
        asset: Address,
        config: ReserveConfig,
    ) -> Result<(), Error>;

    fn update_reserve_state(
        env: Env,
        caller: Address,
        asset: Address,
        liquidity_index: i128,
        variable_borrow_index: i128,
        unbacked: i128,
    ) -> Result<(), Error>;

    fn get_reserve_config(env: Env, asset: Address) -> Result<ReserveConfig, Error>;

    fn get_reserve_state(env: Env, asset: Address) -> Result<ReserveState, Error>;

    fn get_reserve_snapshot(env: Env, asset: Address) -> Result<ReserveSnapshot, Error>;

    fn pool(env: Env) -> Result<Address, Error>;
}
