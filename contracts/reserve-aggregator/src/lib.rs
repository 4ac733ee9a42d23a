#![deny(warnings)]
#![no_std]

use common::{require_valid_percentage, Error};
use common_token::storage::{has_pool, read_pool, write_pool};
use common_token::{require_nonnegative_amount, verify_caller_is_pool};
use debt_token_interface::{StableDebtTokenClient, VariableDebtTokenClient};
use rate_strategy_interface::types::RateParams;
use rate_strategy_interface::RateStrategyClient;
use reserve_aggregator_interface::types::reserve_config::ReserveConfig;
use reserve_aggregator_interface::types::reserve_snapshot::ReserveSnapshot;
use reserve_aggregator_interface::types::reserve_state::ReserveState;
use reserve_aggregator_interface::ReserveAggregatorTrait;
use soroban_sdk::{contract, contractimpl, token, Address, Env};

use crate::snapshot::{calc_reserve_snapshot, calc_total_variable_debt, SnapshotInput};
use crate::storage::*;

mod event;
mod snapshot;
mod storage;
#[cfg(test)]
mod test;

#[contract]
pub struct ReserveAggregator;

#[contractimpl]
impl ReserveAggregatorTrait for ReserveAggregator {
    /// Initializes the aggregator with the pool allowed to register reserves.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyInitialized` if the contract has already been initialized.
    ///
    fn initialize(env: Env, pool: Address) -> Result<(), Error> {
        if has_pool(&env) {
            return Err(Error::AlreadyInitialized);
        }

        write_pool(&env, &pool);

        event::initialized(&env, pool);

        Ok(())
    }

    fn version() -> u32 {
        1
    }

    /// Registers or reconfigures the reserve of `asset`.
    ///
    /// A newly registered reserve starts with both indices at one ray.
    ///
    /// # Errors
    ///
    /// - `CallerMustBePool` if `caller` is not the pool.
    /// - `InvalidReserveFactor` if the reserve factor exceeds 100%.
    ///
    fn set_reserve(
        env: Env,
        caller: Address,
        asset: Address,
        config: ReserveConfig,
    ) -> Result<(), Error> {
        verify_caller_is_pool(&env, &caller)?;
        require_valid_percentage(config.reserve_factor)?;

        write_reserve_config(&env, &asset, &config);
        if !has_reserve_state(&env, &asset) {
            write_reserve_state(&env, &asset, &ReserveState::new(&env));
        }

        event::reserve_set(&env, asset, config);

        Ok(())
    }

    /// Records the reserve indices after the pool accrued interest.
    ///
    /// # Errors
    ///
    /// - `CallerMustBePool` if `caller` is not the pool.
    /// - `NoReserve` if the reserve isn't registered.
    /// - `IndexDecreased` if either index is lower than the stored one.
    /// - `NegativeAmount` if `unbacked` is negative.
    ///
    fn update_reserve_state(
        env: Env,
        caller: Address,
        asset: Address,
        liquidity_index: i128,
        variable_borrow_index: i128,
        unbacked: i128,
    ) -> Result<(), Error> {
        verify_caller_is_pool(&env, &caller)?;

        let state = read_reserve_state(&env, &asset)?;
        if liquidity_index < state.liquidity_index
            || variable_borrow_index < state.variable_borrow_index
        {
            return Err(Error::IndexDecreased);
        }
        require_nonnegative_amount(unbacked)?;

        write_reserve_state(
            &env,
            &asset,
            &ReserveState {
                liquidity_index,
                variable_borrow_index,
                unbacked,
                last_update_timestamp: env.ledger().timestamp(),
            },
        );

        event::reserve_state_updated(
            &env,
            asset,
            liquidity_index,
            variable_borrow_index,
            unbacked,
        );

        Ok(())
    }

    fn get_reserve_config(env: Env, asset: Address) -> Result<ReserveConfig, Error> {
        read_reserve_config(&env, &asset)
    }

    fn get_reserve_state(env: Env, asset: Address) -> Result<ReserveState, Error> {
        read_reserve_state(&env, &asset)
    }

    /// Derives the current reserve metrics from the debt ledgers, the
    /// liquidity held by the receipt token and the rate strategy.
    ///
    /// # Errors
    ///
    /// Returns `NoReserve` if the reserve isn't registered.
    ///
    fn get_reserve_snapshot(env: Env, asset: Address) -> Result<ReserveSnapshot, Error> {
        let config = read_reserve_config(&env, &asset)?;
        let state = read_reserve_state(&env, &asset)?;

        let stable_supply = StableDebtTokenClient::new(&env, &config.stable_debt_token)
            .get_supply_data();
        let scaled_variable_debt =
            VariableDebtTokenClient::new(&env, &config.variable_debt_token).scaled_total_supply();
        let available_liquidity = token::Client::new(&env, &asset).balance(&config.receipt_token);

        let rate_strategy = RateStrategyClient::new(&env, &config.rate_strategy);
        let rates = rate_strategy.calculate_interest_rates(&RateParams {
            available_liquidity,
            unbacked: state.unbacked,
            total_stable_debt: stable_supply.total_supply,
            total_variable_debt: calc_total_variable_debt(
                &env,
                scaled_variable_debt,
                state.variable_borrow_index,
            )?,
            average_stable_rate: stable_supply.avg_rate,
            reserve_factor: config.reserve_factor,
        });
        let market_stable_rate = rate_strategy.base_stable_borrow_rate();

        calc_reserve_snapshot(
            &env,
            &SnapshotInput {
                stable_supply,
                scaled_variable_debt,
                available_liquidity,
                reserve_factor: config.reserve_factor,
                state,
                rates,
                market_stable_rate,
            },
        )
    }

    fn pool(env: Env) -> Result<Address, Error> {
        read_pool(&env)
    }
}
