#![deny(warnings)]
#![no_std]

use common::{
    require_valid_percentage, weighted_average, Error, PercentageMath, RayMath, PERCENTAGE_FACTOR,
};
use rate_strategy_interface::types::{InterestRates, RateParams};
use rate_strategy_interface::RateStrategyTrait;
use soroban_sdk::{contract, contractimpl, Env};

use crate::storage::*;

mod storage;

#[contract]
pub struct RateStrategyMock;

#[contractimpl]
impl RateStrategyTrait for RateStrategyMock {
    /// Returns the configured borrow rates. The liquidity rate is what
    /// suppliers earn from them: the overall borrow rate scaled by supply
    /// utilization minus the reserve factor.
    fn calculate_interest_rates(env: Env, params: RateParams) -> Result<InterestRates, Error> {
        require_valid_percentage(params.reserve_factor)?;

        let rates = read_rates(&env);
        let total_debt = params
            .total_stable_debt
            .checked_add(params.total_variable_debt)
            .ok_or(Error::ArithmeticOverflow)?;

        let liquidity_rate = if total_debt == 0 {
            0
        } else {
            let total_liquidity = params
                .available_liquidity
                .checked_add(params.unbacked)
                .and_then(|liquidity| liquidity.checked_add(total_debt))
                .ok_or(Error::ArithmeticOverflow)?;
            let supply_utilization = total_debt.ray_div(&env, total_liquidity)?;

            let overall_borrow_rate = weighted_average(
                &env,
                &[
                    (rates.variable_borrow_rate, params.total_variable_debt),
                    (params.average_stable_rate, params.total_stable_debt),
                ],
            )?;

            overall_borrow_rate
                .ray_mul(&env, supply_utilization)?
                .percent_mul(PERCENTAGE_FACTOR - params.reserve_factor)?
        };

        Ok(InterestRates {
            liquidity_rate,
            stable_borrow_rate: rates.stable_borrow_rate,
            variable_borrow_rate: rates.variable_borrow_rate,
        })
    }

    fn base_stable_borrow_rate(env: Env) -> i128 {
        read_rates(&env).base_stable_borrow_rate
    }
}

#[contractimpl]
impl RateStrategyMock {
    pub fn set_rates(
        env: Env,
        variable_borrow_rate: i128,
        stable_borrow_rate: i128,
        base_stable_borrow_rate: i128,
    ) {
        write_rates(
            &env,
            &ConfiguredRates {
                variable_borrow_rate,
                stable_borrow_rate,
                base_stable_borrow_rate,
            },
        );
    }
}
