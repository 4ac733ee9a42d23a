use common::{Error, RayMath};
use debt_token_interface::types::stable_supply_data::StableSupplyData;
use rate_strategy_interface::types::InterestRates;
use reserve_aggregator_interface::types::reserve_snapshot::ReserveSnapshot;
use reserve_aggregator_interface::types::reserve_state::ReserveState;
use soroban_sdk::Env;

pub struct SnapshotInput {
    pub stable_supply: StableSupplyData,
    pub scaled_variable_debt: i128,
    pub available_liquidity: i128,
    pub reserve_factor: u32,
    pub state: ReserveState,
    pub rates: InterestRates,
    pub market_stable_rate: i128,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utilization {
    pub borrow: i128,
    pub supply: i128,
}

pub fn calc_total_variable_debt(
    env: &Env,
    scaled_variable_debt: i128,
    variable_borrow_index: i128,
) -> Result<i128, Error> {
    scaled_variable_debt.ray_mul_floor(env, variable_borrow_index)
}

/// Borrow utilization measures debt against the liquidity actually held,
/// supply utilization against everything minted to suppliers. Supply
/// utilization never exceeds borrow utilization.
pub fn calc_utilization(
    env: &Env,
    total_debt: i128,
    available_liquidity: i128,
    total_liquidity: i128,
) -> Result<Utilization, Error> {
    if total_debt == 0 {
        return Ok(Utilization {
            borrow: 0,
            supply: 0,
        });
    }

    let borrow = total_debt.ray_div(
        env,
        available_liquidity
            .checked_add(total_debt)
            .ok_or(Error::ArithmeticOverflow)?,
    )?;
    let supply = total_debt.ray_div(
        env,
        total_liquidity
            .checked_add(total_debt)
            .ok_or(Error::ArithmeticOverflow)?,
    )?;

    Ok(Utilization {
        borrow,
        supply: supply.min(borrow),
    })
}

pub fn calc_reserve_snapshot(env: &Env, input: &SnapshotInput) -> Result<ReserveSnapshot, Error> {
    let total_variable_debt = calc_total_variable_debt(
        env,
        input.scaled_variable_debt,
        input.state.variable_borrow_index,
    )?;
    let total_stable_debt = input.stable_supply.total_supply;

    let total_debt = total_stable_debt
        .checked_add(total_variable_debt)
        .ok_or(Error::ArithmeticOverflow)?;
    let total_liquidity = input
        .available_liquidity
        .checked_add(input.state.unbacked)
        .ok_or(Error::ArithmeticOverflow)?;

    let utilization = calc_utilization(
        env,
        total_debt,
        input.available_liquidity,
        total_liquidity,
    )?;

    Ok(ReserveSnapshot {
        reserve_factor: input.reserve_factor,
        unbacked: input.state.unbacked,
        available_liquidity: input.available_liquidity,
        total_liquidity,
        borrow_utilization: utilization.borrow,
        supply_utilization: utilization.supply,
        total_stable_debt,
        total_variable_debt,
        principal_stable_debt: input.stable_supply.principal_supply,
        scaled_variable_debt: input.scaled_variable_debt,
        liquidity_rate: input.rates.liquidity_rate,
        variable_borrow_rate: input.rates.variable_borrow_rate,
        stable_borrow_rate: input.rates.stable_borrow_rate,
        average_stable_rate: input.stable_supply.avg_rate,
        market_stable_rate: input.market_stable_rate,
        liquidity_index: input.state.liquidity_index,
        variable_borrow_index: input.state.variable_borrow_index,
        last_update_timestamp: input.state.last_update_timestamp,
        stable_debt_last_updated: input.stable_supply.last_update_timestamp,
    })
}

#[cfg(test)]
mod tests {
    use common::RAY;
    use soroban_sdk::Env;

    use super::*;

    fn input(env: &Env, stable: i128, scaled_variable: i128, unbacked: i128) -> SnapshotInput {
        let mut state = ReserveState::new(env);
        state.variable_borrow_index = 11 * RAY / 10;
        state.unbacked = unbacked;

        SnapshotInput {
            stable_supply: StableSupplyData {
                principal_supply: stable,
                total_supply: stable,
                avg_rate: if stable == 0 { 0 } else { 6 * RAY / 100 },
                last_update_timestamp: 0,
            },
            scaled_variable_debt: scaled_variable,
            available_liquidity: 600,
            reserve_factor: 1_000,
            state,
            rates: InterestRates {
                liquidity_rate: RAY / 100,
                stable_borrow_rate: 7 * RAY / 100,
                variable_borrow_rate: 4 * RAY / 100,
            },
            market_stable_rate: 5 * RAY / 100,
        }
    }

    #[test]
    fn no_debt_no_utilization() {
        let env = Env::default();

        let snapshot = calc_reserve_snapshot(&env, &input(&env, 0, 0, 100)).unwrap();

        assert_eq!(snapshot.borrow_utilization, 0);
        assert_eq!(snapshot.supply_utilization, 0);
        assert_eq!(snapshot.total_liquidity, 700);
    }

    #[test]
    fn utilization_with_unbacked_supply() {
        let env = Env::default();

        // 200 stable + floor(200 * 1.1) variable = 420
        let snapshot = calc_reserve_snapshot(&env, &input(&env, 200, 200, 100)).unwrap();

        assert_eq!(snapshot.total_variable_debt, 220);
        assert_eq!(snapshot.total_stable_debt, 200);
        assert_eq!(snapshot.total_liquidity, 700);
        // 420 / 1020
        assert_eq!(snapshot.borrow_utilization, 411_764_705_882_352_941_176_470_588);
        // 420 / 1120
        assert_eq!(snapshot.supply_utilization, 375_000_000_000_000_000_000_000_000);
        assert!(snapshot.supply_utilization <= snapshot.borrow_utilization);
        assert_eq!(snapshot.average_stable_rate, 6 * RAY / 100);
        assert_eq!(snapshot.market_stable_rate, 5 * RAY / 100);
    }

    #[test]
    fn utilization_without_unbacked_supply() {
        let env = Env::default();

        let snapshot = calc_reserve_snapshot(&env, &input(&env, 200, 200, 0)).unwrap();

        assert_eq!(snapshot.borrow_utilization, snapshot.supply_utilization);
    }

    #[test]
    fn supply_never_exceeds_borrow_utilization() {
        let env = Env::default();

        for (debt, available, total) in [
            (1, 0, 0),
            (1_000, 1, 10),
            (7, 3, 3),
            (123_456, 654_321, 1_000_000),
        ] {
            let utilization = calc_utilization(&env, debt, available, total).unwrap();
            assert!(utilization.supply <= utilization.borrow);
            assert!(utilization.borrow <= RAY);
        }
    }
}
