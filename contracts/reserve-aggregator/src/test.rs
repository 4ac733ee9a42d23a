extern crate std;

use common::{Error, RAY};
use debt_token_interface::{StableDebtTokenClient, VariableDebtTokenClient};
use rate_strategy_mock::{RateStrategyMock, RateStrategyMockClient};
use reserve_aggregator_interface::types::reserve_config::ReserveConfig;
use reserve_aggregator_interface::types::reserve_state::ReserveState;
use reserve_aggregator_interface::ReserveAggregatorClient;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::{Address, Env, IntoVal};
use stable_debt_token::StableDebtToken;
use variable_debt_token::VariableDebtToken;

use crate::ReserveAggregator;

const T0: u64 = 1_700_000_000;

struct Sut<'a> {
    pool: Address,
    asset: Address,
    aggregator: ReserveAggregatorClient<'a>,
    stable: StableDebtTokenClient<'a>,
    variable: VariableDebtTokenClient<'a>,
}

#[allow(deprecated)]
fn init_sut<'a>(e: &Env) -> Sut<'a> {
    e.mock_all_auths();
    e.ledger().with_mut(|li| li.timestamp = T0);

    let pool = Address::generate(e);
    let receipt_token = Address::generate(e);
    let asset = e.register_stellar_asset_contract(Address::generate(e));
    StellarAssetClient::new(e, &asset).mint(&receipt_token, &600);

    let stable = StableDebtTokenClient::new(e, &e.register_contract(None, StableDebtToken));
    stable.initialize(
        &"Stable debt".into_val(e),
        &"sDEBT".into_val(e),
        &pool,
        &asset,
        &None,
    );

    let variable = VariableDebtTokenClient::new(e, &e.register_contract(None, VariableDebtToken));
    variable.initialize(
        &"Variable debt".into_val(e),
        &"vDEBT".into_val(e),
        &pool,
        &asset,
        &None,
    );

    let strategy = RateStrategyMockClient::new(e, &e.register_contract(None, RateStrategyMock));
    strategy.set_rates(&(4 * RAY / 100), &(7 * RAY / 100), &(5 * RAY / 100));

    let aggregator =
        ReserveAggregatorClient::new(e, &e.register_contract(None, ReserveAggregator));
    aggregator.initialize(&pool);
    aggregator.set_reserve(
        &pool,
        &asset,
        &ReserveConfig {
            receipt_token,
            stable_debt_token: stable.address.clone(),
            variable_debt_token: variable.address.clone(),
            rate_strategy: strategy.address.clone(),
            reserve_factor: 1_000,
        },
    );

    Sut {
        pool,
        asset,
        aggregator,
        stable,
        variable,
    }
}

#[test]
fn initialize() {
    let e = Env::default();
    let sut = init_sut(&e);

    assert_eq!(sut.aggregator.pool(), sut.pool);
    assert_eq!(
        sut.aggregator.try_initialize(&Address::generate(&e)),
        Err(Ok(Error::AlreadyInitialized))
    );
    assert_eq!(
        sut.aggregator.get_reserve_state(&sut.asset),
        ReserveState {
            liquidity_index: RAY,
            variable_borrow_index: RAY,
            unbacked: 0,
            last_update_timestamp: T0,
        }
    );
}

#[test]
fn snapshot_without_debt() {
    let e = Env::default();
    let sut = init_sut(&e);

    let snapshot = sut.aggregator.get_reserve_snapshot(&sut.asset);

    assert_eq!(snapshot.available_liquidity, 600);
    assert_eq!(snapshot.total_liquidity, 600);
    assert_eq!(snapshot.borrow_utilization, 0);
    assert_eq!(snapshot.supply_utilization, 0);
    assert_eq!(snapshot.liquidity_rate, 0);
    assert_eq!(snapshot.variable_borrow_rate, 4 * RAY / 100);
    assert_eq!(snapshot.stable_borrow_rate, 7 * RAY / 100);
    assert_eq!(snapshot.market_stable_rate, 5 * RAY / 100);
}

#[test]
fn snapshot_over_both_ledgers() {
    let e = Env::default();
    let sut = init_sut(&e);
    let borrower = Address::generate(&e);

    sut.variable
        .mint(&sut.pool, &borrower, &borrower, &200, &RAY);
    sut.stable
        .mint(&sut.pool, &borrower, &borrower, &200, &(6 * RAY / 100));
    sut.aggregator
        .update_reserve_state(&sut.pool, &sut.asset, &RAY, &(11 * RAY / 10), &100);

    let snapshot = sut.aggregator.get_reserve_snapshot(&sut.asset);

    assert_eq!(snapshot.reserve_factor, 1_000);
    assert_eq!(snapshot.scaled_variable_debt, 200);
    assert_eq!(snapshot.total_variable_debt, 220);
    assert_eq!(snapshot.principal_stable_debt, 200);
    assert_eq!(snapshot.total_stable_debt, 200);
    assert_eq!(snapshot.average_stable_rate, 6 * RAY / 100);
    assert_eq!(snapshot.stable_debt_last_updated, T0);
    assert_eq!(snapshot.unbacked, 100);
    assert_eq!(snapshot.total_liquidity, 700);
    assert_eq!(
        snapshot.borrow_utilization,
        411_764_705_882_352_941_176_470_588
    );
    assert_eq!(
        snapshot.supply_utilization,
        375_000_000_000_000_000_000_000_000
    );
    assert!(snapshot.supply_utilization <= snapshot.borrow_utilization);
    // 4.95% overall borrow rate at 37.5% utilization, 10% kept by the reserve
    assert_eq!(snapshot.liquidity_rate, 16_714_285_714_285_714_285_714_286);
    assert_eq!(snapshot.variable_borrow_index, 11 * RAY / 10);
}

#[test]
fn unknown_reserve() {
    let e = Env::default();
    let sut = init_sut(&e);
    let asset = Address::generate(&e);

    assert_eq!(
        sut.aggregator.try_get_reserve_snapshot(&asset),
        Err(Ok(Error::NoReserve))
    );
    assert_eq!(
        sut.aggregator.try_get_reserve_config(&asset),
        Err(Ok(Error::NoReserve))
    );
    assert_eq!(
        sut.aggregator
            .try_update_reserve_state(&sut.pool, &asset, &RAY, &RAY, &0),
        Err(Ok(Error::NoReserve))
    );
}

#[test]
fn pool_only_mutations() {
    let e = Env::default();
    let sut = init_sut(&e);
    let stranger = Address::generate(&e);
    let config = sut.aggregator.get_reserve_config(&sut.asset);

    assert_eq!(
        sut.aggregator
            .try_set_reserve(&stranger, &sut.asset, &config),
        Err(Ok(Error::CallerMustBePool))
    );
    assert_eq!(
        sut.aggregator
            .try_update_reserve_state(&stranger, &sut.asset, &RAY, &RAY, &0),
        Err(Ok(Error::CallerMustBePool))
    );
}

#[test]
fn indices_never_decrease() {
    let e = Env::default();
    let sut = init_sut(&e);

    sut.aggregator.update_reserve_state(
        &sut.pool,
        &sut.asset,
        &(RAY + 10),
        &(RAY + 20),
        &0,
    );

    assert_eq!(
        sut.aggregator
            .try_update_reserve_state(&sut.pool, &sut.asset, &RAY, &(RAY + 20), &0),
        Err(Ok(Error::IndexDecreased))
    );
    assert_eq!(
        sut.aggregator
            .try_update_reserve_state(&sut.pool, &sut.asset, &(RAY + 10), &RAY, &0),
        Err(Ok(Error::IndexDecreased))
    );

    e.ledger().with_mut(|li| li.timestamp = T0 + 60);
    sut.aggregator.update_reserve_state(
        &sut.pool,
        &sut.asset,
        &(RAY + 10),
        &(RAY + 20),
        &5,
    );

    let state = sut.aggregator.get_reserve_state(&sut.asset);
    assert_eq!(state.unbacked, 5);
    assert_eq!(state.last_update_timestamp, T0 + 60);
}

#[test]
fn invalid_reserve_factor() {
    let e = Env::default();
    let sut = init_sut(&e);
    let mut config = sut.aggregator.get_reserve_config(&sut.asset);
    config.reserve_factor = 10_001;

    assert_eq!(
        sut.aggregator
            .try_set_reserve(&sut.pool, &sut.asset, &config),
        Err(Ok(Error::InvalidReserveFactor))
    );
}
