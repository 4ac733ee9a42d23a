use reserve_aggregator_interface::types::reserve_config::ReserveConfig;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, pool: Address) {
    e.events().publish((symbol_short!("init"),), pool);
}

pub(crate) fn reserve_set(e: &Env, asset: Address, config: ReserveConfig) {
    let topics = (Symbol::new(e, "reserve_set"), asset);
    e.events().publish(topics, config);
}

pub(crate) fn reserve_state_updated(
    e: &Env,
    asset: Address,
    liquidity_index: i128,
    variable_borrow_index: i128,
    unbacked: i128,
) {
    let topics = (Symbol::new(e, "reserve_state"), asset);
    e.events()
        .publish(topics, (liquidity_index, variable_borrow_index, unbacked));
}
