use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

pub(crate) fn initialized(
    e: &Env,
    underlying_asset: Address,
    pool: Address,
    decimals: u32,
    name: String,
    symbol: String,
) {
    let topics = (symbol_short!("init"), underlying_asset, pool);
    e.events().publish(topics, (decimals, name, symbol));
}

pub(crate) fn mint(
    e: &Env,
    user: Address,
    on_behalf_of: Address,
    amount: i128,
    balance_increase: i128,
    index: i128,
) {
    let topics = (symbol_short!("mint"), user, on_behalf_of);
    e.events().publish(topics, (amount, balance_increase, index));
}

pub(crate) fn burn(e: &Env, from: Address, amount: i128, balance_increase: i128, index: i128) {
    let topics = (symbol_short!("burn"), from);
    e.events().publish(topics, (amount, balance_increase, index));
}

pub(crate) fn borrow_allowance_delegated(
    e: &Env,
    delegator: Address,
    delegatee: Address,
    amount: i128,
) {
    let topics = (
        Symbol::new(e, "borrow_allowance_delegated"),
        delegator,
        delegatee,
    );
    e.events().publish(topics, amount);
}
