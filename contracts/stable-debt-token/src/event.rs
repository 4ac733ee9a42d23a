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

#[allow(clippy::too_many_arguments)]
pub(crate) fn mint(
    e: &Env,
    user: Address,
    on_behalf_of: Address,
    amount: i128,
    balance_increase: i128,
    user_rate: i128,
    avg_rate: i128,
    total_supply: i128,
) {
    let topics = (symbol_short!("mint"), user, on_behalf_of);
    e.events().publish(
        topics,
        (amount, balance_increase, user_rate, avg_rate, total_supply),
    );
}

pub(crate) fn burn(
    e: &Env,
    from: Address,
    amount: i128,
    balance_increase: i128,
    avg_rate: i128,
    total_supply: i128,
) {
    let topics = (symbol_short!("burn"), from);
    e.events()
        .publish(topics, (amount, balance_increase, avg_rate, total_supply));
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
