use common::Error;
use soroban_sdk::{contracttype, Address, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub const LOW_USER_DATA_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub const HIGH_USER_DATA_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

pub const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub struct BorrowAllowanceKey {
    pub delegator: Address,
    pub delegatee: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum CommonDataKey {
    Pool,
    UnderlyingAsset,
    Incentives,
    BorrowAllowance(BorrowAllowanceKey),
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn read_pool(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&CommonDataKey::Pool)
        .ok_or(Error::Uninitialized)
}

pub fn write_pool(env: &Env, id: &Address) {
    bump_instance(env);

    env.storage().instance().set(&CommonDataKey::Pool, id);
}

pub fn has_pool(env: &Env) -> bool {
    bump_instance(env);

    env.storage().instance().has(&CommonDataKey::Pool)
}

pub fn read_underlying_asset(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&CommonDataKey::UnderlyingAsset)
        .ok_or(Error::Uninitialized)
}

pub fn write_underlying_asset(env: &Env, asset: &Address) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&CommonDataKey::UnderlyingAsset, asset);
}

pub fn read_incentives(env: &Env) -> Option<Address> {
    bump_instance(env);

    env.storage().instance().get(&CommonDataKey::Incentives)
}

pub fn write_incentives(env: &Env, incentives: &Address) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&CommonDataKey::Incentives, incentives);
}

pub fn read_borrow_allowance(env: &Env, delegator: Address, delegatee: Address) -> i128 {
    let key = CommonDataKey::BorrowAllowance(BorrowAllowanceKey {
        delegator,
        delegatee,
    });
    let allowance = env.storage().persistent().get(&key);

    if allowance.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    allowance.unwrap_or(0)
}

pub fn write_borrow_allowance(env: &Env, delegator: Address, delegatee: Address, amount: i128) {
    let key = CommonDataKey::BorrowAllowance(BorrowAllowanceKey {
        delegator,
        delegatee,
    });
    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn read_decimal(env: &Env) -> u32 {
    let util = TokenUtils::new(env);
    util.metadata().get_metadata().decimal
}

pub fn read_name(env: &Env) -> String {
    let util = TokenUtils::new(env);
    util.metadata().get_metadata().name
}

pub fn read_symbol(env: &Env) -> String {
    let util = TokenUtils::new(env);
    util.metadata().get_metadata().symbol
}

pub fn write_metadata(env: &Env, metadata: TokenMetadata) {
    let util = TokenUtils::new(env);
    util.metadata().set_metadata(&metadata);
}
