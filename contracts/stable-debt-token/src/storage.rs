use common_token::storage::{bump_instance, HIGH_USER_DATA_BUMP_LEDGERS, LOW_USER_DATA_BUMP_LEDGERS};
use soroban_sdk::{contracttype, Address, Env};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[contracttype]
pub struct StableDebtAccount {
    pub principal: i128,
    pub rate: i128,
    pub last_update_timestamp: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[contracttype]
pub struct StableTotals {
    pub principal_supply: i128,
    pub avg_rate: i128,
    pub last_update_timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Account(Address),
    Totals,
}

pub fn read_account(env: &Env, id: &Address) -> StableDebtAccount {
    let key = DataKey::Account(id.clone());
    let account = env.storage().persistent().get(&key);

    if account.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    account.unwrap_or_default()
}

pub fn write_account(env: &Env, id: &Address, account: &StableDebtAccount) {
    let key = DataKey::Account(id.clone());
    env.storage().persistent().set(&key, account);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn read_totals(env: &Env) -> StableTotals {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Totals)
        .unwrap_or_default()
}

pub fn write_totals(env: &Env, totals: &StableTotals) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Totals, totals);
}
