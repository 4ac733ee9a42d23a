use common_token::storage::{bump_instance, HIGH_USER_DATA_BUMP_LEDGERS, LOW_USER_DATA_BUMP_LEDGERS};
use soroban_sdk::{contracttype, Address, Env};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[contracttype]
pub struct VariableDebtAccount {
    pub scaled_balance: i128,
    /// Borrow index of the last mint or burn
    pub last_index: i128,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Account(Address),
    ScaledTotalSupply,
}

pub fn read_account(env: &Env, id: &Address) -> VariableDebtAccount {
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

pub fn write_account(env: &Env, id: &Address, account: &VariableDebtAccount) {
    let key = DataKey::Account(id.clone());
    env.storage().persistent().set(&key, account);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn read_scaled_total_supply(env: &Env) -> i128 {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::ScaledTotalSupply)
        .unwrap_or(0)
}

pub fn write_scaled_total_supply(env: &Env, supply: i128) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::ScaledTotalSupply, &supply);
}
