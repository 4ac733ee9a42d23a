use soroban_sdk::{contracttype, Env};

#[derive(Debug, Clone, Default)]
#[contracttype]
pub struct ConfiguredRates {
    pub variable_borrow_rate: i128,
    pub stable_borrow_rate: i128,
    pub base_stable_borrow_rate: i128,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Rates,
}

pub fn read_rates(env: &Env) -> ConfiguredRates {
    env.storage()
        .instance()
        .get(&DataKey::Rates)
        .unwrap_or_default()
}

pub fn write_rates(env: &Env, rates: &ConfiguredRates) {
    env.storage().instance().set(&DataKey::Rates, rates);
}
