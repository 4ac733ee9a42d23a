use soroban_sdk::{contracttype, Address, Env};

#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct HandledAction {
    pub account: Address,
    pub previous_balance: i128,
    pub new_balance: i128,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    ShouldFail,
    LastAction,
    ActionsCount,
}

pub fn read_should_fail(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::ShouldFail)
        .unwrap_or(false)
}

pub fn write_should_fail(env: &Env, should_fail: bool) {
    env.storage()
        .instance()
        .set(&DataKey::ShouldFail, &should_fail);
}

pub fn read_last_action(env: &Env) -> Option<HandledAction> {
    env.storage().instance().get(&DataKey::LastAction)
}

pub fn write_last_action(env: &Env, action: &HandledAction) {
    env.storage().instance().set(&DataKey::LastAction, action);
}

pub fn read_actions_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ActionsCount)
        .unwrap_or(0)
}

pub fn write_actions_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ActionsCount, &count);
}
