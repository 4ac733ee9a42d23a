#![deny(warnings)]
#![no_std]

use incentives_interface::IncentivesControllerTrait;
use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::storage::*;

mod storage;

pub use storage::HandledAction;

#[contract]
pub struct IncentivesMock;

#[contractimpl]
impl IncentivesControllerTrait for IncentivesMock {
    fn handle_action(env: Env, account: Address, previous_balance: i128, new_balance: i128) {
        if read_should_fail(&env) {
            panic!("incentives-mock: failure requested");
        }

        write_last_action(
            &env,
            &HandledAction {
                account,
                previous_balance,
                new_balance,
            },
        );
        write_actions_count(&env, read_actions_count(&env) + 1);
    }
}

#[contractimpl]
impl IncentivesMock {
    /// Makes every following `handle_action` panic
    pub fn set_should_fail(env: Env, should_fail: bool) {
        write_should_fail(&env, should_fail);
    }

    pub fn last_action(env: Env) -> Option<HandledAction> {
        read_last_action(&env)
    }

    pub fn actions_count(env: Env) -> u32 {
        read_actions_count(&env)
    }
}
