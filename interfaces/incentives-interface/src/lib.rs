#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};

pub struct Spec;

/// Rewards hook notified by the debt ledgers after every balance change
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "IncentivesControllerClient")]
pub trait IncentivesControllerTrait {
    fn handle_action(env: Env, account: Address, previous_balance: i128, new_balance: i128);
}
