#![deny(warnings)]
#![no_std]

use common::Error;
use soroban_sdk::{contractclient, contractspecfn, Env};
use types::{InterestRates, RateParams};

pub mod types;

pub struct Spec;

/// Source of the reserve's current rates. Read-only from the reserve's point of view.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "RateStrategyClient")]
pub trait RateStrategyTrait {
    fn calculate_interest_rates(env: Env, params: RateParams) -> Result<InterestRates, Error>;

    fn base_stable_borrow_rate(env: Env) -> i128;
}
