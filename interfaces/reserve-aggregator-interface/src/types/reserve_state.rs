use common::RAY;
use soroban_sdk::{contracttype, Env};

/// Reserve state advanced by the pool as interest accrues
#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct ReserveState {
    pub liquidity_index: i128,
    pub variable_borrow_index: i128,
    /// Receipt tokens minted without underlying liquidity backing them yet
    pub unbacked: i128,
    pub last_update_timestamp: u64,
}

impl ReserveState {
    pub fn new(env: &Env) -> Self {
        Self {
            liquidity_index: RAY,
            variable_borrow_index: RAY,
            unbacked: 0,
            last_update_timestamp: env.ledger().timestamp(),
        }
    }
}
