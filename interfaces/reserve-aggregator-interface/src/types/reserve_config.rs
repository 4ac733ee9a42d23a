use soroban_sdk::{contracttype, Address};

#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct ReserveConfig {
    /// Holder of the reserve's underlying liquidity (the receipt token contract)
    pub receipt_token: Address,
    pub stable_debt_token: Address,
    pub variable_debt_token: Address,
    pub rate_strategy: Address,
    /// Share of interest kept by the protocol, 1% - 100, 100% - 10_000
    pub reserve_factor: u32,
}
