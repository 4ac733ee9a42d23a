use soroban_sdk::contracttype;

/// Stable ledger totals.
///
/// `total_supply` re-applies the average rate to `principal_supply` since
/// `last_update_timestamp`. It approximates, and can differ from, the sum
/// of per-account balances each compounded at its own rate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct StableSupplyData {
    pub principal_supply: i128,
    pub total_supply: i128,
    pub avg_rate: i128,
    pub last_update_timestamp: u64,
}
