use soroban_sdk::contracttype;

/// Point-in-time view of a reserve. Always recomputed, never stored.
///
/// Rates, indices and utilizations are rays, amounts are token units.
#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct ReserveSnapshot {
    pub reserve_factor: u32,
    pub unbacked: i128,
    pub available_liquidity: i128,
    pub total_liquidity: i128,
    pub borrow_utilization: i128,
    pub supply_utilization: i128,
    pub total_stable_debt: i128,
    pub total_variable_debt: i128,
    pub principal_stable_debt: i128,
    pub scaled_variable_debt: i128,
    pub liquidity_rate: i128,
    pub variable_borrow_rate: i128,
    pub stable_borrow_rate: i128,
    pub average_stable_rate: i128,
    pub market_stable_rate: i128,
    pub liquidity_index: i128,
    pub variable_borrow_index: i128,
    pub last_update_timestamp: u64,
    pub stable_debt_last_updated: u64,
}
