use soroban_sdk::contracttype;

#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct StableBurnResult {
    /// Stored principal before the burn
    pub previous_balance: i128,
    /// Principal after accrual and the burnt amount
    pub current_balance: i128,
    /// Interest accrued on the account since its previous mutation
    pub balance_increase: i128,
    pub total_supply: i128,
    pub avg_rate: i128,
    /// Ledger totals were floored to zero because the burnt account's
    /// share of the weighted rate exceeded the averaged book
    pub clamped: bool,
}
