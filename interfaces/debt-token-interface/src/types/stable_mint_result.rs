use soroban_sdk::contracttype;

#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct StableMintResult {
    pub is_first_borrow: bool,
    /// Stored principal before the mint
    pub previous_balance: i128,
    /// Principal after accrual and the minted amount
    pub current_balance: i128,
    /// Interest accrued on the account since its previous mutation
    pub balance_increase: i128,
    pub user_rate: i128,
    pub total_supply: i128,
    pub avg_rate: i128,
}
