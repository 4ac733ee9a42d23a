use soroban_sdk::contracttype;

#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct VariableMintResult {
    /// The account had no scaled balance before the mint
    pub is_first_borrow: bool,
    /// Interest accrued on the account since its previous mutation
    pub balance_increase: i128,
    pub scaled_total_supply: i128,
}
