use soroban_sdk::contracttype;

#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct VariableBurnResult {
    pub balance_increase: i128,
    pub scaled_total_supply: i128,
}
