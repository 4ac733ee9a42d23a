use soroban_sdk::contracttype;

/// Reserve state the strategy prices rates from. Amounts in token units, rates in rays.
#[derive(Debug, Clone)]
#[contracttype]
pub struct RateParams {
    pub available_liquidity: i128,
    pub unbacked: i128,
    pub total_stable_debt: i128,
    pub total_variable_debt: i128,
    pub average_stable_rate: i128,
    /// 1% - 100, 100% - 10_000
    pub reserve_factor: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct InterestRates {
    pub liquidity_rate: i128,
    pub stable_borrow_rate: i128,
    pub variable_borrow_rate: i128,
}
