pub mod stable_burn_result;
pub mod stable_mint_result;
pub mod stable_supply_data;
pub mod variable_burn_result;
pub mod variable_mint_result;
