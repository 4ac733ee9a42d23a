#![deny(warnings)]
#![no_std]

pub mod types;

// Each trait lives in its own module because `contractspecfn` emits
// module-level spec constants named after the trait methods.
mod variable {
    use crate::types::variable_burn_result::VariableBurnResult;
    use crate::types::variable_mint_result::VariableMintResult;
    use common::Error;
    use soroban_sdk::{contractclient, contractspecfn, Address, Env, String};

    pub struct VariableDebtSpec;

    /// Interface for the variable rate debt token
    #[contractspecfn(name = "VariableDebtSpec", export = false)]
    #[contractclient(name = "VariableDebtTokenClient")]
    pub trait VariableDebtTokenTrait {
        fn initialize(
            env: Env,
            name: String,
            symbol: String,
            pool: Address,
            underlying_asset: Address,
            incentives: Option<Address>,
        ) -> Result<(), Error>;

        fn version() -> u32;

        fn mint(
            env: Env,
            caller: Address,
            user: Address,
            on_behalf_of: Address,
            amount: i128,
            index: i128,
        ) -> Result<VariableMintResult, Error>;

        fn burn(
            env: Env,
            caller: Address,
            from: Address,
            amount: i128,
            index: i128,
        ) -> Result<VariableBurnResult, Error>;

        fn balance_of(env: Env, id: Address, index: i128) -> Result<i128, Error>;

        fn total_supply(env: Env, index: i128) -> Result<i128, Error>;

        fn scaled_balance_of(env: Env, id: Address) -> i128;

        fn scaled_total_supply(env: Env) -> i128;

        fn scaled_user_balance_and_supply(env: Env, id: Address) -> (i128, i128);

        fn get_previous_index(env: Env, id: Address) -> i128;

        fn approve_delegation(
            env: Env,
            delegator: Address,
            delegatee: Address,
            amount: i128,
        ) -> Result<(), Error>;

        fn borrow_allowance(env: Env, delegator: Address, delegatee: Address) -> i128;

        fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error>;

        fn transfer_from(
            env: Env,
            spender: Address,
            from: Address,
            to: Address,
            amount: i128,
        ) -> Result<(), Error>;

        fn approve(
            env: Env,
            from: Address,
            spender: Address,
            amount: i128,
            expiration_ledger: u32,
        ) -> Result<(), Error>;

        fn allowance(env: Env, from: Address, spender: Address) -> Result<i128, Error>;

        fn increase_allowance(
            env: Env,
            from: Address,
            spender: Address,
            amount: i128,
        ) -> Result<(), Error>;

        fn decrease_allowance(
            env: Env,
            from: Address,
            spender: Address,
            amount: i128,
        ) -> Result<(), Error>;

        fn decimals(env: Env) -> u32;

        fn name(env: Env) -> String;

        fn symbol(env: Env) -> String;

        fn pool(env: Env) -> Result<Address, Error>;

        fn underlying_asset(env: Env) -> Result<Address, Error>;

        fn incentives(env: Env) -> Option<Address>;
    }
}

mod stable {
    use crate::types::stable_burn_result::StableBurnResult;
    use crate::types::stable_mint_result::StableMintResult;
    use crate::types::stable_supply_data::StableSupplyData;
    use common::Error;
    use soroban_sdk::{contractclient, contractspecfn, Address, Env, String};

    pub struct StableDebtSpec;

    /// Interface for the stable rate debt token
    #[contractspecfn(name = "StableDebtSpec", export = false)]
    #[contractclient(name = "StableDebtTokenClient")]
    pub trait StableDebtTokenTrait {
        fn initialize(
            env: Env,
            name: String,
            symbol: String,
            pool: Address,
            underlying_asset: Address,
            incentives: Option<Address>,
        ) -> Result<(), Error>;

        fn version() -> u32;

        fn mint(
            env: Env,
            caller: Address,
            user: Address,
            on_behalf_of: Address,
            amount: i128,
            rate: i128,
        ) -> Result<StableMintResult, Error>;

        fn burn(
            env: Env,
            caller: Address,
            from: Address,
            amount: i128,
        ) -> Result<StableBurnResult, Error>;

        fn balance_of(env: Env, id: Address) -> Result<i128, Error>;

        fn principal_balance_of(env: Env, id: Address) -> i128;

        fn get_user_stable_rate(env: Env, id: Address) -> i128;

        fn get_user_last_updated(env: Env, id: Address) -> u64;

        fn get_supply_data(env: Env) -> Result<StableSupplyData, Error>;

        fn get_total_supply_and_avg_rate(env: Env) -> Result<(i128, i128), Error>;

        fn total_supply(env: Env) -> Result<i128, Error>;

        fn get_average_stable_rate(env: Env) -> i128;

        fn get_total_supply_last_updated(env: Env) -> u64;

        fn approve_delegation(
            env: Env,
            delegator: Address,
            delegatee: Address,
            amount: i128,
        ) -> Result<(), Error>;

        fn borrow_allowance(env: Env, delegator: Address, delegatee: Address) -> i128;

        fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error>;

        fn transfer_from(
            env: Env,
            spender: Address,
            from: Address,
            to: Address,
            amount: i128,
        ) -> Result<(), Error>;

        fn approve(
            env: Env,
            from: Address,
            spender: Address,
            amount: i128,
            expiration_ledger: u32,
        ) -> Result<(), Error>;

        fn allowance(env: Env, from: Address, spender: Address) -> Result<i128, Error>;

        fn increase_allowance(
            env: Env,
            from: Address,
            spender: Address,
            amount: i128,
        ) -> Result<(), Error>;

        fn decrease_allowance(
            env: Env,
            from: Address,
            spender: Address,
            amount: i128,
        ) -> Result<(), Error>;

        fn decimals(env: Env) -> u32;

        fn name(env: Env) -> String;

        fn symbol(env: Env) -> String;

        fn pool(env: Env) -> Result<Address, Error>;

        fn underlying_asset(env: Env) -> Result<Address, Error>;

        fn incentives(env: Env) -> Option<Address>;
    }
}

pub use stable::{StableDebtSpec, StableDebtTokenClient, StableDebtTokenTrait};
pub use variable::{VariableDebtSpec, VariableDebtTokenClient, VariableDebtTokenTrait};
