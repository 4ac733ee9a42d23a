#![deny(warnings)]
#![no_std]

use common::{Error, RayMath};
use common_token::delegation::{approve_delegation, spend_delegation_if_needed};
use common_token::incentives::notify_incentives;
use common_token::storage::*;
use common_token::{init_debt_token, verify_caller_is_pool};
use debt_token_interface::types::variable_burn_result::VariableBurnResult;
use debt_token_interface::types::variable_mint_result::VariableMintResult;
use debt_token_interface::VariableDebtTokenTrait;
use soroban_sdk::{contract, contractimpl, Address, Env, String};

use crate::accounting::{calc_burn, calc_mint};
use crate::storage::*;

mod accounting;
mod event;
mod storage;

#[contract]
pub struct VariableDebtToken;

#[contractimpl]
impl VariableDebtTokenTrait for VariableDebtToken {
    /// Initializes the variable debt token contract.
    ///
    /// # Arguments
    ///
    /// - name - The name of the token.
    /// - symbol - The symbol of the token.
    /// - pool - The address of the pool contract, the only account allowed to mint and burn.
    /// - underlying_asset - The address of the borrowed asset. Decimals are taken from it.
    /// - incentives - Optional incentives controller notified on every balance change.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyInitialized` if the contract has already been initialized.
    ///
    /// # Panics
    ///
    /// Panics if name or symbol is empty
    ///
    fn initialize(
        env: Env,
        name: String,
        symbol: String,
        pool: Address,
        underlying_asset: Address,
        incentives: Option<Address>,
    ) -> Result<(), Error> {
        let decimal = init_debt_token(
            &env,
            name.clone(),
            symbol.clone(),
            &pool,
            &underlying_asset,
            &incentives,
        )?;

        event::initialized(&env, underlying_asset, pool, decimal, name, symbol);

        Ok(())
    }

    /// Returns the current version of the contract.
    fn version() -> u32 {
        1
    }

    /// Opens `amount` of debt for `on_behalf_of` at the current borrow index.
    ///
    /// # Arguments
    ///
    /// - caller - Must be the pool.
    /// - user - The account receiving the borrowed funds.
    /// - on_behalf_of - The account the debt is charged to. When it differs from `user`,
    ///   `user` spends the borrow allowance given by `on_behalf_of`.
    /// - amount - The amount of debt in underlying units.
    /// - index - The reserve variable borrow index.
    ///
    /// # Errors
    ///
    /// - `CallerMustBePool` if `caller` is not the pool.
    /// - `InvalidMintAmount` if the amount is not positive or rounds to zero scaled units.
    /// - `InsufficientBorrowAllowance` if a delegated borrow exceeds the allowance.
    ///
    fn mint(
        env: Env,
        caller: Address,
        user: Address,
        on_behalf_of: Address,
        amount: i128,
        index: i128,
    ) -> Result<VariableMintResult, Error> {
        verify_caller_is_pool(&env, &caller)?;

        let account = read_account(&env, &on_behalf_of);
        let mint = calc_mint(
            &env,
            &account,
            read_scaled_total_supply(&env),
            amount,
            index,
        )?;

        spend_delegation_if_needed(&env, &user, &on_behalf_of, amount)?;

        write_account(&env, &on_behalf_of, &mint.account);
        write_scaled_total_supply(&env, mint.scaled_total_supply);

        event::mint(
            &env,
            user,
            on_behalf_of.clone(),
            amount,
            mint.result.balance_increase,
            index,
        );
        notify_incentives(
            &env,
            &on_behalf_of,
            account.scaled_balance,
            mint.account.scaled_balance,
        );

        Ok(mint.result)
    }

    /// Repays `amount` of debt owed by `from` at the current borrow index.
    ///
    /// # Errors
    ///
    /// - `CallerMustBePool` if `caller` is not the pool.
    /// - `InvalidBurnAmount` if the amount is not positive or rounds to zero scaled units.
    /// - `InsufficientDebt` if the amount exceeds the debt of `from`.
    ///
    fn burn(
        env: Env,
        caller: Address,
        from: Address,
        amount: i128,
        index: i128,
    ) -> Result<VariableBurnResult, Error> {
        verify_caller_is_pool(&env, &caller)?;

        let account = read_account(&env, &from);
        let burn = calc_burn(
            &env,
            &account,
            read_scaled_total_supply(&env),
            amount,
            index,
        )?;

        write_account(&env, &from, &burn.account);
        write_scaled_total_supply(&env, burn.scaled_total_supply);

        event::burn(
            &env,
            from.clone(),
            amount,
            burn.result.balance_increase,
            index,
        );
        notify_incentives(
            &env,
            &from,
            account.scaled_balance,
            burn.account.scaled_balance,
        );

        Ok(burn.result)
    }

    /// Debt of `id` at the given borrow index, rounded down
    fn balance_of(env: Env, id: Address, index: i128) -> Result<i128, Error> {
        read_account(&env, &id)
            .scaled_balance
            .ray_mul_floor(&env, index)
    }

    fn total_supply(env: Env, index: i128) -> Result<i128, Error> {
        read_scaled_total_supply(&env).ray_mul_floor(&env, index)
    }

    fn scaled_balance_of(env: Env, id: Address) -> i128 {
        read_account(&env, &id).scaled_balance
    }

    fn scaled_total_supply(env: Env) -> i128 {
        read_scaled_total_supply(&env)
    }

    fn scaled_user_balance_and_supply(env: Env, id: Address) -> (i128, i128) {
        (
            read_account(&env, &id).scaled_balance,
            read_scaled_total_supply(&env),
        )
    }

    /// Borrow index of the last mint or burn of `id`, zero if there was none
    fn get_previous_index(env: Env, id: Address) -> i128 {
        read_account(&env, &id).last_index
    }

    /// Allows `delegatee` to borrow up to `amount` charged to `delegator`.
    ///
    /// # Errors
    ///
    /// Returns `NegativeAmount` if the amount is negative.
    ///
    /// # Panics
    ///
    /// Panics if `delegator` didn't authorize the call.
    ///
    fn approve_delegation(
        env: Env,
        delegator: Address,
        delegatee: Address,
        amount: i128,
    ) -> Result<(), Error> {
        approve_delegation(&env, &delegator, &delegatee, amount)?;

        event::borrow_allowance_delegated(&env, delegator, delegatee, amount);

        Ok(())
    }

    fn borrow_allowance(env: Env, delegator: Address, delegatee: Address) -> i128 {
        read_borrow_allowance(&env, delegator, delegatee)
    }

    fn transfer(_env: Env, _from: Address, _to: Address, _amount: i128) -> Result<(), Error> {
        Err(Error::TransferNotSupported)
    }

    fn transfer_from(
        _env: Env,
        _spender: Address,
        _from: Address,
        _to: Address,
        _amount: i128,
    ) -> Result<(), Error> {
        Err(Error::TransferNotSupported)
    }

    fn approve(
        _env: Env,
        _from: Address,
        _spender: Address,
        _amount: i128,
        _expiration_ledger: u32,
    ) -> Result<(), Error> {
        Err(Error::ApprovalNotSupported)
    }

    fn allowance(_env: Env, _from: Address, _spender: Address) -> Result<i128, Error> {
        Err(Error::AllowanceNotSupported)
    }

    fn increase_allowance(
        _env: Env,
        _from: Address,
        _spender: Address,
        _amount: i128,
    ) -> Result<(), Error> {
        Err(Error::AllowanceNotSupported)
    }

    fn decrease_allowance(
        _env: Env,
        _from: Address,
        _spender: Address,
        _amount: i128,
    ) -> Result<(), Error> {
        Err(Error::AllowanceNotSupported)
    }

    fn decimals(env: Env) -> u32 {
        read_decimal(&env)
    }

    fn name(env: Env) -> String {
        read_name(&env)
    }

    fn symbol(env: Env) -> String {
        read_symbol(&env)
    }

    fn pool(env: Env) -> Result<Address, Error> {
        read_pool(&env)
    }

    fn underlying_asset(env: Env) -> Result<Address, Error> {
        read_underlying_asset(&env)
    }

    fn incentives(env: Env) -> Option<Address> {
        read_incentives(&env)
    }
}
