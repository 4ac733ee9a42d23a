#![deny(warnings)]
#![no_std]

use common::Error;
use common_token::delegation::{approve_delegation, spend_delegation_if_needed};
use common_token::incentives::notify_incentives;
use common_token::storage::*;
use common_token::{init_debt_token, verify_caller_is_pool};
use debt_token_interface::types::stable_burn_result::StableBurnResult;
use debt_token_interface::types::stable_mint_result::StableMintResult;
use debt_token_interface::types::stable_supply_data::StableSupplyData;
use debt_token_interface::StableDebtTokenTrait;
use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

use crate::accounting::{accrue_account, accrue_totals, calc_burn, calc_mint};
use crate::storage::*;

mod accounting;
mod event;
mod storage;

#[contract]
pub struct StableDebtToken;

#[contractimpl]
impl StableDebtTokenTrait for StableDebtToken {
    /// Initializes the stable debt token contract.
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

    /// Opens `amount` of debt at the fixed `rate` for `on_behalf_of`.
    ///
    /// The account's accrued interest is capitalized and its rate becomes the
    /// balance-weighted average of the old and the new rate. The ledger average
    /// is rebased the same way.
    ///
    /// # Arguments
    ///
    /// - caller - Must be the pool.
    /// - user - The account receiving the borrowed funds.
    /// - on_behalf_of - The account the debt is charged to. When it differs from `user`,
    ///   `user` spends the borrow allowance given by `on_behalf_of`.
    /// - amount - The amount of debt in underlying units.
    /// - rate - The stable rate of the new debt, in rays.
    ///
    /// # Errors
    ///
    /// - `CallerMustBePool` if `caller` is not the pool.
    /// - `InvalidMintAmount` if the amount is not positive.
    /// - `InvalidRate` if the rate is not positive.
    /// - `InsufficientBorrowAllowance` if a delegated borrow exceeds the allowance.
    ///
    fn mint(
        env: Env,
        caller: Address,
        user: Address,
        on_behalf_of: Address,
        amount: i128,
        rate: i128,
    ) -> Result<StableMintResult, Error> {
        verify_caller_is_pool(&env, &caller)?;

        let now = env.ledger().timestamp();
        let account = read_account(&env, &on_behalf_of);
        let mint = calc_mint(&env, &account, &read_totals(&env), amount, rate, now)?;

        spend_delegation_if_needed(&env, &user, &on_behalf_of, amount)?;

        write_account(&env, &on_behalf_of, &mint.account);
        write_totals(&env, &mint.totals);

        event::mint(
            &env,
            user,
            on_behalf_of.clone(),
            amount,
            mint.result.balance_increase,
            mint.result.user_rate,
            mint.result.avg_rate,
            mint.result.total_supply,
        );
        notify_incentives(
            &env,
            &on_behalf_of,
            account.principal,
            mint.account.principal,
        );

        Ok(mint.result)
    }

    /// Repays `amount` of the debt owed by `from`.
    ///
    /// Repaying the whole accrued balance clears the account's rate and timestamp.
    ///
    /// # Errors
    ///
    /// - `CallerMustBePool` if `caller` is not the pool.
    /// - `InvalidBurnAmount` if the amount is not positive.
    /// - `InsufficientDebt` if the amount exceeds the accrued debt of `from`.
    ///
    fn burn(
        env: Env,
        caller: Address,
        from: Address,
        amount: i128,
    ) -> Result<StableBurnResult, Error> {
        verify_caller_is_pool(&env, &caller)?;

        let now = env.ledger().timestamp();
        let account = read_account(&env, &from);
        let burn = calc_burn(&env, &account, &read_totals(&env), amount, now)?;

        if burn.result.clamped {
            log!(
                &env,
                "stable-debt-token: totals clamped to zero",
                from,
                amount
            );
        }

        write_account(&env, &from, &burn.account);
        write_totals(&env, &burn.totals);

        event::burn(
            &env,
            from.clone(),
            amount,
            burn.result.balance_increase,
            burn.result.avg_rate,
            burn.result.total_supply,
        );
        notify_incentives(&env, &from, account.principal, burn.account.principal);

        Ok(burn.result)
    }

    /// Debt of `id` compounded at its own rate up to the current ledger timestamp
    fn balance_of(env: Env, id: Address) -> Result<i128, Error> {
        let account = read_account(&env, &id);

        Ok(accrue_account(&env, &account, env.ledger().timestamp())?.current_balance)
    }

    fn principal_balance_of(env: Env, id: Address) -> i128 {
        read_account(&env, &id).principal
    }

    fn get_user_stable_rate(env: Env, id: Address) -> i128 {
        read_account(&env, &id).rate
    }

    fn get_user_last_updated(env: Env, id: Address) -> u64 {
        read_account(&env, &id).last_update_timestamp
    }

    /// Stored totals with the principal supply compounded at the average rate
    fn get_supply_data(env: Env) -> Result<StableSupplyData, Error> {
        let totals = read_totals(&env);
        let total_supply = accrue_totals(&env, &totals, env.ledger().timestamp())?;

        Ok(StableSupplyData {
            principal_supply: totals.principal_supply,
            total_supply,
            avg_rate: totals.avg_rate,
            last_update_timestamp: totals.last_update_timestamp,
        })
    }

    fn get_total_supply_and_avg_rate(env: Env) -> Result<(i128, i128), Error> {
        let totals = read_totals(&env);
        let total_supply = accrue_totals(&env, &totals, env.ledger().timestamp())?;

        Ok((total_supply, totals.avg_rate))
    }

    fn total_supply(env: Env) -> Result<i128, Error> {
        accrue_totals(&env, &read_totals(&env), env.ledger().timestamp())
    }

    fn get_average_stable_rate(env: Env) -> i128 {
        read_totals(&env).avg_rate
    }

    fn get_total_supply_last_updated(env: Env) -> u64 {
        read_totals(&env).last_update_timestamp
    }

    /// Allows `delegatee` to borrow up to `amount` charged to `delegator`.
    ///
    /// # Errors
    ///
    /// Returns `NegativeAmount` if the amount is negative.
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
