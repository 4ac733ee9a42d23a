use common::{Error, RayMath};
use debt_token_interface::types::variable_burn_result::VariableBurnResult;
use debt_token_interface::types::variable_mint_result::VariableMintResult;
use soroban_sdk::Env;

use crate::storage::VariableDebtAccount;

pub struct VariableMint {
    pub account: VariableDebtAccount,
    pub scaled_total_supply: i128,
    pub result: VariableMintResult,
}

pub struct VariableBurn {
    pub account: VariableDebtAccount,
    pub scaled_total_supply: i128,
    pub result: VariableBurnResult,
}

/// Adds `amount` of debt at the current `index`
pub fn calc_mint(
    env: &Env,
    account: &VariableDebtAccount,
    scaled_total_supply: i128,
    amount: i128,
    index: i128,
) -> Result<VariableMint, Error> {
    if amount <= 0 {
        return Err(Error::InvalidMintAmount);
    }

    let amount_scaled = amount.ray_div(env, index)?;
    if amount_scaled == 0 {
        return Err(Error::InvalidMintAmount);
    }

    let balance_increase = accrued_since_last_update(env, account, index)?;

    let scaled_balance = account
        .scaled_balance
        .checked_add(amount_scaled)
        .ok_or(Error::ArithmeticOverflow)?;
    let scaled_total_supply = scaled_total_supply
        .checked_add(amount_scaled)
        .ok_or(Error::ArithmeticOverflow)?;

    Ok(VariableMint {
        account: VariableDebtAccount {
            scaled_balance,
            last_index: index,
        },
        scaled_total_supply,
        result: VariableMintResult {
            is_first_borrow: account.scaled_balance == 0,
            balance_increase,
            scaled_total_supply,
        },
    })
}

/// Repays `amount` of debt at the current `index`
pub fn calc_burn(
    env: &Env,
    account: &VariableDebtAccount,
    scaled_total_supply: i128,
    amount: i128,
    index: i128,
) -> Result<VariableBurn, Error> {
    if amount <= 0 {
        return Err(Error::InvalidBurnAmount);
    }

    let amount_scaled = amount.ray_div(env, index)?;
    if amount_scaled == 0 {
        return Err(Error::InvalidBurnAmount);
    }

    if amount_scaled > account.scaled_balance {
        return Err(Error::InsufficientDebt);
    }

    let balance_increase = accrued_since_last_update(env, account, index)?;

    let scaled_balance = account.scaled_balance - amount_scaled;
    let scaled_total_supply = scaled_total_supply
        .checked_sub(amount_scaled)
        .filter(|supply| !supply.is_negative())
        .ok_or(Error::ArithmeticOverflow)?;

    Ok(VariableBurn {
        account: VariableDebtAccount {
            scaled_balance,
            last_index: index,
        },
        scaled_total_supply,
        result: VariableBurnResult {
            balance_increase,
            scaled_total_supply,
        },
    })
}

/// Interest accrued by the account between its last mutation and `index`
pub fn accrued_since_last_update(
    env: &Env,
    account: &VariableDebtAccount,
    index: i128,
) -> Result<i128, Error> {
    if account.scaled_balance == 0 {
        return Ok(0);
    }

    if index < account.last_index {
        return Err(Error::IndexDecreased);
    }

    let current = account.scaled_balance.ray_mul_floor(env, index)?;
    let previous = account.scaled_balance.ray_mul_floor(env, account.last_index)?;

    Ok(current - previous)
}
