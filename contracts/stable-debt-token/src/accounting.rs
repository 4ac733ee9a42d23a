use common::{
    compounded_interest_between, rate_from_weight, rate_weight, weighted_average, Error, RayMath,
};
use debt_token_interface::types::stable_burn_result::StableBurnResult;
use debt_token_interface::types::stable_mint_result::StableMintResult;
use soroban_sdk::Env;

use crate::storage::{StableDebtAccount, StableTotals};

pub struct AccruedBalance {
    pub previous_balance: i128,
    pub current_balance: i128,
    pub balance_increase: i128,
}

pub struct StableMint {
    pub account: StableDebtAccount,
    pub totals: StableTotals,
    pub result: StableMintResult,
}

pub struct StableBurn {
    pub account: StableDebtAccount,
    pub totals: StableTotals,
    pub result: StableBurnResult,
}

/// Principal of the account compounded at its own rate up to `now`
pub fn accrue_account(
    env: &Env,
    account: &StableDebtAccount,
    now: u64,
) -> Result<AccruedBalance, Error> {
    if account.principal == 0 {
        return Ok(AccruedBalance {
            previous_balance: 0,
            current_balance: 0,
            balance_increase: 0,
        });
    }

    let interest =
        compounded_interest_between(env, account.rate, account.last_update_timestamp, now)?;
    let current_balance = account.principal.ray_mul(env, interest)?;

    Ok(AccruedBalance {
        previous_balance: account.principal,
        current_balance,
        balance_increase: current_balance - account.principal,
    })
}

/// Principal supply compounded at the average rate up to `now`
pub fn accrue_totals(env: &Env, totals: &StableTotals, now: u64) -> Result<i128, Error> {
    if totals.principal_supply == 0 {
        return Ok(0);
    }

    let interest =
        compounded_interest_between(env, totals.avg_rate, totals.last_update_timestamp, now)?;

    totals.principal_supply.ray_mul(env, interest)
}

/// Opens `amount` of debt at `rate` for the account.
///
/// Both the account and the totals are rebased to `now` before the new debt
/// is merged in, so each average is weighted by the accrued balances.
pub fn calc_mint(
    env: &Env,
    account: &StableDebtAccount,
    totals: &StableTotals,
    amount: i128,
    rate: i128,
    now: u64,
) -> Result<StableMint, Error> {
    if amount <= 0 {
        return Err(Error::InvalidMintAmount);
    }

    if rate <= 0 {
        return Err(Error::InvalidRate);
    }

    let accrued = accrue_account(env, account, now)?;
    let previous_supply = accrue_totals(env, totals, now)?;

    let principal = accrued
        .current_balance
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;

    let user_rate = if accrued.current_balance == 0 {
        rate
    } else {
        weighted_average(
            env,
            &[(account.rate, accrued.current_balance), (rate, amount)],
        )?
    };

    let principal_supply = previous_supply
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    let avg_rate = weighted_average(env, &[(totals.avg_rate, previous_supply), (rate, amount)])?;

    Ok(StableMint {
        account: StableDebtAccount {
            principal,
            rate: user_rate,
            last_update_timestamp: now,
        },
        totals: StableTotals {
            principal_supply,
            avg_rate,
            last_update_timestamp: now,
        },
        result: StableMintResult {
            is_first_borrow: account.principal == 0,
            previous_balance: accrued.previous_balance,
            current_balance: principal,
            balance_increase: accrued.balance_increase,
            user_rate,
            total_supply: principal_supply,
            avg_rate,
        },
    })
}

/// Repays `amount` of the account's debt.
///
/// The account's share is removed from the average with its own rate. The
/// totals accrue at the average while accounts accrue at their own rates, so
/// a high-rate account can owe more than the averaged book; the totals are
/// then floored to zero and the result is flagged as `clamped`.
pub fn calc_burn(
    env: &Env,
    account: &StableDebtAccount,
    totals: &StableTotals,
    amount: i128,
    now: u64,
) -> Result<StableBurn, Error> {
    if amount <= 0 {
        return Err(Error::InvalidBurnAmount);
    }

    let accrued = accrue_account(env, account, now)?;
    if amount > accrued.current_balance {
        return Err(Error::InsufficientDebt);
    }

    let previous_supply = accrue_totals(env, totals, now)?;

    let (principal_supply, avg_rate, clamped) = if previous_supply <= amount {
        (0, 0, false)
    } else {
        let first_term = rate_weight(env, totals.avg_rate, previous_supply)?;
        let second_term = rate_weight(env, account.rate, amount)?;

        if second_term >= first_term {
            (0, 0, true)
        } else {
            let next_supply = previous_supply - amount;
            let next_avg_rate =
                rate_from_weight(env, &first_term.sub(&second_term), next_supply)?;

            if next_avg_rate == 0 {
                (0, 0, true)
            } else {
                (next_supply, next_avg_rate, false)
            }
        }
    };

    let account = if amount == accrued.current_balance {
        StableDebtAccount::default()
    } else {
        StableDebtAccount {
            principal: accrued.current_balance - amount,
            rate: account.rate,
            last_update_timestamp: now,
        }
    };

    Ok(StableBurn {
        result: StableBurnResult {
            previous_balance: accrued.previous_balance,
            current_balance: account.principal,
            balance_increase: accrued.balance_increase,
            total_supply: principal_supply,
            avg_rate,
            clamped,
        },
        account,
        totals: StableTotals {
            principal_supply,
            avg_rate,
            last_update_timestamp: now,
        },
    })
}
