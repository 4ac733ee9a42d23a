use common::Error;
use soroban_sdk::{Address, Env};

use crate::require_nonnegative_amount;
use crate::storage::{read_borrow_allowance, write_borrow_allowance};

/// Lets `delegatee` open debt charged to `delegator` up to `amount`.
/// Overwrites the previous allowance.
pub fn approve_delegation(
    e: &Env,
    delegator: &Address,
    delegatee: &Address,
    amount: i128,
) -> Result<(), Error> {
    delegator.require_auth();
    require_nonnegative_amount(amount)?;

    write_borrow_allowance(e, delegator.clone(), delegatee.clone(), amount);

    Ok(())
}

/// Consumes `amount` of the allowance `delegator` gave to `delegatee`.
/// Returns the remaining allowance.
pub fn decrease_borrow_allowance(
    e: &Env,
    delegator: &Address,
    delegatee: &Address,
    amount: i128,
) -> Result<i128, Error> {
    let allowance = read_borrow_allowance(e, delegator.clone(), delegatee.clone());
    if amount > allowance {
        return Err(Error::InsufficientBorrowAllowance);
    }

    let remaining = allowance - amount;
    write_borrow_allowance(e, delegator.clone(), delegatee.clone(), remaining);

    Ok(remaining)
}

/// Charges the delegation allowance when the borrower differs from the debtor.
pub fn spend_delegation_if_needed(
    e: &Env,
    user: &Address,
    on_behalf_of: &Address,
    amount: i128,
) -> Result<(), Error> {
    if user != on_behalf_of {
        decrease_borrow_allowance(e, on_behalf_of, user, amount)?;
    }

    Ok(())
}
