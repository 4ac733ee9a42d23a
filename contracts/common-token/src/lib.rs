#![deny(warnings)]
#![no_std]

use common::Error;
use soroban_sdk::{token, Address, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;

use crate::storage::{has_pool, read_pool, write_incentives, write_metadata, write_pool};

pub mod delegation;
pub mod incentives;
pub mod storage;

/// Capability check guarding every mutating ledger entry point.
///
/// The caller identity is passed explicitly and compared with the pool
/// stored at initialization before any argument is looked at.
pub fn verify_caller_is_pool(e: &Env, caller: &Address) -> Result<(), Error> {
    let pool = read_pool(e)?;
    if *caller != pool {
        return Err(Error::CallerMustBePool);
    }

    pool.require_auth();

    Ok(())
}

pub fn require_nonnegative_amount(amount: i128) -> Result<(), Error> {
    if amount.is_negative() {
        return Err(Error::NegativeAmount);
    }

    Ok(())
}

/// Writes the configuration shared by both debt tokens.
/// Decimals follow the underlying asset.
pub fn init_debt_token(
    e: &Env,
    name: String,
    symbol: String,
    pool: &Address,
    underlying_asset: &Address,
    incentives: &Option<Address>,
) -> Result<u32, Error> {
    if has_pool(e) {
        return Err(Error::AlreadyInitialized);
    }

    if name.len() == 0 {
        panic!("debt-token: no name");
    }

    if symbol.len() == 0 {
        panic!("debt-token: no symbol");
    }

    let decimal = token::Client::new(e, underlying_asset).decimals();

    write_pool(e, pool);
    storage::write_underlying_asset(e, underlying_asset);
    if let Some(incentives) = incentives {
        write_incentives(e, incentives);
    }

    write_metadata(
        e,
        TokenMetadata {
            decimal,
            name,
            symbol,
        },
    );

    Ok(decimal)
}
