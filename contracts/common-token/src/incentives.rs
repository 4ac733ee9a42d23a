use incentives_interface::IncentivesControllerClient;
use soroban_sdk::{log, Address, Env};

use crate::storage::read_incentives;

/// Notifies the configured incentives controller about a balance change.
///
/// A failing controller doesn't revert the ledger update.
pub fn notify_incentives(e: &Env, account: &Address, previous_balance: i128, new_balance: i128) {
    let incentives = match read_incentives(e) {
        Some(incentives) => incentives,
        None => return,
    };

    let result = IncentivesControllerClient::new(e, &incentives).try_handle_action(
        account,
        &previous_balance,
        &new_balance,
    );

    if result.is_err() {
        log!(e, "incentives: handle_action failed", incentives, account.clone());
    }
}
