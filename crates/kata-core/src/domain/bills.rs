//! Greedy change making

use crate::constants::BILL_DENOMINATIONS;

/// Minimum number of bills paying exactly `amount`
///
/// Greedy is optimal for the fixed denominations 100, 20, 10, 5, 1.
pub fn count_bills(amount: u64) -> u64 {
    BILL_DENOMINATIONS
        .iter()
        .fold((0, amount), |(bills, rest), &denomination| {
            (bills + rest / denomination, rest % denomination)
        })
        .0
}
