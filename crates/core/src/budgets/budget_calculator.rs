//! Budget-vs-spend arithmetic.
//!
//! Pure functions only; the service feeds them the stored budget amount and
//! the spend total for the period.

use rust_decimal::Decimal;

use crate::budgets::budgets_model::{BudgetCalculation, BudgetStatus};
use crate::constants::{
    BUDGET_PERCENTAGE_CAP, BUDGET_WARNING_THRESHOLD_PERCENT, DISPLAY_DECIMAL_PRECISION,
};

/// Classifies spend against a budget amount. Negative inputs count as zero.
pub fn budget_status(amount: Decimal, spend: Decimal) -> BudgetStatus {
    let amount = amount.max(Decimal::ZERO);
    let spend = spend.max(Decimal::ZERO);

    if amount <= Decimal::ZERO {
        return BudgetStatus::NotSet;
    }
    if spend >= amount {
        return BudgetStatus::Danger;
    }
    if usage_percent(amount, spend) >= Decimal::from(BUDGET_WARNING_THRESHOLD_PERCENT) {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Safe
    }
}

/// Share of the budget already spent, in percent.
///
/// Requires `0 <= spend < amount`: the ratio then stays below one, so
/// neither step can overflow whatever the magnitude of the inputs.
fn usage_percent(amount: Decimal, spend: Decimal) -> Decimal {
    spend
        .checked_div(amount)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Remaining budget, usage percentage (capped, 2 dp) and status for one period.
pub fn calculate(amount: Decimal, spend: Decimal) -> BudgetCalculation {
    let amount = amount.max(Decimal::ZERO);
    let spend = spend.max(Decimal::ZERO);
    let status = budget_status(amount, spend);

    let (remaining, percentage) = match status {
        BudgetStatus::NotSet => (Decimal::ZERO, Decimal::ZERO),
        BudgetStatus::Danger => (Decimal::ZERO, Decimal::from(BUDGET_PERCENTAGE_CAP)),
        BudgetStatus::Warning | BudgetStatus::Safe => (
            amount - spend,
            usage_percent(amount, spend).min(Decimal::from(BUDGET_PERCENTAGE_CAP)),
        ),
    };

    BudgetCalculation {
        remaining: remaining.round_dp(DISPLAY_DECIMAL_PRECISION),
        percentage: percentage.round_dp(DISPLAY_DECIMAL_PRECISION),
        status,
    }
}
