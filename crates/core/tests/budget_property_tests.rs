//! Property-based tests for the budget calculator and the category chart.

use expense_insight_core::budgets::{calculate, BudgetStatus};
use expense_insight_core::expenses::{build_category_chart, CategoryAggregate, ExpenseCategory};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;

// =============================================================================
// Generators
// =============================================================================

/// Non-negative money amount with two decimal places.
fn arb_money() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strictly positive money amount.
fn arb_positive_money() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Any non-negative decimal, from the smallest fractions up to `Decimal::MAX`.
fn arb_any_decimal() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        (any::<u32>(), any::<u32>(), any::<u32>(), 0u32..=28)
            .prop_map(|(lo, mid, hi, scale)| Decimal::from_parts(lo, mid, hi, false, scale)),
        Just(Decimal::MAX),
        Just(Decimal::ZERO),
    ]
}

fn arb_category() -> impl Strategy<Value = ExpenseCategory> {
    prop_oneof![
        Just(ExpenseCategory::Food),
        Just(ExpenseCategory::Transport),
        Just(ExpenseCategory::Utilities),
        Just(ExpenseCategory::Other),
    ]
}

fn arb_aggregate() -> impl Strategy<Value = CategoryAggregate> {
    (arb_category(), arb_money(), 0i64..500).prop_map(|(category, total, count)| {
        CategoryAggregate {
            category,
            total,
            count,
        }
    })
}

// =============================================================================
// Budget calculator
// =============================================================================

proptest! {
    #[test]
    fn remaining_is_never_negative(amount in arb_money(), spend in arb_money()) {
        let calc = calculate(amount, spend);
        prop_assert!(calc.remaining >= Decimal::ZERO);
        prop_assert_eq!(calc.remaining, (amount - spend).max(Decimal::ZERO));
    }

    #[test]
    fn zero_budget_is_always_not_set(spend in arb_money()) {
        let calc = calculate(Decimal::ZERO, spend);
        prop_assert_eq!(calc.status, BudgetStatus::NotSet);
        prop_assert_eq!(calc.remaining, Decimal::ZERO);
        prop_assert_eq!(calc.percentage, Decimal::ZERO);
    }

    #[test]
    fn spend_at_or_over_budget_is_danger(amount in arb_positive_money(), extra in arb_money()) {
        let calc = calculate(amount, amount + extra);
        prop_assert_eq!(calc.status, BudgetStatus::Danger);
        prop_assert_eq!(calc.percentage, Decimal::ONE_HUNDRED);
    }

    #[test]
    fn spend_in_top_fifth_is_warning(amount in arb_positive_money(), frac in 80u32..100) {
        let spend = amount * Decimal::from(frac) / Decimal::ONE_HUNDRED;
        prop_assume!(spend < amount);
        let calc = calculate(amount, spend);
        prop_assert_eq!(calc.status, BudgetStatus::Warning);
    }

    #[test]
    fn percentage_stays_within_bounds(amount in arb_money(), spend in arb_money()) {
        let calc = calculate(amount, spend);
        prop_assert!(calc.percentage >= Decimal::ZERO);
        prop_assert!(calc.percentage <= Decimal::ONE_HUNDRED);
        prop_assert!(calc.percentage.scale() <= 2);
    }
}

proptest! {
    #[test]
    fn calculator_handles_any_magnitude(amount in arb_any_decimal(), spend in arb_any_decimal()) {
        let calc = calculate(amount, spend);
        prop_assert!(calc.remaining >= Decimal::ZERO);
        prop_assert!(calc.percentage >= Decimal::ZERO);
        prop_assert!(calc.percentage <= Decimal::ONE_HUNDRED);
        if amount.is_zero() {
            prop_assert_eq!(calc.status, BudgetStatus::NotSet);
        } else if spend >= amount {
            prop_assert_eq!(calc.status, BudgetStatus::Danger);
            prop_assert_eq!(calc.remaining, Decimal::ZERO);
        } else {
            prop_assert!(calc.status == BudgetStatus::Safe || calc.status == BudgetStatus::Warning);
        }
    }
}

// =============================================================================
// Category chart
// =============================================================================

proptest! {
    #[test]
    fn chart_contains_every_category_once(rows in prop::collection::vec(arb_aggregate(), 0..20)) {
        let chart = build_category_chart(rows);
        prop_assert_eq!(chart.len(), ExpenseCategory::ALL.len());
        let seen: HashSet<ExpenseCategory> = chart.iter().map(|r| r.category).collect();
        prop_assert_eq!(seen.len(), ExpenseCategory::ALL.len());
    }

    #[test]
    fn chart_is_sorted_by_total_descending(rows in prop::collection::vec(arb_aggregate(), 0..20)) {
        let chart = build_category_chart(rows);
        for pair in chart.windows(2) {
            prop_assert!(pair[0].total >= pair[1].total);
        }
    }

    #[test]
    fn chart_preserves_grand_total(rows in prop::collection::vec(arb_aggregate(), 0..20)) {
        let expected_total: Decimal = rows.iter().map(|r| r.total).sum();
        let expected_count: i64 = rows.iter().map(|r| r.count).sum();
        let chart = build_category_chart(rows);
        prop_assert_eq!(chart.iter().map(|r| r.total).sum::<Decimal>(), expected_total);
        prop_assert_eq!(chart.iter().map(|r| r.count).sum::<i64>(), expected_count);
    }
}
