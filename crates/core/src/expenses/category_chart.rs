//! Per-category spending chart.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::expenses::expenses_model::{CategoryAggregate, CategoryTotal, ExpenseCategory};

/// Turns grouped store rows into the chart: one row per known category
/// (zero when absent), totals rounded for display, sorted by total
/// descending with ties kept in category order.
pub fn build_category_chart(rows: Vec<CategoryAggregate>) -> Vec<CategoryTotal> {
    let mut by_category: HashMap<ExpenseCategory, (Decimal, i64)> = HashMap::new();
    for row in rows {
        let entry = by_category.entry(row.category).or_insert((Decimal::ZERO, 0));
        entry.0 += row.total;
        entry.1 += row.count;
    }

    let mut chart: Vec<CategoryTotal> = ExpenseCategory::ALL
        .iter()
        .map(|category| {
            let (total, count) = by_category
                .get(category)
                .copied()
                .unwrap_or((Decimal::ZERO, 0));
            CategoryTotal {
                category: *category,
                total: total.round_dp(DISPLAY_DECIMAL_PRECISION),
                count,
            }
        })
        .collect();

    // Stable sort keeps declaration order for equal totals.
    chart.sort_by(|a, b| b.total.cmp(&a.total));
    chart
}
