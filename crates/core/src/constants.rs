/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Share of the budget (in percent) at which spending is flagged as a warning
pub const BUDGET_WARNING_THRESHOLD_PERCENT: i64 = 80;

/// Upper bound reported for budget usage percentage
pub const BUDGET_PERCENTAGE_CAP: i64 = 100;

/// Smallest accepted expense amount
pub const MIN_EXPENSE_AMOUNT: &str = "0.01";

pub const MAX_EXPENSE_TITLE_LENGTH: usize = 100;

pub const MIN_USER_NAME_LENGTH: usize = 2;
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Accepted range for period years
pub const MIN_PERIOD_YEAR: i32 = 2000;
pub const MAX_PERIOD_YEAR: i32 = 2100;
