//! Integer VND arithmetic and formatting.
//!
//! Amounts are whole Vietnamese dong stored as `i64`. Multipliers are
//! expressed as integer percentages or basis points so scaling stays exact
//! and matches floor semantics for positive amounts.

/// Scale an amount by an integer percentage, flooring the result.
///
/// # Examples
/// ```
/// use backend::domain::money::scale_by_percent;
///
/// assert_eq!(scale_by_percent(500_000, 70), 350_000);
/// assert_eq!(scale_by_percent(6_000_000, 85), 5_100_000);
/// ```
pub fn scale_by_percent(amount: i64, percent: u32) -> i64 {
    amount.saturating_mul(i64::from(percent)) / 100
}

/// Compute a fee from basis points of an amount, flooring the result.
///
/// # Examples
/// ```
/// use backend::domain::money::fee_from_basis_points;
///
/// // 2.5% of 5,000,000
/// assert_eq!(fee_from_basis_points(5_000_000, 250), 125_000);
/// assert_eq!(fee_from_basis_points(5_000_000, 0), 0);
/// ```
pub fn fee_from_basis_points(amount: i64, basis_points: u32) -> i64 {
    amount.saturating_mul(i64::from(basis_points)) / 10_000
}

/// Render an amount the way Vietnamese currency is customarily written,
/// with dot thousands separators and a trailing đ sign.
///
/// # Examples
/// ```
/// use backend::domain::money::format_vnd;
///
/// assert_eq!(format_vnd(5_000_000), "5.000.000đ");
/// assert_eq!(format_vnd(0), "0đ");
/// ```
pub fn format_vnd(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    let offset = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (index + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}đ")
    } else {
        format!("{grouped}đ")
    }
}
