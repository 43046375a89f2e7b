//! Currency display formatting.

/// Shown when a price is missing. The upstream feed writes 0 when it could
/// not extract a price, so a zero amount renders the same way.
const MISSING_AMOUNT: &str = "N/A";

/// Format an optional amount as US-dollar currency: `$` prefix, two decimal
/// places, comma thousands grouping. `None`, zero and non-finite amounts
/// all render as "N/A".
pub fn format_currency(amount: Option<f64>) -> String {
    let amount = match amount {
        Some(a) if a != 0.0 && a.is_finite() => a,
        _ => return MISSING_AMOUNT.to_string(),
    };

    let sign = if amount < 0.0 { "-" } else { "" };
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let dollars = total_cents / 100;
    let cents = total_cents % 100;

    format!("{}${}.{:02}", sign, group_thousands(dollars), cents)
}

/// Insert comma separators into a whole-dollar amount.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
