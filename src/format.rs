//! Currency display for summary lines and chart captions.

/// Formats an amount as dollars with two decimals and comma-grouped
/// thousands: `$2,200.00`, `-$1,234.56`.
pub fn dollars(amount: f64) -> String {
    let raw = format!("{:.2}", amount.abs());
    let (whole, cents) = match raw.split_once('.') {
        Some((whole, cents)) => (whole, cents),
        None => (raw.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}
