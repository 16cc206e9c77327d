//! Locale-style number formatting.

const MAX_FRACTION_DIGITS: usize = 3;

/// Format a number with `,` thousands grouping and at most three fraction
/// digits, the way `en-US` locale formatting renders it.
///
/// Rounding is half-up on the shortest decimal form of `value`, so `1.0005`
/// becomes `1.001` even though its binary value sits just below the midpoint.
///
/// ```
/// use refdb_core::format_grouped;
///
/// assert_eq!(format_grouped(1234567.0), "1,234,567");
/// assert_eq!(format_grouped(-1234.5678), "-1,234.568");
/// ```
pub fn format_grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let shortest = value.abs().to_string();
    let (integer, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let (integer, fraction) = round_fraction(integer, fraction);
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(integer.len() + integer.len() / 3 + fraction.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(&integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Round the decimal digits `integer.fraction` half-up to
/// `MAX_FRACTION_DIGITS` fraction digits.
fn round_fraction(integer: &str, fraction: &str) -> (String, String) {
    if fraction.len() <= MAX_FRACTION_DIGITS {
        return (integer.to_string(), fraction.to_string());
    }
    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().take(MAX_FRACTION_DIGITS))
        .collect();
    let mut integer_len = integer.len();
    if fraction.as_bytes()[MAX_FRACTION_DIGITS] >= b'5' {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            integer_len += 1;
        }
    }
    let (integer, fraction) = digits.split_at(integer_len);
    let text = |digits: &[u8]| digits.iter().copied().map(char::from).collect();
    (text(integer), text(fraction))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
