// Label formatting shared by legend and tooltip text

/// Two decimal places, exact ties rounded away from zero (`0.125` → `"0.13"`).
///
/// Rounding looks at the exact decimal expansion of the binary value, so
/// `1.005` (stored just below) stays `"1.00"`.
pub fn fixed2(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.60}", value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut digits: Vec<char> = whole.chars().chain(fraction.chars().take(2)).collect();

    if fraction.chars().nth(2).is_some_and(|d| d >= '5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, '1');
                break;
            }
            i -= 1;
            if digits[i] == '9' {
                digits[i] = '0';
            } else {
                digits[i] = char::from(digits[i] as u8 + 1);
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let whole: String = digits[..split].iter().collect();
    let fraction: String = digits[split..].iter().collect();
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{whole}.{fraction}")
}
