/// Formats a price as whole currency units with `,` thousands separators.
///
/// Fractions are truncated toward zero, so `25999.9` renders as `25,999`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{}-", symbol);
    }
    let whole = amount.trunc() as i64;
    if whole < 0 {
        format!("-{}{}", symbol, group_thousands(whole.unsigned_abs()))
    } else {
        format!("{}{}", symbol, group_thousands(whole as u64))
    }
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_currency_truncates() {
        assert_eq!(format_currency(25999.9, "₹"), "₹25,999");
        assert_eq!(format_currency(10000.0, "$"), "$10,000");
        assert_eq!(format_currency(-1500.7, "₹"), "-₹1,500");
        assert_eq!(format_currency(f64::NAN, "₹"), "₹-");
    }
}
