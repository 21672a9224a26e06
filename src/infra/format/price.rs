/// Render a price for display, e.g. `1234.5` as `$1,234.50`.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return price.to_string();
    }

    let fixed = format!("{:.2}", price.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if price < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_grouping_and_cents() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(9.5), "$9.50");
        assert_eq!(format_price(999.999), "$1,000.00");
        assert_eq!(format_price(1234567.891), "$1,234,567.89");
    }
}
