//! Display formatting shared by the terminal and web dashboards

/// Message shown when a search matches no coin
pub const NO_COINS_MESSAGE: &str = "No coins found matching your search.";

/// Message shown when the ATM filter leaves nothing
pub const NO_ATMS_MESSAGE: &str = "No ATMs found.";

/// Format a USD price: thousands separators, 2 to 6 fraction digits
///
/// ```
/// use localcoin::format::format_price;
/// assert_eq!(format_price(43210.5), "$43,210.50");
/// assert_eq!(format_price(0.000123), "$0.000123");
/// ```
pub fn format_price(price: f64) -> String {
    let fixed = format!("{:.6}", price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < 2 {
        frac.push('0');
    }

    let sign = if price < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    format!("{}${}.{}", sign, group_thousands(int_part), frac)
}

/// Format a 24h change with an explicit sign: `+1.23%`, `-0.45%`
pub fn format_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{:.2}%", change)
    } else {
        format!("{:.2}%", change)
    }
}

/// "1 ATM found" / "3 ATMs found"
pub fn pluralize_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {} found", count, noun)
    } else {
        format!("{} {}s found", count, noun)
    }
}

/// "Showing 3 of 10 coins"
pub fn showing_summary(shown: usize, total: usize) -> String {
    format!("Showing {} of {} coins", shown, total)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(67000.0), "$67,000.00");
        assert_eq!(format_price(1.0), "$1.00");
        assert_eq!(format_price(0.16), "$0.16");
        assert_eq!(format_price(0.1234567), "$0.123457");
        assert_eq!(format_price(1234567.891), "$1,234,567.891");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(-12.5), "-$12.50");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(1.234), "+1.23%");
        assert_eq!(format_change(0.0), "+0.00%");
        assert_eq!(format_change(-0.456), "-0.46%");
    }

    #[test]
    fn test_pluralize_count() {
        assert_eq!(pluralize_count(1, "ATM"), "1 ATM found");
        assert_eq!(pluralize_count(0, "ATM"), "0 ATMs found");
        assert_eq!(pluralize_count(5, "ATM"), "5 ATMs found");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("123456"), "123,456");
    }
}
