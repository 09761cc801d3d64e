//! Display formatting in the Tunisian French locale

/// `+1.23%` / `-0.50%`
pub fn format_percent(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, value)
}

/// `285 437,50 TND`
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{},{} TND", sign, group_thousands(units), cents)
}

/// `4 523 000`
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1.234), "+1.23%");
        assert_eq!(format_percent(-0.5), "-0.50%");
        assert_eq!(format_percent(0.0), "+0.00%");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(285437.5), "285 437,50 TND");
        assert_eq!(format_currency(118.5), "118,50 TND");
        assert_eq!(format_currency(-900.0), "-900,00 TND");
        assert_eq!(format_currency(1_000_000.0), "1 000 000,00 TND");
        assert_eq!(format_currency(-0.001), "0,00 TND");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(4_523_000.0), "4 523 000");
        assert_eq!(format_number(2847.0), "2 847");
        assert_eq!(format_number(999.6), "1 000");
        assert_eq!(format_number(-12345.0), "-12 345");
    }
}
