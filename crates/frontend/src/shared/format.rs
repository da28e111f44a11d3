//! Number formatting for the product table

/// Format a price with a dollar sign, two decimals and a thousands
/// separator: `1234.5` -> `"$1 234.50"`
pub fn format_price(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    // Insert a space every 3 digits from the end of the integer part
    let mut grouped = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push(' ');
        }
        grouped.push(*c);
    }
    let integer_grouped: String = grouped.chars().rev().collect();

    format!("${}.{}", integer_grouped, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(24.99), "$24.99");
        assert_eq!(format_price(1234.5), "$1 234.50");
        assert_eq!(format_price(1234567.891), "$1 234 567.89");
        assert_eq!(format_price(0.5), "$0.50");
    }
}
