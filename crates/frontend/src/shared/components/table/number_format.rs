//! Brazilian number formatting for tables and cards
//!
//! Thousands are grouped with `.` and decimals use `,`.

/// Formats a number with thousands separators and `decimals` fraction digits.
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::number_format::format_number_with_decimals;
///
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1.234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    // "-0" reads badly in a money column
    let sign = if grouped.chars().all(|c| c == '0' || c == '.')
        && decimal_part.map_or(true, |d| d.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money amount in reais: `R$ 1.234,56`
pub fn format_money(value: f64) -> String {
    format!("R$ {}", format_number_with_decimals(value, 2))
}

/// Integer with thousands separators: `1.234.567`
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Compact axis label for charts: `1,2 mil`, `3,4 mi`.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{} mi", format_number_with_decimals(value / 1_000_000.0, 1))
    } else if abs >= 1_000.0 {
        format!("{} mil", format_number_with_decimals(value / 1_000.0, 1))
    } else {
        format_number_int(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "R$ 1.234,56");
        assert_eq!(format_money(1234567.89), "R$ 1.234.567,89");
        assert_eq!(format_money(0.0), "R$ 0,00");
        assert_eq!(format_money(-1234.56), "R$ -1.234,56");
        assert_eq!(format_money(-0.001), "R$ 0,00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1.234,6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1.234.567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1.234");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(1500.0), "1,5 mil");
        assert_eq!(format_compact(2_340_000.0), "2,3 mi");
    }
}
