//! Display formatting shared by the dashboard views.

/// Formats a value with a fixed number of decimals, never printing `-0`.
pub fn fixed(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    if formatted.starts_with('-') && formatted[1..].chars().all(|c| c == '0' || c == '.') {
        formatted[1..].to_string()
    } else {
        formatted
    }
}

/// Groups the integer part with commas (`1234567` -> `1,234,567`).
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Percent change versus the base year with a direction marker.
/// `▼` for reductions, `▲` for increases.
pub fn change_marker(rate: f64) -> String {
    let marker = if rate > 0.0 { '▲' } else { '▼' };
    format!("{}{}%", marker, fixed(rate.abs(), 1))
}

/// Annual pace, e.g. `3.2%/年`.
pub fn pace(value: f64) -> String {
    format!("{}%/年", fixed(value, 1))
}

/// Verbal band of a deviation score.
pub fn deviation_band(score: f64) -> &'static str {
    if score >= 60.0 {
        "上位"
    } else if score >= 55.0 {
        "やや上位"
    } else if score >= 45.0 {
        "平均的"
    } else if score >= 40.0 {
        "やや下位"
    } else {
        "下位"
    }
}

/// Position of a deviation score on a 30..70 gauge, as 0..100 percent.
pub fn deviation_gauge_position(score: f64) -> f64 {
    ((score - 30.0) / 40.0 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_drops_negative_zero() {
        assert_eq!(fixed(-0.04, 1), "0.0");
        assert_eq!(fixed(-0.0, 0), "0");
        assert_eq!(fixed(-1.26, 1), "-1.3");
        assert_eq!(fixed(3.14159, 2), "3.14");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(14_047_594), "14,047,594");
        assert_eq!(thousands(-2_500), "-2,500");
    }

    #[test]
    fn test_change_marker() {
        assert_eq!(change_marker(-24.94), "▼24.9%");
        assert_eq!(change_marker(3.0), "▲3.0%");
    }

    #[test]
    fn test_deviation_band_and_gauge() {
        assert_eq!(deviation_band(62.0), "上位");
        assert_eq!(deviation_band(50.0), "平均的");
        assert_eq!(deviation_band(35.0), "下位");
        assert_eq!(deviation_gauge_position(50.0), 50.0);
        assert_eq!(deviation_gauge_position(10.0), 0.0);
        assert_eq!(deviation_gauge_position(90.0), 100.0);
    }

    #[test]
    fn test_pace() {
        assert_eq!(pace(3.5597), "3.6%/年");
    }
}
