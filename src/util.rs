pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts_have_no_separator() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(500), "500");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn separator_every_three_digits() {
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(12_000), "12,000");
        assert_eq!(format_count(75_000), "75,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
