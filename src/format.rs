//! Display helpers for addresses and large numbers.

/// `0x1234...abcd` for anything at least 10 characters long
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// First and last 8 characters of a long id
pub fn format_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= 16 {
        return id.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("{head}...{tail}")
}

/// Thousands separators: `1234567` -> `1,234,567`
pub fn format_number(num: u64) -> String {
    let digits = num.to_string();
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
    fn test_format_address() {
        assert_eq!(
            format_address("0x1234567890abcdef1234567890abcdef12345678"),
            "0x1234...5678"
        );
        assert_eq!(format_address("0xAI1"), "0xAI1");
        assert_eq!(format_address(""), "");
        assert_eq!(format_address("0123456789"), "012345...6789");
    }

    #[test]
    fn test_format_id() {
        assert_eq!(
            format_id("0x1234567890abcdef1234567890abcdef12345678"),
            "0x123456...12345678"
        );
        assert_eq!(format_id("short"), "short");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(2531), "2,531");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
