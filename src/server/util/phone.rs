//! Phone normalization and member number derivation.

/// Strips everything but ASCII digits.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// The 8-digit suffix used in member numbers.
///
/// An 11-digit mobile number starting with `010` yields the 8 digits after the
/// prefix. Anything else yields its last 8 digits, left-padded with zeros.
pub fn phone_suffix(phone: &str) -> String {
    let digits = normalize_phone(phone);

    if digits.len() == 11 && digits.starts_with("010") {
        return digits[3..].to_string();
    }

    let tail = if digits.len() > 8 {
        &digits[digits.len() - 8..]
    } else {
        digits.as_str()
    };
    format!("{:0>8}", tail)
}

/// `M<registration_seq><8-digit phone suffix>`.
pub fn member_number(registration_seq: i32, phone: &str) -> String {
    format!("M{}{}", registration_seq, phone_suffix(phone))
}
