//! Input validation predicates used by checkout.

/// Name must contain something other than whitespace.
pub fn is_valid_name(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Address must contain something other than whitespace.
pub fn is_valid_address(value: &str) -> bool {
    !value.trim().is_empty()
}

/// City must contain something other than whitespace.
pub fn is_valid_city(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Postal code is one or more ASCII digits, ignoring surrounding whitespace.
pub fn is_valid_postal_code(value: &str) -> bool {
    is_digits(value.trim())
}

/// Card number is exactly 16 digits once all whitespace is stripped.
pub fn is_valid_card_number(value: &str) -> bool {
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();

    digits.len() == 16 && is_digits(&digits)
}

/// Expiry is `MM/YY` with a month between 01 and 12.
pub fn is_valid_expiry_date(value: &str) -> bool {
    let Some((month, year)) = value.trim().split_once('/') else {
        return false;
    };

    if month.len() != 2 || !is_digits(month) || year.len() != 2 || !is_digits(year) {
        return false;
    }

    month
        .parse::<u8>()
        .is_ok_and(|month| (1..=12).contains(&month))
}

/// CVV is three or four digits.
pub fn is_valid_cvv(value: &str) -> bool {
    let value = value.trim();

    (3..=4).contains(&value.len()) && is_digits(value)
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
