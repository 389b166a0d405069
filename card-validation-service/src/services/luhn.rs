use crate::services::CardValidationStore;

const MIN_DIGITS: usize = 12;
const MAX_DIGITS: usize = 19;

/// Validates card numbers with the Luhn (mod 10) checksum.
///
/// Spaces and hyphens are ignored as group separators; any other
/// non-digit character makes the number invalid.
#[derive(Debug, Clone, Copy, Default)]
pub struct LuhnCardStore;

impl CardValidationStore for LuhnCardStore {
    fn get_card_validation(&self, card_number: &str) -> bool {
        luhn_valid(card_number)
    }
}

pub fn luhn_valid(card_number: &str) -> bool {
    let mut digits = String::with_capacity(MAX_DIGITS);
    for c in card_number.chars() {
        match c {
            // card-validate assumes ASCII digits only
            '0'..='9' => digits.push(c),
            ' ' | '-' => continue,
            _ => return false,
        }
    }

    (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len())
        && card_validate::Validate::is_luhn_valid(&digits)
}
