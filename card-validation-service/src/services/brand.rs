use crate::services::CardValidationStore;

/// Stricter check backed by `card-validate`: the number must belong to a
/// known issuer range, have a length that issuer uses, and pass Luhn.
///
/// Group separators (spaces, hyphens) are removed before the check.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardBrandStore;

impl CardValidationStore for CardBrandStore {
    fn get_card_validation(&self, card_number: &str) -> bool {
        let digits: String = card_number
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect();

        !digits.is_empty() && card_validate::Validate::from(&digits).is_ok()
    }
}
