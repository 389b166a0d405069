use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Body of a card validation request, e.g.
/// `{"CreditCardNumber": "3379 5135 6110 8795"}`.
///
/// The number is passed to the lookup exactly as received.
#[derive(Debug, Deserialize, Validate)]
pub struct ValidationRequest {
    #[serde(rename = "CreditCardNumber")]
    #[validate(
        length(min = 1, max = 64, message = "Card number length is out of range"),
        custom(function = "validate_card_number_shape")
    )]
    pub credit_card_number: String,
}

/// Digits grouped by optional spaces or hyphens. Checksums are the lookup's
/// business, not the decoder's.
fn validate_card_number_shape(value: &str) -> Result<(), ValidationError> {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-');
    let has_digit = value.chars().any(|c| c.is_ascii_digit());

    if allowed && has_digit {
        Ok(())
    } else {
        let mut err = ValidationError::new("card_number_shape");
        err.message = Some("Card number may only contain digits, spaces and hyphens".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(number: &str) -> ValidationRequest {
        ValidationRequest {
            credit_card_number: number.to_string(),
        }
    }

    #[test]
    fn decodes_pascal_case_key() {
        let req: ValidationRequest =
            serde_json::from_str(r#"{"CreditCardNumber": "3379 5135 6110 8795"}"#).unwrap();
        assert_eq!(req.credit_card_number, "3379 5135 6110 8795");
    }

    #[test]
    fn rejects_numeric_field() {
        assert!(serde_json::from_str::<ValidationRequest>(r#"{"CreditCardNumber": 4111}"#).is_err());
    }

    #[test]
    fn rejects_missing_field() {
        assert!(serde_json::from_str::<ValidationRequest>(r#"{"cardNumber": "4111"}"#).is_err());
    }

    #[test]
    fn accepts_grouped_digits() {
        assert!(request("3379 5135 6110 8795").validate().is_ok());
        assert!(request("4111-1111-1111-1111").validate().is_ok());
        assert!(request("3379513561108794").validate().is_ok());
    }

    #[test]
    fn rejects_letters_and_blank_values() {
        assert!(request("abcdef").validate().is_err());
        assert!(request("4111 1111 1111 111a").validate().is_err());
        assert!(request("").validate().is_err());
        assert!(request("   ").validate().is_err());
        assert!(request("--").validate().is_err());
    }

    #[test]
    fn rejects_oversized_values() {
        let long = "1".repeat(65);
        assert!(request(&long).validate().is_err());
    }
}
