//! Card validation lookup abstraction.
//!
//! The HTTP layer only knows about [`CardValidationStore`]; which backend
//! answers the question is decided once at startup.

use crate::config::{StoreBackend, StoreConfig};
use crate::services::{CardBrandStore, LuhnCardStore};
use std::collections::HashMap;
use std::sync::Arc;

/// Answers whether a card number is valid.
///
/// Total over all inputs: unknown or unparseable numbers are `false`, never
/// an error. Implementations are shared across concurrent requests and must
/// handle their own synchronization.
pub trait CardValidationStore: Send + Sync {
    fn get_card_validation(&self, card_number: &str) -> bool;
}

/// Fixed table of card numbers keyed verbatim.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCardStore {
    validation: HashMap<String, bool>,
}

impl InMemoryCardStore {
    pub fn new(validation: HashMap<String, bool>) -> Self {
        Self { validation }
    }

    /// Store where every listed number is valid.
    pub fn allowing<I, S>(numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(numbers.into_iter().map(|n| (n.into(), true)).collect())
    }
}

impl CardValidationStore for InMemoryCardStore {
    fn get_card_validation(&self, card_number: &str) -> bool {
        self.validation.get(card_number).copied().unwrap_or(false)
    }
}

pub fn store_from_config(config: &StoreConfig) -> Arc<dyn CardValidationStore> {
    match config.backend {
        StoreBackend::Luhn => Arc::new(LuhnCardStore),
        StoreBackend::Brand => Arc::new(CardBrandStore),
        StoreBackend::Static => {
            Arc::new(InMemoryCardStore::allowing(config.valid_numbers.iter().cloned()))
        }
    }
}
