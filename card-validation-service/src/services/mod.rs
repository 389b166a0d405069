pub mod brand;
pub mod luhn;
pub mod metrics;
pub mod store;

pub use brand::CardBrandStore;
pub use luhn::LuhnCardStore;
pub use metrics::{get_metrics, init_metrics};
pub use store::{CardValidationStore, InMemoryCardStore, store_from_config};
