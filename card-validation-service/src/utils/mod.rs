pub mod validation;

pub use validation::{PayloadError, ValidatedJson};
