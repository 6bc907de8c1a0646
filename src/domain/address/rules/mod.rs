pub mod number_must_be_present;
pub mod text_must_not_be_empty;

pub use number_must_be_present::NumberMustBePresent;
pub use text_must_not_be_empty::TextMustNotBeEmpty;
