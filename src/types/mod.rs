mod card_number;
mod errors;
mod result_set;
#[cfg(test)]
mod tests;

pub use card_number::is_card_number;
pub use errors::ParseResultSetError;
pub use result_set::ResultSetName;

pub type Amount = rust_decimal::Decimal;
pub type GenerationId = u64;
pub type LineNumber = u64;
