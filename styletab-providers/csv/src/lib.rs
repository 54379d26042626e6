//! CSV provider for header-keyed style tables implementing `StyleSource`.

mod errors;
mod layout;
mod source;

pub use errors::CsvProviderError;
pub use layout::ColumnLayout;
pub use source::CsvStyleSource;
