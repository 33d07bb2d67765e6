pub mod csv_import;
pub mod json;

pub use csv_import::{phases_from_reader, CsvImport, CsvImportError};
pub use json::phases_from_str;
