mod errors;
mod header;
mod reader;
mod row_parser;

pub use errors::StructuralError;
pub use header::ColumnIndex;
pub use reader::{ensure_csv_file_name, read_rows};
pub use row_parser::parse_row;
