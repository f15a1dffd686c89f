//! Getting venue data into the store: spreadsheet CSV parsing and the
//! Google Sheets download used by `fetch`.

pub mod csv;
pub mod sheets;
