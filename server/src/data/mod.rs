//! Data storage layer
//!
//! - `sqlite` - embedded book store, schema and migrations
//! - `traits` - repository traits used by the API
//! - `error` - unified error type

pub mod error;
pub mod sqlite;
pub mod traits;

pub use error::DataError;
pub use sqlite::SqliteService;
pub use traits::BookRepository;
