//! shelfwise-ingest: catalog and keyword loading for Shelfwise.

pub mod error;
pub mod inventory;
pub mod keywords;

pub use error::IngestError;
pub use inventory::{parse_inventory, parse_inventory_str};
pub use keywords::{keyword_file_name, keyword_file_path, load_keyword_dir};
