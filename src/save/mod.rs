//! Save files for The Lab
//!
//! One JSON file per save, named `<save name>.<extension>`, holding a
//! [`SaveRecord`]. Writes overwrite: the last writer wins.
//!
//! # Architecture
//!
//! - `types`: the save record schema and error type
//! - `store`: SaveStore for file operations
//!
//! # Example Usage
//!
//! ```ignore
//! let store = SaveStore::new("saves", "tlab")?;
//! let file_name = store.create("alpha", "4242")?;   // writes saves/alpha.tlab
//! let record = store.load(&file_name)?;
//! assert_eq!(record.seed, "4242");
//! ```

pub mod store;
pub mod types;

pub use store::SaveStore;
pub use types::*;
