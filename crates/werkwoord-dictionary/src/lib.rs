pub mod loader;

pub use loader::{LoadError, VerbsLoader, from_json};
