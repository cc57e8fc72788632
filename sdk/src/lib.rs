use std::fs;
use std::path::Path;
pub use log::{trace, debug, info, warn, error};
pub use anyhow::Result;
pub use anyhow;
pub use dotenvy;
use anyhow::Context;

/// Loads `.env` if there is one and installs the logger. Safe to call more than once.
pub fn init() {
    // no .env is fine, RUST_LOG can come from the real environment
    let _ = dotenvy::dotenv();
    let _ = pretty_env_logger::try_init();
}

pub fn read_input(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}
