mod provider;
mod store;

pub use provider::{LanguageHandle, LanguageProvider, LanguageProviderProps, Snapshot, use_language};
pub use store::{apply_lang, initial_lang};

#[cfg(not(target_arch = "wasm32"))]
pub use store::testing;
