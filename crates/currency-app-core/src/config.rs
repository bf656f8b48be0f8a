// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Settings persistence: a byte-level storage port and a JSON service on top.
//!
//! Adapters implement [`ConfigStore`] and know nothing about the documents
//! they hold. [`ConfigService`] owns the encoding and, for [`Settings`]
//! documents, the key and the usability check.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Storage port for raw settings documents, addressed by key.
pub trait ConfigStore {
    /// Bytes stored under `key`, or [`ConfigError::NotFound`].
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Replaces whatever is stored under `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Failure to read, decode or accept a settings document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing stored under the key.
    #[error("not found")]
    NotFound,
    /// The backing store failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not valid JSON for the expected type.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The document decoded but its values are unusable.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// Adapter-specific failure.
    #[error("other: {0}")]
    Other(String),
}

/// A settings document with a fixed store key.
pub trait Settings: Serialize + DeserializeOwned + Default {
    /// Key the document is stored under.
    const KEY: &'static str;

    /// Rejects values that decode but cannot be used.
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// JSON encoding over a [`ConfigStore`].
#[derive(Debug)]
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Unwraps the store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: ConfigStore> ConfigService<S> {
    /// The value stored under `key`; `None` when absent or empty.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Stores `value` under `key` as pretty-printed JSON.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ConfigError> {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }

    /// The stored settings document, or its default when nothing is stored.
    ///
    /// A stored document that fails [`Settings::check`] is
    /// [`ConfigError::Invalid`]; the default is never checked.
    pub fn load_settings<T: Settings>(&self) -> Result<T, ConfigError> {
        match self.load::<T>(T::KEY)? {
            Some(settings) => {
                settings.check().map_err(ConfigError::Invalid)?;
                Ok(settings)
            }
            None => Ok(T::default()),
        }
    }

    /// Checks and stores a settings document under its key.
    pub fn save_settings<T: Settings>(&self, settings: &T) -> Result<(), ConfigError> {
        settings.check().map_err(ConfigError::Invalid)?;
        self.save(T::KEY, settings)
    }
}
