// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(clippy::unwrap_used)]
//! Validator settings through the config service.

use currency_app_core::config::{ConfigError, ConfigService, ConfigStore, Settings};
use currency_core::ValidatorConfig;
use currency_dry_tests::InMemoryConfigStore;

#[test]
fn missing_settings_yield_defaults() {
    let store = InMemoryConfigStore::new();
    let service = ConfigService::new(store.clone());
    let config: ValidatorConfig = service.load_settings().unwrap();
    assert_eq!(config, ValidatorConfig::default());
    assert_eq!(store.load_count(), 1);
}

#[test]
fn settings_persist_under_validator_key() {
    let store = InMemoryConfigStore::new();
    let service = ConfigService::new(store.clone());
    service
        .save_settings(&ValidatorConfig::with_workers(3))
        .unwrap();
    assert!(store.contains_key(ValidatorConfig::KEY));
    assert_eq!(ValidatorConfig::KEY, "validator");
    assert_eq!(
        service.load_settings::<ValidatorConfig>().unwrap(),
        ValidatorConfig::with_workers(3)
    );
}

#[test]
fn empty_document_is_default() {
    let store = InMemoryConfigStore::new();
    store.save_raw(ValidatorConfig::KEY, b"").unwrap();
    let service = ConfigService::new(store);
    assert_eq!(
        service.load_settings::<ValidatorConfig>().unwrap(),
        ValidatorConfig::default()
    );
}

#[test]
fn zero_workers_is_invalid() {
    let store = InMemoryConfigStore::new();
    store
        .save_raw(ValidatorConfig::KEY, br#"{"workers":0}"#)
        .unwrap();
    let service = ConfigService::new(store.clone());
    assert!(matches!(
        service.load_settings::<ValidatorConfig>(),
        Err(ConfigError::Invalid(_))
    ));

    let saves = store.save_count();
    assert!(matches!(
        service.save_settings(&ValidatorConfig::with_workers(0)),
        Err(ConfigError::Invalid(_))
    ));
    assert_eq!(
        store.save_count(),
        saves,
        "rejected settings never reach the store"
    );
}

#[test]
fn malformed_document_is_a_serde_error() {
    let store = InMemoryConfigStore::new();
    store
        .save_raw(ValidatorConfig::KEY, br#"{"workers":"many"}"#)
        .unwrap();
    let service = ConfigService::new(store);
    assert!(matches!(
        service.load_settings::<ValidatorConfig>(),
        Err(ConfigError::Serde(_))
    ));
}

#[test]
fn store_failures_propagate() {
    let store = InMemoryConfigStore::new();
    store.set_fail_on_load(true);
    store.set_fail_on_save(true);
    let service = ConfigService::new(store);
    assert!(matches!(
        service.load_settings::<ValidatorConfig>(),
        Err(ConfigError::Other(_))
    ));
    assert!(matches!(
        service.save_settings(&ValidatorConfig::default()),
        Err(ConfigError::Other(_))
    ));
}
