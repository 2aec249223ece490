//! Configuration entry values.

use std::collections::BTreeMap;

/// Arbitrary configuration value.
pub type ConfigValue = serde_json::Value;

/// Ordered key/value configuration mapping.
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// Key seeded into every new store mapping.
pub const DEFAULT_DEBUG_KEY: &str = "debug";

/// Returns the entries a freshly constructed store starts with.
///
/// Defaults are local to the store and are not mirrored into the side-cache;
/// only explicit updates are.
pub fn default_config() -> ConfigMap {
    let mut config = ConfigMap::new();
    config.insert(DEFAULT_DEBUG_KEY.to_string(), ConfigValue::Bool(true));
    config
}
