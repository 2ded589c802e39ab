//! # Config Commands
//!
//! Retrieving the effective application configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## Returns
/// Complete configuration state (read-only), after env and flag overrides
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_in_camel_case() {
        let value = serde_json::to_value(get_config(&ConfigState::default())).unwrap();

        assert_eq!(value["storage"], "sqlite");
        assert_eq!(value["storeName"], "rv storefront");
        assert!(value["databasePath"].is_null());
    }
}
