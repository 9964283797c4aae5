//! Model-registry view defaults.

use mlv_core::SearchType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Search type selected when the version list opens.
    #[serde(default)]
    pub default_search_type: SearchType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_keyword_search() {
        assert_eq!(
            RegistryConfig::default().default_search_type,
            SearchType::Keyword
        );
    }
}
