//! Configuration schema.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Root configuration document.
///
/// `environments` maps environment name to its variable bindings. The mapping
/// is kept as a [`serde_yaml::Mapping`] so enumeration preserves document
/// order, which is the order the picker presents candidates in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Environment name -> variable bindings.
    #[serde(default)]
    pub environments: Mapping,
}

impl RequestConfig {
    /// Environment names in document order.
    ///
    /// Non-string keys are skipped; a YAML document with such keys is not a
    /// valid environments mapping but should not panic enumeration.
    pub fn environment_names(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().filter_map(Value::as_str)
    }

    /// Variable bindings for a named environment, if configured.
    pub fn variables(&self, name: &str) -> Option<&Value> {
        self.environments.get(&Value::from(name))
    }

    /// Whether any environment (including `$shared`) is configured.
    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> RequestConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn empty_document_has_no_environments() {
        let config = parse("{}");
        assert!(config.is_empty());
        assert_eq!(config.environment_names().count(), 0);
    }

    #[test]
    fn names_preserve_document_order() {
        let config = parse(
            "environments:\n  zulu:\n    host: z\n  alpha:\n    host: a\n  mike:\n    host: m\n",
        );
        let names: Vec<_> = config.environment_names().collect();
        assert_eq!(names, vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn variables_returns_bindings() {
        let config = parse("environments:\n  dev:\n    base_url: http://localhost:3000\n");
        let vars = config.variables("dev").unwrap();
        assert_eq!(
            vars.get("base_url").and_then(Value::as_str),
            Some("http://localhost:3000")
        );
        assert!(config.variables("prod").is_none());
    }

    #[test]
    fn shared_namespace_is_an_ordinary_key_here() {
        let config = parse("environments:\n  $shared:\n    token: abc\n  dev: {}\n");
        let names: Vec<_> = config.environment_names().collect();
        assert_eq!(names, vec!["$shared", "dev"]);
        assert!(config.variables("$shared").is_some());
    }

    #[test]
    fn default_config_is_empty() {
        let config = RequestConfig::default();
        assert!(config.is_empty());
    }
}
