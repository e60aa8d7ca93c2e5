mod query_complexity;

use std::path::Path;

pub use query_complexity::QueryComplexityConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Default, serde::Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub query_complexity: QueryComplexityConfig,
}

impl Config {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml(&input)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();

        insta::assert_debug_snapshot!(config, @r#"
        Config {
            query_complexity: QueryComplexityConfig {
                enabled: true,
                policy_key: None,
                failure_handler: None,
            },
        }
        "#);
    }

    #[test]
    fn full_section() {
        let input = indoc! {r#"
            [query_complexity]
            enabled = false
            policy_key = "ACL_POLICY"
            failure_handler = "my_handler"
        "#};

        let config = Config::from_toml(input).unwrap();

        insta::assert_debug_snapshot!(config, @r#"
        Config {
            query_complexity: QueryComplexityConfig {
                enabled: false,
                policy_key: Some(
                    "ACL_POLICY",
                ),
                failure_handler: Some(
                    "my_handler",
                ),
            },
        }
        "#);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let input = indoc! {r#"
            [query_complexity]
            limit = 100
        "#};

        let error = Config::from_toml(input).unwrap_err();

        assert!(matches!(error, ConfigError::Toml(_)));
        assert!(error.to_string().contains("unknown field `limit`"), "{error}");
    }

    #[test]
    fn unknown_sections_are_rejected() {
        let error = Config::from_toml("[depth]\nmax = 3\n").unwrap_err();

        assert!(error.to_string().contains("unknown field `depth`"), "{error}");
    }

    #[test]
    fn missing_file() {
        let error = Config::from_path(Path::new("/definitely/not/here.toml")).unwrap_err();

        assert!(matches!(error, ConfigError::Io { .. }));
    }
}
