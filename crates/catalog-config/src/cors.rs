use std::time::Duration;

use serde::Deserialize;

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins (wildcard "*" or explicit list)
    #[serde(default)]
    pub origins: AnyOrArray,
    /// Allowed HTTP methods (wildcard "*" or explicit list)
    #[serde(default)]
    pub methods: AnyOrArray,
    /// Allowed request headers (wildcard "*" or explicit list)
    #[serde(default)]
    pub headers: AnyOrArray,
    /// Max age for preflight cache in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

impl CorsConfig {
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}

/// Either a wildcard "*" or an explicit list of values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnyOrArray {
    #[default]
    Any,
    List(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnyOrArray {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for AnyOrArray {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = match RawAnyOrArray::deserialize(deserializer)? {
            RawAnyOrArray::One(value) => vec![value],
            RawAnyOrArray::Many(values) => values,
        };

        if values.iter().any(|v| v == "*") {
            Ok(Self::Any)
        } else {
            Ok(Self::List(values))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        cors: CorsConfig,
    }

    fn parse(raw: &str) -> CorsConfig {
        toml::from_str::<Wrapper>(raw).unwrap().cors
    }

    #[test]
    fn wildcard_string() {
        let cors = parse("[cors]\norigins = \"*\"");
        assert_eq!(cors.origins, AnyOrArray::Any);
        assert_eq!(cors.methods, AnyOrArray::Any);
    }

    #[test]
    fn wildcard_inside_list_wins() {
        let cors = parse("[cors]\norigins = [\"http://a.example\", \"*\"]");
        assert_eq!(cors.origins, AnyOrArray::Any);
    }

    #[test]
    fn explicit_lists() {
        let cors = parse("[cors]\norigins = \"http://a.example\"\nmethods = [\"GET\", \"POST\"]\nmax_age = 60");
        assert_eq!(cors.origins, AnyOrArray::List(vec!["http://a.example".to_owned()]));
        assert_eq!(cors.methods, AnyOrArray::List(vec!["GET".to_owned(), "POST".to_owned()]));
        assert_eq!(cors.max_age_duration(), Some(Duration::from_secs(60)));
    }
}
