use std::collections::HashMap;
use std::fmt;

use url::form_urlencoded;

/// A rendered `?key=value&...` query, encoded as
/// `application/x-www-form-urlencoded` (spaces become `+`).
///
/// Each key appears exactly once. Key order follows the underlying map and is
/// not part of the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryString(String);

impl QueryString {
    pub(crate) fn build(parameters: &HashMap<&'static str, String>) -> Self {
        let mut encoded = form_urlencoded::Serializer::new(String::new());
        for (name, value) in parameters {
            encoded.append_pair(name, value);
        }

        QueryString(format!("?{}", encoded.finish()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QueryString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
