use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ContactName(String);

impl ContactName {
    /// Any non-blank text is a name. Output escaping happens in the templates.
    pub fn parse(s: String) -> Result<ContactName, String> {
        let s = s.trim();

        if s.is_empty() {
            Err("Name is empty or contains whitespace only".into())
        } else {
            Ok(Self(s.to_string()))
        }
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
