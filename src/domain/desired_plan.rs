use std::fmt::{self, Display};

/// Plan a waitlist row is filed under.
///
/// The two selectable plans and the contact-form marker are named variants;
/// anything else picked from a pricing tile is kept as free text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DesiredPlan {
    #[default]
    Professional,
    Premium,
    Contact,
    Other(String),
}

impl DesiredPlan {
    pub fn parse(s: String) -> Result<DesiredPlan, String> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "" => Err("Desired plan is empty".into()),
            "professional" => Ok(DesiredPlan::Professional),
            "premium" => Ok(DesiredPlan::Premium),
            "contact" => Ok(DesiredPlan::Contact),
            _ if s.chars().count() > 64 => Err(format!("`{s}` is not a plan name")),
            _ => Ok(DesiredPlan::Other(s)),
        }
    }
}

impl AsRef<str> for DesiredPlan {
    fn as_ref(&self) -> &str {
        match self {
            DesiredPlan::Professional => "professional",
            DesiredPlan::Premium => "premium",
            DesiredPlan::Contact => "contact",
            DesiredPlan::Other(name) => name,
        }
    }
}

impl Display for DesiredPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
