use super::{ContactEmail, ContactName, DesiredPlan};

#[derive(Debug)]
pub struct NewWaitlistSignup {
    pub name: ContactName,
    pub email: ContactEmail,
    pub desired_plan: DesiredPlan,
    pub marketing_consent: bool,
    pub message: Option<String>,
}
