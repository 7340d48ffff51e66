mod contact_email;
mod contact_name;
mod desired_plan;
mod new_account;
mod new_waitlist_signup;
mod submission_status;

pub use contact_email::ContactEmail;
pub use contact_name::ContactName;
pub use desired_plan::DesiredPlan;
pub use new_account::NewAccount;
pub use new_waitlist_signup::NewWaitlistSignup;
pub use submission_status::SubmissionStatus;
