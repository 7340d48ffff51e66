use crate::{
    domain::SubmissionStatus,
    forms::{ContactForm, WaitlistForm, MESSAGE_SENT, WAITLIST_JOINED},
    session_state::WaitlistPage,
};

const SELECTABLE_PLANS: [(&str, &str); 2] = [
    ("professional", "Professional Plan ($499/mo)"),
    ("premium", "Premium Plan ($749/mo)"),
];

pub struct PlanOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Render-ready state of a waitlist form.
pub struct WaitlistView {
    pub page: &'static str,
    pub name: String,
    pub email: String,
    pub plan_options: Vec<PlanOption>,
    pub marketing_consent: bool,
    pub submitting: bool,
    pub succeeded: bool,
    pub error_message: Option<String>,
    pub success_message: &'static str,
}

impl WaitlistView {
    pub fn new(page: WaitlistPage, form: &WaitlistForm) -> Self {
        let draft = form.draft();

        Self {
            page: page.as_str(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            plan_options: plan_options(&draft.desired_plan),
            marketing_consent: draft.marketing_consent,
            submitting: form.status() == SubmissionStatus::Submitting,
            succeeded: form.status() == SubmissionStatus::Success,
            error_message: form.error_message().map(String::from),
            success_message: WAITLIST_JOINED,
        }
    }
}

// A plan picked from a pricing tile that is not one of the selectable plans
// still shows up, selected, so the override is visible before submitting.
fn plan_options(desired_plan: &str) -> Vec<PlanOption> {
    let desired_plan = desired_plan.trim().to_lowercase();

    let mut options: Vec<PlanOption> = SELECTABLE_PLANS
        .iter()
        .map(|&(value, label)| PlanOption {
            value: value.into(),
            label: label.into(),
            selected: value == desired_plan,
        })
        .collect();

    if !desired_plan.is_empty() && !options.iter().any(|o| o.selected) {
        options.push(PlanOption {
            label: desired_plan.clone(),
            value: desired_plan,
            selected: true,
        });
    }

    options
}

pub struct ContactView {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitting: bool,
    pub succeeded: bool,
    pub error_message: Option<String>,
    pub success_message: &'static str,
}

impl ContactView {
    pub fn new(form: &ContactForm) -> Self {
        let draft = form.draft();

        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            message: draft.message.clone(),
            submitting: form.status() == SubmissionStatus::Submitting,
            succeeded: form.status() == SubmissionStatus::Success,
            error_message: form.error_message().map(String::from),
            success_message: MESSAGE_SENT,
        }
    }
}
