use crate::domain::{NewAccount, NewWaitlistSignup};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Postgres `unique_violation`, forwarded verbatim by the data API.
const UNIQUE_VIOLATION: &str = "23505";
/// The only unique key callers report to visitors as a duplicate.
const EMAIL_CONSTRAINT: &str = "waitlist_signups_email_key";

/// Client for the hosted project: the PostgREST data API for waitlist rows
/// and the GoTrue auth API for account creation.
#[derive(Clone, Debug)]
pub struct SupabaseClient {
    http_client: Client,
    base_url: String,
    anon_key: Secret<String>,
}

impl SupabaseClient {
    pub fn new(base_url: String, anon_key: Secret<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        }
    }

    #[tracing::instrument(
        name = "Inserting waitlist row",
        skip_all,
        fields(desired_plan = %signup.desired_plan)
    )]
    pub async fn insert_waitlist_signup(
        &self,
        signup: &NewWaitlistSignup,
    ) -> Result<(), SupabaseError> {
        let url = format!("{}/rest/v1/waitlist_signups", &self.base_url);
        let request_body = InsertWaitlistRow {
            name: signup.name.as_ref(),
            email: signup.email.as_ref(),
            desired_plan: signup.desired_plan.as_ref(),
            marketing_consent: signup.marketing_consent,
            message: signup.message.as_deref(),
        };

        let response = self
            .authorized(self.http_client.post(&url))
            .header("Prefer", "return=minimal")
            .json(&request_body)
            .send()
            .await?;

        into_result(response).await
    }

    #[tracing::instrument(name = "Creating account", skip_all)]
    pub async fn sign_up(&self, account: &NewAccount) -> Result<(), SupabaseError> {
        let url = format!("{}/auth/v1/signup", &self.base_url);
        let request_body = SignUpRequest {
            email: &account.email,
            password: account.password.expose_secret(),
            data: AccountMetadata {
                full_name: &account.full_name,
            },
        };

        let response = self
            .authorized(self.http_client.post(&url))
            .json(&request_body)
            .send()
            .await?;

        into_result(response).await
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", self.anon_key.expose_secret())
            .bearer_auth(self.anon_key.expose_secret())
    }
}

async fn into_result(response: Response) -> Result<(), SupabaseError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await?;
    Err(SupabaseError::from_reply(status, &body))
}

#[derive(Serialize)]
struct InsertWaitlistRow<'a> {
    name: &'a str,
    email: &'a str,
    desired_plan: &'a str,
    marketing_consent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    data: AccountMetadata<'a>,
}

#[derive(Serialize)]
struct AccountMetadata<'a> {
    full_name: &'a str,
}

// PostgREST replies with `code`/`message`; GoTrue with `error_code`/`msg` or,
// on older deployments, `error`/`error_description`.
#[derive(Deserialize)]
struct ErrorReply {
    code: Option<Value>,
    error_code: Option<String>,
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ErrorReply {
    fn code(&self) -> Option<String> {
        self.error_code
            .clone()
            .or_else(|| match &self.code {
                Some(Value::String(code)) => Some(code.clone()),
                Some(Value::Number(code)) => Some(code.to_string()),
                _ => None,
            })
    }

    fn into_message(self) -> Option<String> {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SupabaseError {
    #[error("{message}")]
    UniqueViolation {
        constraint: Option<String>,
        message: String,
    },
    #[error("{message}")]
    Rejected {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },
    #[error("Failed to reach the hosted database")]
    Transport(#[from] reqwest::Error),
}

impl SupabaseError {
    fn from_reply(status: StatusCode, body: &str) -> Self {
        let reply = serde_json::from_str::<ErrorReply>(body).ok();
        let code = reply.as_ref().and_then(ErrorReply::code);
        let message = reply
            .and_then(ErrorReply::into_message)
            .unwrap_or_else(|| fallback_message(status, body));

        if code.as_deref() == Some(UNIQUE_VIOLATION) {
            Self::UniqueViolation {
                constraint: constraint_name(&message),
                message,
            }
        } else {
            Self::Rejected {
                status,
                code,
                message,
            }
        }
    }

    /// A unique violation whose constraint is unnamed counts as the email key,
    /// since that is the only unique key besides the primary key.
    pub fn is_duplicate_email(&self) -> bool {
        match self {
            Self::UniqueViolation { constraint, .. } => constraint
                .as_deref()
                .map_or(true, |constraint| constraint == EMAIL_CONSTRAINT),
            _ => false,
        }
    }
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() || body.len() > 512 {
        format!("Request failed with status {status}")
    } else {
        body.to_string()
    }
}

// `duplicate key value violates unique constraint "waitlist_signups_email_key"`
fn constraint_name(message: &str) -> Option<String> {
    message
        .split_once("constraint")
        .and_then(|(_, rest)| rest.split('"').nth(1))
        .map(str::to_string)
}
