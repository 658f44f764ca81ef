//! Supabase auth (GoTrue) REST client
//!
//! Thin client over the backend's auth endpoints. Holds the current session
//! in memory so bearer-authenticated calls can be issued after sign-in;
//! nothing is written to disk. Each method is a single round trip with no
//! retries.

use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::config::AuthConfig;
use crate::error::{Error, Result};
use crate::models::{AuthData, AuthUser, Session};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Deep link the password-reset email lands on after the user follows it
pub const RESET_PASSWORD_REDIRECT: &str = "aincome://reset-password";

/// Message used when a bearer-authenticated call is issued with no session
const SESSION_MISSING: &str = "Auth session missing";

#[derive(Debug, Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct PasswordGrantBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RecoverBody<'a> {
    email: &'a str,
}

/// Attributes accepted by the update-user endpoint
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl UserAttributes {
    pub fn password(new_password: impl Into<String>) -> Self {
        Self {
            password: Some(new_password.into()),
            ..Self::default()
        }
    }
}

/// Sign-up responds with a full session when auto-confirm is on, and with a
/// bare user record while email confirmation is still pending.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponseBody {
    WithSession(Session),
    UserOnly(AuthUser),
}

/// GoTrue error payloads are not uniform across endpoints; collect every
/// field name observed in the wild and take the first present.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| {
            b.msg
                .or(b.message)
                .or(b.error_description)
                .or(b.error)
        })
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
}

/// Auth backend REST client
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    session: RwLock<Option<Session>>,
}

impl SupabaseClient {
    /// Create a new client from backend configuration
    pub fn new(config: &AuthConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            "apikey",
            header::HeaderValue::from_str(&config.anon_key)
                .map_err(|_| Error::config("anon key contains invalid header characters"))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            session: RwLock::new(None),
        })
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    async fn store_session(&self, session: Session) {
        *self.session.write().await = Some(session);
    }

    async fn access_token(&self) -> Result<String> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|s| s.access_token.clone())
            .ok_or_else(|| Error::auth(SESSION_MISSING))
    }

    /// Read a response body, converting non-2xx statuses into `Error::Auth`
    /// carrying the backend's message.
    async fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::auth(error_message(status, &body)));
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn read_empty(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(Error::auth(error_message(status, &body)));
        }
        Ok(())
    }

    /// Register a new user. No `redirect_to` is sent: the confirmation-link
    /// target is configured on the backend, not here.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: Option<&serde_json::Value>,
    ) -> Result<AuthData> {
        let response = self
            .client
            .post(self.auth_url("signup"))
            .json(&SignUpBody {
                email,
                password,
                data: metadata,
            })
            .send()
            .await?;

        match self.read_json::<SignUpResponseBody>(response).await? {
            SignUpResponseBody::WithSession(session) => {
                let user = session.user.clone();
                self.store_session(session.clone()).await;
                Ok(AuthData {
                    user: Some(user),
                    session: Some(session),
                })
            }
            SignUpResponseBody::UserOnly(user) => Ok(AuthData {
                user: Some(user),
                session: None,
            }),
        }
    }

    /// Exchange email/password for a session
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthData> {
        let response = self
            .client
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .json(&PasswordGrantBody { email, password })
            .send()
            .await?;

        let session: Session = self.read_json(response).await?;
        let user = session.user.clone();
        self.store_session(session.clone()).await;
        Ok(AuthData {
            user: Some(user),
            session: Some(session),
        })
    }

    /// Revoke the current session. A sign-out with no session is a no-op.
    pub async fn sign_out(&self) -> Result<()> {
        let token = match self.session.read().await.as_ref() {
            Some(session) => session.access_token.clone(),
            None => return Ok(()),
        };

        let response = self
            .client
            .post(self.auth_url("logout"))
            .bearer_auth(token)
            .send()
            .await?;
        self.read_empty(response).await?;

        *self.session.write().await = None;
        Ok(())
    }

    /// Send a password-reset email pointing at the app's reset deep link
    pub async fn reset_password_for_email(&self, email: &str) -> Result<()> {
        let response = self
            .client
            .post(self.auth_url("recover"))
            .query(&[("redirect_to", RESET_PASSWORD_REDIRECT)])
            .json(&RecoverBody { email })
            .send()
            .await?;
        self.read_empty(response).await
    }

    /// Update attributes of the signed-in user
    pub async fn update_user(&self, attributes: &UserAttributes) -> Result<AuthUser> {
        let token = self.access_token().await?;
        let response = self
            .client
            .put(self.auth_url("user"))
            .bearer_auth(token)
            .json(attributes)
            .send()
            .await?;

        let user: AuthUser = self.read_json(response).await?;
        if let Some(session) = self.session.write().await.as_mut() {
            session.user = user.clone();
        }
        Ok(user)
    }

    /// The current in-memory session, if any. No network call.
    pub async fn get_session(&self) -> Result<Option<Session>> {
        Ok(self.session.read().await.clone())
    }

    /// Fetch the signed-in user from the backend
    pub async fn get_user(&self) -> Result<AuthUser> {
        let token = self.access_token().await?;
        let response = self
            .client
            .get(self.auth_url("user"))
            .bearer_auth(token)
            .send()
            .await?;
        self.read_json(response).await
    }
}
