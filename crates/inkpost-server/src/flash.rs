//! One-shot notices carried across a redirect
//!
//! Pending messages live in a single cookie whose value is
//! `base64url(json(messages)) "." hex(hmac_sha256(key, payload))`.
//! A cookie that fails verification is dropped, never trusted.

use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{AppendHeaders, IntoResponse, IntoResponseParts, Redirect, Response, ResponseParts};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::convert::Infallible;
use std::sync::Arc;

type HmacSha256 = Hmac<Sha256>;

pub const FLASH_COOKIE: &str = "inkpost_flash";

const COOKIE_ATTRIBUTES: &str = "Path=/; HttpOnly; SameSite=Lax";

/// Oldest messages are dropped beyond this many to keep the cookie small
const MAX_PENDING: usize = 8;

/// Bootstrap alert category of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

/// Signing key for the flash cookie
#[derive(Clone)]
pub struct FlashKey(Arc<[u8]>);

impl FlashKey {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self(Arc::from(secret.as_ref()))
    }

    fn mac(&self) -> Option<HmacSha256> {
        HmacSha256::new_from_slice(&self.0).ok()
    }

    /// Encode and sign messages into a cookie value
    pub fn seal(&self, messages: &[FlashMessage]) -> Option<String> {
        let json = serde_json::to_vec(messages).ok()?;
        let payload = URL_SAFE_NO_PAD.encode(json);

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        Some(format!("{}.{}", payload, signature))
    }

    /// Verify and decode a cookie value produced by [`FlashKey::seal`]
    pub fn open(&self, value: &str) -> Option<Vec<FlashMessage>> {
        let (payload, signature) = value.split_once('.')?;
        let signature = hex::decode(signature).ok()?;

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).ok()?;

        let json = URL_SAFE_NO_PAD.decode(payload).ok()?;
        serde_json::from_slice(&json).ok()
    }
}

impl std::fmt::Debug for FlashKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FlashKey(***REDACTED***)")
    }
}

/// Request-scoped flash messages
///
/// Extracting it reads whatever the previous response left behind. Handlers
/// either push a message and [`Flash::redirect`], or [`Flash::drain`] the
/// pending messages into the page they render.
#[derive(Debug)]
pub struct Flash {
    key: FlashKey,
    pending: Vec<FlashMessage>,
}

impl Flash {
    pub fn new(key: FlashKey, pending: Vec<FlashMessage>) -> Self {
        Self { key, pending }
    }

    pub fn success(self, message: impl Into<String>) -> Self {
        self.push(FlashLevel::Success, message)
    }

    pub fn danger(self, message: impl Into<String>) -> Self {
        self.push(FlashLevel::Danger, message)
    }

    fn push(mut self, level: FlashLevel, message: impl Into<String>) -> Self {
        self.pending.push(FlashMessage {
            level,
            message: message.into(),
        });
        if self.pending.len() > MAX_PENDING {
            let excess = self.pending.len() - MAX_PENDING;
            self.pending.drain(..excess);
        }
        self
    }

    /// `303 See Other` to `to`, carrying all pending messages
    pub fn redirect(self, to: &str) -> Response {
        let cookie = self
            .key
            .seal(&self.pending)
            .map(|value| format!("{}={}; {}", FLASH_COOKIE, value, COOKIE_ATTRIBUTES))
            .and_then(|cookie| HeaderValue::from_str(&cookie).ok());

        match cookie {
            Some(cookie) => (AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to(to)).into_response(),
            None => {
                tracing::warn!(to, "Failed to seal flash messages; redirecting without them");
                Redirect::to(to).into_response()
            }
        }
    }

    /// Take the pending messages for display
    ///
    /// The returned [`ClearFlash`] must be part of the response so the
    /// messages are not shown twice.
    pub fn drain(self) -> (Vec<FlashMessage>, ClearFlash) {
        let clear = ClearFlash(!self.pending.is_empty());
        (self.pending, clear)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
    FlashKey: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let key = FlashKey::from_ref(state);
        let pending = match find_cookie(&parts.headers, FLASH_COOKIE) {
            Some(value) => key.open(value).unwrap_or_else(|| {
                tracing::warn!("Ignoring flash cookie that failed verification");
                Vec::new()
            }),
            None => Vec::new(),
        };
        Ok(Flash::new(key, pending))
    }
}

/// Response part expiring the flash cookie once its messages were shown
#[derive(Debug, Clone, Copy)]
pub struct ClearFlash(bool);

impl IntoResponseParts for ClearFlash {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if self.0 {
            let expired = format!("{}=; Max-Age=0; {}", FLASH_COOKIE, COOKIE_ATTRIBUTES);
            if let Ok(value) = HeaderValue::from_str(&expired) {
                res.headers_mut().append(SET_COOKIE, value);
            }
        }
        Ok(res)
    }
}

fn find_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
