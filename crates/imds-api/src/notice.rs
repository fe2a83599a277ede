//! One-shot operator notices carried across the post-redirect-get cycle.
//!
//! A control handler stores the notice in a short-lived cookie on its
//! redirect; the operator page shows it once and clears the cookie.

use std::fmt;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Cookie holding the pending notice.
pub const NOTICE_COOKIE: &str = "imds_notice";

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// The operation took effect.
    Success,
    /// The operation was rejected; nothing changed.
    Error,
}

impl NoticeLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Text shown on the page.
    pub message: String,
}

impl Notice {
    /// Success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// `level:message`
    fn encode(&self) -> String {
        format!("{}:{}", self.level, self.message)
    }

    fn decode(value: &str) -> Option<Self> {
        let (level, message) = value.split_once(':')?;
        let level = match level {
            "success" => NoticeLevel::Success,
            "error" => NoticeLevel::Error,
            _ => return None,
        };
        Some(Self {
            level,
            message: message.to_string(),
        })
    }

    /// Store this notice in the jar.
    pub fn store(self, jar: CookieJar) -> CookieJar {
        let cookie = Cookie::build((NOTICE_COOKIE, self.encode()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        jar.add(cookie)
    }

    /// Read the pending notice and clear it from the jar.
    pub fn take(jar: CookieJar) -> (CookieJar, Option<Self>) {
        let Some(value) = jar.get(NOTICE_COOKIE).map(|c| c.value().to_string()) else {
            return (jar, None);
        };
        let jar = jar.remove(Cookie::build(NOTICE_COOKIE).path("/"));
        (jar, Self::decode(&value))
    }
}
