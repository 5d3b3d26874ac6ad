use reqwest::header::HeaderValue;

use super::error::{Result, SubmitError};

/// The retro a client posts into and the CSRF token the server expects with it.
///
/// Both values are checked on construction, so a client built from a
/// `SessionContext` always produces a well-formed URL and header.
#[derive(Debug, Clone)]
pub struct SessionContext {
    retro_id: String,
    csrf_token: HeaderValue,
}

impl SessionContext {
    pub fn new(retro_id: impl Into<String>, csrf_token: impl AsRef<str>) -> Result<Self> {
        let retro_id = retro_id.into();
        let csrf_token = csrf_token.as_ref();

        if retro_id.trim().is_empty() {
            return Err(SubmitError::MissingRetroId);
        }
        // URL parsing rewrites `.`, `..` and `\`, so only plain segment characters pass
        if !retro_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        {
            return Err(SubmitError::InvalidRetroId(retro_id));
        }
        if csrf_token.trim().is_empty() {
            return Err(SubmitError::MissingCsrfToken);
        }
        let mut csrf_token =
            HeaderValue::from_str(csrf_token).map_err(|_| SubmitError::InvalidCsrfToken)?;
        csrf_token.set_sensitive(true);

        Ok(Self {
            retro_id,
            csrf_token,
        })
    }

    pub fn retro_id(&self) -> &str {
        &self.retro_id
    }

    pub fn csrf_token(&self) -> &HeaderValue {
        &self.csrf_token
    }
}
