/// API token and application name every platform call is made with.
///
/// Supplied by the caller per invocation, never mutated, never
/// persisted. [`Credential::missing_field`] covers structural
/// validity only; whether the pair is actually accepted is the
/// platform's call.
#[derive(Debug, Clone)]
pub struct Credential {
    pub api_token: String,
    pub app_name: String,
}

impl Credential {
    pub fn new(api_token: impl Into<String>, app_name: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            app_name: app_name.into(),
        }
    }

    /// Name of the first absent field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.api_token.trim().is_empty() {
            Some("api_token")
        } else if self.app_name.trim().is_empty() {
            Some("app_name")
        } else {
            None
        }
    }
}
