// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

/// Presentation-only knobs resolved from configuration at startup.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    /// Adds the `Secure` attribute to the session cookie.
    pub secure_cookies: bool,
    pub allowed_origins: Vec<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            secure_cookies: true,
            allowed_origins: vec!["http://localhost:5173".to_string()],
        }
    }
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub settings: Arc<HttpSettings>,
}
