// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Requests per second replenished for each client IP on the credential
/// endpoints.
const CREDENTIAL_REQUESTS_PER_SECOND: u64 = 2;
const CREDENTIAL_BURST: u32 = 10;

type CredentialLimiter = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-IP limiter for signup and login, shared across router instances.
pub fn credential_rate_limit_layer() -> CredentialLimiter {
    static LIMITER: OnceLock<CredentialLimiter> = OnceLock::new();

    LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(CREDENTIAL_REQUESTS_PER_SECOND);
            builder.burst_size(CREDENTIAL_BURST);
            let config = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("non-zero rate limit configuration");

            GovernorLayer::new(config)
        })
        .clone()
}
