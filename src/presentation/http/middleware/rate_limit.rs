// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type FormRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client limiter for the public forms and login. Keyed by the forwarded
/// client IP, falling back to the peer address.
///
/// Returns `None` when the limiter configuration is rejected; callers serve
/// the routes unthrottled in that case.
pub fn rate_limit_layer() -> Option<FormRateLimitLayer> {
    static RATE_LIMITER: OnceLock<Option<FormRateLimitLayer>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(2);
            builder.burst_size(10);
            let config = builder.key_extractor(SmartIpKeyExtractor).finish();
            if config.is_none() {
                tracing::error!("invalid rate limit configuration, limiter disabled");
            }
            config.map(GovernorLayer::new)
        })
        .clone()
}
