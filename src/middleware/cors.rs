//! # CORS Policy
//!
//! Translates [`CorsSettings`] into a `tower_http` CORS layer. All methods and
//! headers are allowed in every configuration.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use crate::utils::config::CorsSettings;

/// Builds the CORS layer for the configured policy.
///
/// - [`CorsSettings::AnyOrigin`]: any origin, credentials disabled
/// - [`CorsSettings::Origins`]: only the listed origins. With credentials enabled
///   the request's method and headers are mirrored back, since browsers reject
///   wildcards alongside credentials.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    match settings {
        CorsSettings::AnyOrigin => {
            info!("CORS allows any origin without credentials");
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        CorsSettings::Origins {
            origins,
            allow_credentials,
        } => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| {
                    HeaderValue::from_str(origin)
                        .inspect_err(|_| warn!(%origin, "Skipping invalid CORS origin"))
                        .ok()
                })
                .collect();

            info!(
                origins = origins.len(),
                allow_credentials, "CORS restricted to explicit origins"
            );

            let layer = CorsLayer::new().allow_origin(AllowOrigin::list(origins));
            if *allow_credentials {
                layer
                    .allow_credentials(true)
                    .allow_methods(AllowMethods::mirror_request())
                    .allow_headers(AllowHeaders::mirror_request())
            } else {
                layer.allow_methods(Any).allow_headers(Any)
            }
        }
    }
}
