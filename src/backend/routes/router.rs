/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layer Order
 *
 * The catch-panic layer wraps everything so that any panic escaping a
 * handler is converted to the generic error envelope: exactly one
 * well-formed response is written per request, and no failure propagates
 * past this boundary.
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::backend::error::handle_panic;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// This function sets up all HTTP routes for the application:
///
/// 1. **API Routes**: User creation, payment processing, health
/// 2. **Fallback Handler**: 404 errors
/// 3. **Layers**: Request tracing, panic-to-envelope conversion
///
/// # Arguments
///
/// * `app_state` - Application state containing pool, gateway, and logger
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Add API routes
    let router = configure_api_routes(router);

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    // Use AppState as router state, then wrap with middleware layers.
    // CatchPanicLayer is outermost so nothing escapes unshaped.
    router.with_state(app_state).layer(
        ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TraceLayer::new_for_http()),
    )
}
