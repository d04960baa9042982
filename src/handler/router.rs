//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Classifies the URL path into
//! a route class, arms the request deadline, and dispatches to the
//! matching handler. Exactly one response is produced per request: the
//! deadline and the handler race inside the guard and the loser is
//! discarded.

use crate::config::Config;
use crate::handler::{information, static_files, timeout};
use crate::http::ResponseBody;
use crate::logger;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

/// Route classes the server dispatches on.
///
/// `/` and `/information` are the only special-cased paths; every other
/// path is treated as a static file lookup under the public root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Information,
    Static,
}

/// Classify a URL path into its route class.
#[must_use]
pub fn classify(path: &str) -> Route {
    match path {
        "/" => Route::Root,
        "/information" => Route::Information,
        _ => Route::Static,
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    config: Arc<Config>,
) -> Result<Response<ResponseBody>, Infallible> {
    if config.logging.access_log {
        logger::log_request(req.method(), req.uri(), req.version());
    }

    let deadline = Duration::from_secs(config.http.request_timeout);
    let response = timeout::guard(deadline, req.uri().path(), dispatch(&req, &config)).await;

    if config.logging.access_log {
        logger::log_response(response.status().as_u16());
    }

    Ok(response)
}

/// Dispatch a request to the handler for its route class
async fn dispatch<B>(req: &Request<B>, config: &Config) -> Response<ResponseBody> {
    match classify(req.uri().path()) {
        Route::Root => {
            static_files::serve_index_page(
                &config.resources.public_dir,
                &config.resources.index_page,
            )
            .await
        }
        Route::Information => {
            information::handle(
                req.method(),
                req.uri().query(),
                &config.resources.information_template,
            )
            .await
        }
        Route::Static => {
            static_files::serve_path(req.uri().path(), &config.resources.public_dir).await
        }
    }
}
