//! Request timeout guard module
//!
//! Races every handler against a fixed deadline. If the handler does not
//! produce a response in time, the request is answered with 408 and the
//! handler future is dropped. Because the guard returns exactly one of
//! the two outcomes, a request can never see both a timeout and a normal
//! response.

use crate::http::{self, ResponseBody};
use crate::logger;
use hyper::Response;
use std::future::Future;
use std::time::Duration;

/// Run a handler future under the request deadline.
///
/// Returns the handler's response when it completes first, or a 408
/// `Request Timeout` response when the deadline fires first.
pub async fn guard<F>(deadline: Duration, path: &str, handler: F) -> Response<ResponseBody>
where
    F: Future<Output = Response<ResponseBody>>,
{
    match tokio::time::timeout(deadline, handler).await {
        Ok(response) => response,
        Err(_elapsed) => {
            logger::log_timeout(path);
            http::build_408_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(resp: Response<ResponseBody>) -> String {
        let collected = resp.into_body().collect().await.unwrap();
        String::from_utf8(collected.to_bytes().to_vec()).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_handler_times_out_with_408() {
        let resp = guard(
            Duration::from_secs(30),
            "/slow",
            std::future::pending::<Response<ResponseBody>>(),
        )
        .await;
        assert_eq!(resp.status(), 408);
        assert_eq!(body_string(resp).await, "Request Timeout");
    }

    #[tokio::test(start_paused = true)]
    async fn test_prompt_handler_cancels_the_deadline() {
        let resp = guard(Duration::from_secs(30), "/fast", async {
            http::build_html_response(String::from("done"))
        })
        .await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_string(resp).await, "done");
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_just_before_deadline_wins() {
        let resp = guard(Duration::from_secs(30), "/almost", async {
            tokio::time::sleep(Duration::from_secs(29)).await;
            http::build_html_response(String::from("made it"))
        })
        .await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_string(resp).await, "made it");
    }
}
