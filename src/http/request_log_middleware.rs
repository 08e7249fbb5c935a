use std::time::Instant;

use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

/// Logs every API call with its status and latency.
pub struct RequestLogMiddleware;

#[async_trait::async_trait]
impl Middleware for RequestLogMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = req.method().clone();
        let url = req.url().clone();
        let started = Instant::now();

        let result = next.run(req, extensions).await;
        let elapsed = started.elapsed().as_millis();

        match &result {
            Ok(response) if response.status().is_success() => {
                log::debug!("{} {} -> {} ({} ms)", method, url.path(), response.status(), elapsed);
            }
            Ok(response) => {
                log::warn!("{} {} -> {} ({} ms)", method, url.path(), response.status(), elapsed);
            }
            Err(err) => {
                log::warn!("{} {} failed after {} ms: {}", method, url.path(), elapsed, err);
            }
        }
        result
    }
}
