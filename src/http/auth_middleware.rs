use std::sync::Arc;

use http::Extensions;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

/// Adds `Authorization: Bearer <token>` whenever `token_fn` yields a token.
pub struct AuthHeaderMiddleware {
    pub token_fn: Arc<dyn Fn() -> Option<String> + Send + Sync>,
}

#[async_trait::async_trait]
impl Middleware for AuthHeaderMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        if !req.headers().contains_key(AUTHORIZATION) {
            if let Some(token) = (self.token_fn)() {
                let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                    reqwest_middleware::Error::Middleware(anyhow::anyhow!(
                        "Stored token is not a valid header value, run `studiehub logout`"
                    ))
                })?;
                req.headers_mut().insert(AUTHORIZATION, value);
            }
        }
        next.run(req, extensions).await
    }
}
