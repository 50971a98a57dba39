use futures_util::future::{select, Either};
use futures_util::pin_mut;
use gloo_net::http::{Method, Request};
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("resource answered with status {status}")]
    Unreachable { status: u16 },

    #[error("probe could not complete: {0}")]
    Failed(String),
}

/// Maps a response status onto the probe outcome.
pub fn check_status(ok: bool, status: u16) -> Result<(), ProbeError> {
    if ok {
        Ok(())
    } else {
        Err(ProbeError::Unreachable { status })
    }
}

/// Sends a `HEAD` to `url` and reports whether the resource is there.
pub async fn probe(url: &str, timeout_ms: u32) -> Result<(), ProbeError> {
    let request = Request::new(url).method(Method::HEAD);
    let response = request.send();
    let timeout = TimeoutFuture::new(timeout_ms);
    pin_mut!(response, timeout);

    match select(response, timeout).await {
        Either::Left((Ok(response), _)) => check_status(response.ok(), response.status()),
        Either::Left((Err(err), _)) => Err(ProbeError::Failed(err.to_string())),
        Either::Right(((), _)) => Err(ProbeError::Failed(format!(
            "no answer within {} ms",
            timeout_ms
        ))),
    }
}
