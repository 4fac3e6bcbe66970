//! Process-level failure boundary.
//!
//! Panics are logged and contained: a request whose relay work panics gets a
//! 500 and the server keeps accepting connections. Serving availability is
//! preferred over stopping on an unexpected state.

use std::any::Any;
use std::future::Future;
use std::panic;

use crate::errors::RelayError;

/// Routes every panic through the logger instead of raw stderr.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let thread = std::thread::current();
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        log::error!(
            "panic in thread '{}' at {}: {}",
            thread.name().unwrap_or("<unnamed>"),
            location,
            panic_message(info.payload())
        );
    }));
}

pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Runs `future` as its own task so a panic stops at the join handle and
/// comes back as `RelayError::Internal`.
pub async fn supervise<F, T>(future: F) -> Result<T, RelayError>
where
    F: Future<Output = Result<T, RelayError>> + 'static,
    T: 'static,
{
    match actix_web::rt::spawn(future).await {
        Ok(result) => result,
        Err(join_error) => {
            let detail = if join_error.is_panic() {
                panic_message(&*join_error.into_panic())
            } else {
                join_error.to_string()
            };
            log::error!("relay task aborted: {}", detail);
            Err(RelayError::Internal(detail))
        }
    }
}
