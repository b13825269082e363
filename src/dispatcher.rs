// src/dispatcher.rs
//
// responsibilities:
//  * Dispatcher trait: exact-path lookup + bound invocation of one operation
//  * containing every binding/invocation failure inside Dispatch

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use tracing::error;

use crate::registry::{bind, Registry};

/// Outcome of one dispatch attempt. The connection handler only needs to
/// distinguish "something to send" from "fall through to static files";
/// `HandlerError` carries the fixed failure body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Found(String),
    NotFound,
    HandlerError(String),
}

pub trait Dispatcher: Send + Sync {
    fn dispatch(&self, path: &str, query: &HashMap<String, String>) -> Dispatch;
}

const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

impl Dispatcher for Registry {
    /// Exact string match on the path, no normalization. On a hit, binds
    /// every declared parameter in order and invokes the operation on the
    /// owning singleton. Failures (including handler panics) never
    /// propagate; they collapse to `HandlerError`. A miss is silent.
    fn dispatch(&self, path: &str, query: &HashMap<String, String>) -> Dispatch {
        let Some(entry) = self.route(path) else {
            return Dispatch::NotFound;
        };

        let args: Vec<Option<String>> = entry.params.iter().map(|p| bind(p, query)).collect();

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            (entry.operation)(entry.handler.as_ref(), &args)
        }));

        match outcome {
            Ok(Ok(body)) => Dispatch::Found(body),
            Ok(Err(e)) => {
                error!(path, error = %e, "handler invocation failed");
                Dispatch::HandlerError(INTERNAL_ERROR_BODY.to_string())
            }
            Err(_) => {
                error!(path, "handler panicked");
                Dispatch::HandlerError(INTERNAL_ERROR_BODY.to_string())
            }
        }
    }
}
