//! Maps the latest control message to the next graph state.
//!
//! Routing is a pure function of the log and the registry. Tokens are
//! compared exactly against registered worker names in registration order,
//! so `BrowserX` never reaches `Browser` and `Browse` never reaches it
//! either.

use super::domain::Route;
use crate::conversation::domain::Message;
use crate::worker::services::WorkerRegistry;

/// Routes on the most recent message of a log.
///
/// `FINISH`, an unregistered token, a non-control message, and an empty
/// log all route to [`Route::End`].
///
/// # Examples
///
/// ```
/// use switchyard::conversation::domain::{MessageBody, MessageLog, RoutingToken};
/// use switchyard::graph::{domain::Route, router};
/// use switchyard::worker::services::WorkerRegistry;
/// use mockable::DefaultClock;
///
/// let registry = WorkerRegistry::new();
/// let mut log = MessageLog::new(registry.vocabulary());
/// assert_eq!(router::route(log.latest(), &registry), Route::End);
///
/// log.append(MessageBody::control(RoutingToken::Finish), &DefaultClock)
///     .expect("FINISH is always legal");
/// assert_eq!(router::route(log.latest(), &registry), Route::End);
/// ```
#[must_use]
pub fn route(latest: Option<&Message>, registry: &WorkerRegistry) -> Route {
    latest
        .and_then(Message::routing_token)
        .map_or(Route::End, |token| route_token(token.as_str(), registry))
}

/// Routes on a raw token string.
#[must_use]
pub fn route_token(token: &str, registry: &WorkerRegistry) -> Route {
    registry
        .lookup(token)
        .map_or(Route::End, |node| Route::Worker(node.name().clone()))
}
