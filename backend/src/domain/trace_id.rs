//! Correlation id shared by a portal request, its logs and its error bodies.
//!
//! The frontend may send its own `trace-id` header so a failed login or chat
//! call can be matched against browser logs; [`TraceId::resolve`] decides
//! whether that value is reused. The chosen id lives in tokio task-local
//! storage for the duration of the request, so [`super::Error`] constructors
//! pick it up without it being threaded through every port.
//!
//! Task locals do not follow `tokio::spawn`; wrap spawned work in
//! [`TraceId::scope`] again.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task::futures::TaskLocalFuture;
use tokio::task_local;
use uuid::Uuid;

/// Request and response header carrying the trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT: TraceId;
}

/// Reasons a caller-supplied trace identifier is refused.
#[derive(Debug, thiserror::Error)]
pub enum TraceIdError {
    /// The value is not a UUID.
    #[error("trace id is not a UUID: {0}")]
    Malformed(#[from] uuid::Error),
    /// The nil UUID carries no correlation value.
    #[error("trace id must not be the nil UUID")]
    Nil,
}

/// UUID correlating one portal request.
///
/// # Examples
/// ```
/// use kyc_portal::TraceId;
///
/// let reused = TraceId::resolve(Some(" 6f1c2d1e-0c1b-4d6a-9c59-2f4a1c9a7b10 "));
/// assert_eq!(reused.to_string(), "6f1c2d1e-0c1b-4d6a-9c59-2f4a1c9a7b10");
///
/// let fresh = TraceId::resolve(Some("not-a-uuid"));
/// assert_ne!(fresh.to_string(), "not-a-uuid");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reuse a well-formed incoming id, or mint a random one.
    #[must_use]
    pub fn resolve(incoming: Option<&str>) -> Self {
        incoming
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(Self::random)
    }

    /// Identifier of the request being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with this id as the current one.
    ///
    /// # Examples
    /// ```
    /// use kyc_portal::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
    /// let id = TraceId::resolve(Some("6f1c2d1e-0c1b-4d6a-9c59-2f4a1c9a7b10"));
    /// assert_eq!(id.scope(async { TraceId::current() }).await, Some(id));
    /// assert_eq!(TraceId::current(), None);
    /// # });
    /// ```
    pub fn scope<F>(self, fut: F) -> TaskLocalFuture<TraceId, F>
    where
        F: Future,
    {
        CURRENT.scope(self, fut)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for TraceId {
    type Err = TraceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(s.trim())?;
        if uuid.is_nil() {
            return Err(TraceIdError::Nil);
        }
        Ok(Self(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const KNOWN: &str = "6f1c2d1e-0c1b-4d6a-9c59-2f4a1c9a7b10";

    #[rstest]
    #[case(KNOWN)]
    #[case("  6f1c2d1e-0c1b-4d6a-9c59-2f4a1c9a7b10\t")]
    #[case("6F1C2D1E-0C1B-4D6A-9C59-2F4A1C9A7B10")]
    fn resolve_reuses_well_formed_ids(#[case] incoming: &str) {
        assert_eq!(TraceId::resolve(Some(incoming)).to_string(), KNOWN);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("abc"))]
    #[case(Some("00000000-0000-0000-0000-000000000000"))]
    fn resolve_mints_fresh_ids_otherwise(#[case] incoming: Option<&str>) {
        let id = TraceId::resolve(incoming);
        assert_ne!(Some(id.to_string().as_str()), incoming);
        assert!(id.to_string().parse::<TraceId>().is_ok());
    }

    #[test]
    fn nil_uuid_is_refused() {
        let error = "00000000-0000-0000-0000-000000000000"
            .parse::<TraceId>()
            .expect_err("nil refused");
        assert!(matches!(error, TraceIdError::Nil));
    }

    #[tokio::test]
    async fn current_follows_scope() {
        let id = TraceId::random();
        let inner = id.scope(async { TraceId::current() }).await;
        assert_eq!(inner, Some(id));
        assert_eq!(TraceId::current(), None);
    }
}
