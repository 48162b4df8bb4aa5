use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried inside a bearer token.
///
/// The subject is the username of the authenticated account. Tokens are
/// stateless: there is no revocation list, expiry is the only
/// invalidation mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject with a fixed time-to-live from now.
    ///
    /// The service-wide TTL is a policy value taken from configuration
    /// (24 hours by default).
    pub fn for_subject(subject: impl Into<String>, ttl_hours: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::hours(ttl_hours);

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Whether the token is expired at the given instant.
    ///
    /// Expiry is strict: the token stops being valid at the exact second
    /// `exp` names, not one second later.
    pub fn is_expired(&self, now_timestamp: i64) -> bool {
        now_timestamp >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject("alice", 24);

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_is_expired_boundary() {
        let claims = Claims {
            sub: "alice".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // invalid from the expiry instant itself
        assert!(claims.is_expired(1001));
    }
}
