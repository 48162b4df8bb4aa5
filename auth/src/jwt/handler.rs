use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Signs and validates bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256) with a server-held symmetric secret.
/// The signature is verified before any claim is looked at, and the HMAC
/// comparison inside jsonwebtoken is constant-time.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new handler from the server secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign claims into a token string.
    ///
    /// # Errors
    /// * `SigningFailed` - serialization or signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Validate a token and return its claims.
    ///
    /// Signature first, then expiry. Expiry is checked explicitly so the
    /// token is rejected from the exact instant `exp` names; the
    /// library's built-in check would grant 60 seconds of leeway.
    ///
    /// # Errors
    /// * `Malformed` - not structurally a token, or claims don't parse
    /// * `BadSignature` - signature does not match the claims under the secret
    /// * `Expired` - past its expiry instant
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::BadSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(SECRET);
        let claims = Claims::for_subject("alice", 24);

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_garbage_is_malformed() {
        let handler = JwtHandler::new(SECRET);

        let result = handler.decode("not-a-token");
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret_is_bad_signature() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = handler1
            .encode(&Claims::for_subject("alice", 24))
            .expect("Failed to encode token");

        let result = handler2.decode(&token);
        assert_eq!(result, Err(TokenError::BadSignature));
    }

    #[test]
    fn test_tampered_signature_is_bad_signature() {
        let handler = JwtHandler::new(SECRET);
        let token = handler
            .encode(&Claims::for_subject("alice", 24))
            .expect("Failed to encode token");

        // Flip the last character of the signature segment
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });
        assert_ne!(token, tampered);

        let result = handler.decode(&tampered);
        assert_eq!(result, Err(TokenError::BadSignature));
    }

    #[test]
    fn test_tampered_payload_is_bad_signature() {
        let handler = JwtHandler::new(SECRET);
        let token = handler
            .encode(&Claims::for_subject("alice", 24))
            .expect("Failed to encode token");

        // Flip one byte inside the claims segment; the signature no longer
        // covers what the payload now says
        let parts: Vec<&str> = token.split('.').collect();
        let mut payload: Vec<u8> = parts[1].bytes().collect();
        payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
        let tampered = format!(
            "{}.{}.{}",
            parts[0],
            String::from_utf8(payload).unwrap(),
            parts[2]
        );

        let result = handler.decode(&tampered);
        assert_eq!(result, Err(TokenError::BadSignature));
    }

    #[test]
    fn test_expired_token_is_expired() {
        let handler = JwtHandler::new(SECRET);

        let claims = Claims {
            sub: "alice".to_string(),
            iat: 1_000_000,
            exp: 1_000_001, // long past
        };
        let token = handler.encode(&claims).expect("Failed to encode token");

        let result = handler.decode(&token);
        assert_eq!(result, Err(TokenError::Expired));
    }

    #[test]
    fn test_error_kinds_are_distinct() {
        let handler = JwtHandler::new(SECRET);
        let other = JwtHandler::new(b"another_secret_at_least_32_bytes!!");

        let stale = Claims {
            sub: "alice".to_string(),
            iat: 0,
            exp: 1,
        };

        let malformed = handler.decode("x.y").unwrap_err();
        let forged = handler
            .decode(&other.encode(&Claims::for_subject("alice", 1)).unwrap())
            .unwrap_err();
        let expired = handler.decode(&handler.encode(&stale).unwrap()).unwrap_err();

        assert!(matches!(malformed, TokenError::Malformed(_)));
        assert_eq!(forged, TokenError::BadSignature);
        assert_eq!(expired, TokenError::Expired);
    }
}
