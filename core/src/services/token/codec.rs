//! Signed wire form of credentials

use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Credential, TokenKind};
use crate::errors::{DomainError, TokenError};

use super::clock::Clock;
use super::config::SigningContext;

struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KeyPair {
    fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// HS256 encoder/decoder with one key per token kind.
///
/// Decoding checks signature and structure only. Expiry and revocation
/// are decided by [`super::TokenValidator`].
pub struct TokenCodec {
    context: SigningContext,
    clock: Arc<dyn Clock>,
    access_keys: KeyPair,
    refresh_keys: KeyPair,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(context: SigningContext, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "iat", "exp"]);

        Self {
            access_keys: KeyPair::from_secret(context.secret(TokenKind::Access)),
            refresh_keys: KeyPair::from_secret(context.secret(TokenKind::Refresh)),
            context,
            clock,
            validation,
        }
    }

    /// Mint a token for `subject`, returning the wire string
    pub fn mint(&self, subject: &str, kind: TokenKind) -> Result<String, DomainError> {
        self.mint_credential(subject, kind).map(|(token, _)| token)
    }

    /// Mint a token and also hand back the credential it carries
    pub fn mint_credential(
        &self,
        subject: &str,
        kind: TokenKind,
    ) -> Result<(String, Credential), DomainError> {
        let credential = Credential::new(subject, kind, self.clock.now(), self.context.ttl(kind));
        let token = encode(&Header::new(Algorithm::HS256), &credential, &self.keys(kind).encoding)
            .map_err(|e| DomainError::internal(format!("token signing failed: {}", e)))?;
        Ok((token, credential))
    }

    /// Verify signature and structure against the secret of `kind`
    pub fn decode(&self, token: &str, kind: TokenKind) -> Result<Credential, TokenError> {
        let data = decode::<Credential>(token, &self.keys(kind).decoding, &self.validation)
            .map_err(|e| match e.kind() {
                JwtErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::malformed(e.to_string()),
            })?;

        let credential = data.claims;
        if credential.kind != kind {
            return Err(TokenError::malformed(format!(
                "expected {} token, got {}",
                kind, credential.kind
            )));
        }
        if credential.subject.is_empty() {
            return Err(TokenError::malformed("empty subject"));
        }
        Ok(credential)
    }

    pub fn ttl(&self, kind: TokenKind) -> chrono::Duration {
        self.context.ttl(kind)
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    fn keys(&self, kind: TokenKind) -> &KeyPair {
        match kind {
            TokenKind::Access => &self.access_keys,
            TokenKind::Refresh => &self.refresh_keys,
        }
    }
}
