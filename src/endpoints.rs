// JWKS discovery and token issuance handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use rsa::pkcs8::EncodePrivateKey;
use rsa::traits::PublicKeyParts;
use std::sync::Arc;

use crate::types::{AuthQuery, AuthResponse, Claims, JsonWebKey, JwksResponse, KeyPair, KeyStore};

/// Application state shared by the handlers.
/// The key store is immutable after startup, so a plain `Arc` suffices.
pub type AppState = Arc<KeyStore>;

/// Public JWK view of a key pair. Carries no private material.
///
/// Both the modulus and the exponent go through the same
/// big-integer-to-bytes path, so nonstandard exponents encode correctly.
pub fn to_jwk(pair: &KeyPair) -> JsonWebKey {
    let n_bytes = pair.public_key.n().to_bytes_be();
    let e_bytes = pair.public_key.e().to_bytes_be();

    JsonWebKey {
        kty: "RSA".to_string(),
        key_use: "sig".to_string(),
        alg: "RS256".to_string(),
        kid: pair.kid.clone(),
        n: URL_SAFE_NO_PAD.encode(n_bytes),
        e: URL_SAFE_NO_PAD.encode(e_bytes),
    }
}

/// JWKS endpoint handler - serves public keys in JWKS format.
/// Only keys that are unexpired at query time are published; an empty
/// key list is still a 200 with `"keys": []`.
pub async fn jwks_handler(State(store): State<AppState>) -> Json<JwksResponse> {
    let now = Utc::now();
    let mut keys = Vec::new();

    if !store.active.is_expired(now) {
        keys.push(to_jwk(&store.active));
    }

    Json(JwksResponse { keys })
}

/// Auth endpoint handler - issues a signed RS256 JWT.
///
/// The presence of an `expired` query parameter (value ignored) switches
/// to the expired key pair and an `exp` already in the past, so downstream
/// verifiers can be tested against a token that must fail validation.
pub async fn auth_handler(
    State(store): State<AppState>,
    Query(params): Query<AuthQuery>,
) -> Result<Json<AuthResponse>, (StatusCode, &'static str)> {
    let now = Utc::now();

    let (pair, exp) = if params.expired.is_some() {
        (&store.expired, now - Duration::minutes(1))
    } else {
        (&store.active, now + Duration::minutes(5))
    };

    let claims = Claims {
        sub: "fake-user".to_string(),
        iss: "jwks-server".to_string(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(pair.kid.clone());

    let token = sign(&header, &claims, pair).map_err(|err| {
        tracing::error!(kid = %pair.kid, error = %err, "failed to sign token");
        (StatusCode::INTERNAL_SERVER_ERROR, "failed to sign token")
    })?;

    Ok(Json(AuthResponse { token }))
}

/// Sign claims with the pair's private key via jsonwebtoken.
/// jsonwebtoken only accepts PEM/DER input, so the key is exported to
/// PKCS#8 PEM first.
fn sign(
    header: &Header,
    claims: &Claims,
    pair: &KeyPair,
) -> Result<String, Box<dyn std::error::Error>> {
    let pem = pair.private_key.to_pkcs8_pem(rsa::pkcs8::LineEnding::LF)?;
    let encoding_key = EncodingKey::from_rsa_pem(pem.as_bytes())?;
    Ok(encode(header, claims, &encoding_key)?)
}
