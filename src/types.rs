// Data structures for the JWKS server

use chrono::{DateTime, Utc};
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};

/// RSA key pair with metadata
#[derive(Clone)]
pub struct KeyPair {
    pub kid: String,                // Key ID (128-bit random, lowercase hex)
    pub private_key: RsaPrivateKey, // RSA private key
    pub public_key: RsaPublicKey,   // RSA public key
    pub expires_at: DateTime<Utc>,  // Expiry timestamp
}

/// The two fixed key pairs the server serves and signs with.
///
/// Generated once at startup and never mutated, so handlers can share it
/// behind an `Arc` without locking.
pub struct KeyStore {
    pub active: KeyPair,  // expires in the future
    pub expired: KeyPair, // expiry already in the past
}

/// JSON Web Key structure for JWKS response
#[derive(Serialize)]
pub struct JsonWebKey {
    pub kty: String, // Key type (RSA)
    #[serde(rename = "use")]
    pub key_use: String, // Key usage (sig for signature)
    pub alg: String, // Algorithm (RS256)
    pub kid: String, // Key ID
    pub n: String,   // Modulus (base64url, no padding)
    pub e: String,   // Exponent (base64url, no padding)
}

/// JWKS response format
#[derive(Serialize)]
pub struct JwksResponse {
    pub keys: Vec<JsonWebKey>,
}

/// JWT Claims structure
#[derive(Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject
    pub iss: String, // Issuer
    pub iat: i64,    // Issued at (epoch seconds)
    pub exp: i64,    // Expires at (epoch seconds)
}

/// Auth endpoint response
#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Query parameters for the auth endpoint.
/// Only the presence of `expired` matters; its value is ignored.
#[derive(Deserialize)]
pub struct AuthQuery {
    pub expired: Option<String>,
}
