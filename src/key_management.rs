// Key generation and expiry rules for the JWKS server

use chrono::{DateTime, Duration, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use rsa::{RsaPrivateKey, RsaPublicKey};
use thiserror::Error;

use crate::types::{KeyPair, KeyStore};

const RSA_KEY_BITS: usize = 2048;
const KID_BYTES: usize = 16;

/// Errors that can occur while building the key store.
/// Fatal at startup; no partial store is ever returned.
#[derive(Debug, Error)]
pub enum KeyGenerationError {
    #[error("RSA key generation failed: {0}")]
    Rsa(#[from] rsa::Error),
    #[error("secure randomness unavailable: {0}")]
    Rng(#[from] rand::Error),
}

/// Random 128-bit key identifier, encoded as 32 lowercase hex chars.
fn new_kid() -> Result<String, KeyGenerationError> {
    let mut bytes = [0u8; KID_BYTES];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(hex::encode(bytes))
}

impl KeyPair {
    /// Generate a fresh 2048-bit RSA key pair with the given expiry.
    pub fn generate(expires_at: DateTime<Utc>) -> Result<Self, KeyGenerationError> {
        let mut rng = OsRng;
        let private_key = RsaPrivateKey::new(&mut rng, RSA_KEY_BITS)?;
        let public_key = RsaPublicKey::from(&private_key);
        let kid = new_kid()?;

        Ok(KeyPair {
            kid,
            private_key,
            public_key,
            expires_at,
        })
    }

    /// A key counts as expired exactly at its expiry instant (`at >= expires_at`).
    pub fn is_expired(&self, at: DateTime<Utc>) -> bool {
        at >= self.expires_at
    }
}

impl KeyStore {
    /// Generate the fixed active/expired pair set.
    ///
    /// Both expiries are offsets from a single snapshot of "now": the active
    /// key expires one hour from now, the expired key one hour ago.
    pub fn generate() -> Result<Self, KeyGenerationError> {
        let now = Utc::now();

        let active = KeyPair::generate(now + Duration::hours(1))?;
        let expired = KeyPair::generate(now - Duration::hours(1))?;

        Ok(KeyStore { active, expired })
    }
}
