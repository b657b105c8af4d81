use axum_extra::extract::cookie::Key;
use hkdf::Hkdf;
use sha2::Sha256;

const HKDF_SALT: &[u8] = b"formdrop-v1";
const HKDF_INFO: &[u8] = b"cookie-signing-key";

/// Derive the 64-byte cookie signing key from the configured secret.
///
/// The secret may be any length (the development default is three bytes),
/// so it is stretched with HKDF-SHA256 instead of being used directly.
pub fn derive_cookie_key(secret: &str) -> Key {
    let hk = Hkdf::<Sha256>::new(Some(HKDF_SALT), secret.as_bytes());
    let mut okm = [0u8; 64];
    hk.expand(HKDF_INFO, &mut okm)
        .expect("64 bytes is a valid HKDF-SHA256 output length");
    Key::from(&okm)
}
