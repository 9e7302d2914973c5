//! Password authentication against a stored SHA-256 digest.
//!
//! The secret store never holds the plaintext password. It holds the lower-case hex encoding of
//! the password's SHA-256 digest, and callers are authenticated by hashing what they send the
//! same way. Produce the stored value with `route53-ddns hash-password <password>` (or
//! `printf %s <password> | sha256sum`).

use crate::error::Error;
use crate::secret_store::DynSecretStore;
#[allow(deprecated)]
use ring::constant_time;
use ring::digest;

/// Lower-case hex SHA-256 digest of `password`.
#[must_use]
pub fn hash_password(password: &str) -> String {
    hex::encode(digest::digest(&digest::SHA256, password.as_bytes()))
}

/// Whether `password` hashes to `stored`. Exact match of the hex digests, compared without an
/// early exit on the first differing byte.
#[must_use]
#[allow(deprecated)]
pub fn password_matches(password: &str, stored: &str) -> bool {
    constant_time::verify_slices_are_equal(hash_password(password).as_bytes(), stored.as_bytes())
        .is_ok()
}

/// Fetch the stored digest named by `reference` and check `password` against it.
///
/// # Errors
///
/// Returns [`Error::SecretUnavailable`] if the store has no value (or an empty one) for
/// `reference`, any [`Error::SecretStore`] raised by the store itself, and
/// [`Error::InvalidPassword`] if the digests differ.
pub async fn authenticate(
    secret_store: &DynSecretStore,
    reference: &str,
    password: &str,
) -> Result<(), Error> {
    let stored = match secret_store.get_secret(reference).await? {
        Some(stored) if !stored.is_empty() => stored,
        _ => return Err(Error::SecretUnavailable),
    };
    if password_matches(password, &stored) {
        Ok(())
    } else {
        Err(Error::InvalidPassword)
    }
}
