// Creator pseudo-identity
//
// The board trusts an opaque creator_id that clients derive from a shared
// passphrase. It gates edits and deletes of an event to whoever can
// reproduce the digest; it is not authentication and provides no real
// security.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the trimmed passphrase.
pub fn derive_creator_id(passphrase: &str) -> String {
    let digest = Sha256::digest(passphrase.trim().as_bytes());
    hex::encode(digest)
}
