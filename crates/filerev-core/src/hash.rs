//! Content fingerprinting for commits

use data_encoding::HEXLOWER;
use sha2::{Digest, Sha256};

/// Length of a hex-encoded commit hash (SHA-256).
pub const HASH_LEN: usize = 64;

/// Computes the hex-encoded SHA-256 fingerprint of a commit's identity
/// fields.
///
/// The four fields are hashed as a single byte sequence in the fixed order
/// `filename ++ content ++ timestamp ++ message`, with no delimiter between
/// fields. Same inputs always yield the same 64-character lowercase hex
/// string, across runs and platforms.
///
/// With no delimiter, two different field splits of the same byte sequence
/// share a digest: `("ab", "c", ..)` and `("a", "bc", ..)` hash identically.
/// Known framing weakness, kept so hashes stay stable.
pub fn digest(filename: &str, content: &str, timestamp: &str, message: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(filename.as_bytes());
    hasher.update(content.as_bytes());
    hasher.update(timestamp.as_bytes());
    hasher.update(message.as_bytes());
    HEXLOWER.encode(hasher.finalize().as_slice())
}
