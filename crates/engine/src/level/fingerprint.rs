use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Content hash of a level definition. Trailing whitespace on each body row
/// is ignored so editors that strip it do not change the fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LevelFingerprint(String);

impl LevelFingerprint {
    pub fn of(name: &str, body: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(name.as_bytes());
        hasher.update([0u8]);
        for (i, row) in body.lines().enumerate() {
            if i > 0 {
                hasher.update(b"\n");
            }
            hasher.update(row.trim_end().as_bytes());
        }
        Self(to_hex_lower(&hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex digits, enough to tell levels apart in a listing.
    pub fn short(&self) -> &str {
        &self.0[..12]
    }
}

impl fmt::Display for LevelFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_hex_lower(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}
