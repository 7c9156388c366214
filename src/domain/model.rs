use crate::utils::error::{BackupError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::{rngs::OsRng, RngCore};
use std::path::PathBuf;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of an AES-CBC initialization vector (one block, 16 bytes).
pub const IV_LEN: usize = 16;

/// Key and IV for one backup run.
///
/// The key is injected through configuration. The IV is generated fresh per
/// run unless a pinned IV is supplied (deterministic test runs only — reusing
/// one IV across CBC encryptions under the same key leaks plaintext structure).
#[derive(Clone)]
pub struct CryptoMaterial {
    key: [u8; KEY_LEN],
    iv: [u8; IV_LEN],
}

impl CryptoMaterial {
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self> {
        if key.len() != KEY_LEN {
            return Err(BackupError::CryptoSetup {
                message: format!("AES-256 key must be {} bytes, got {}", KEY_LEN, key.len()),
            });
        }
        if iv.len() != IV_LEN {
            return Err(BackupError::CryptoSetup {
                message: format!("AES IV must be {} bytes, got {}", IV_LEN, iv.len()),
            });
        }

        let mut key_arr = [0u8; KEY_LEN];
        key_arr.copy_from_slice(key);
        let mut iv_arr = [0u8; IV_LEN];
        iv_arr.copy_from_slice(iv);

        Ok(Self {
            key: key_arr,
            iv: iv_arr,
        })
    }

    /// Build material with a fresh random IV from the OS CSPRNG.
    pub fn with_random_iv(key: &[u8]) -> Result<Self> {
        let mut iv = [0u8; IV_LEN];
        OsRng.fill_bytes(&mut iv);
        Self::new(key, &iv)
    }

    /// Decode a base64 key (and optionally a pinned base64 IV) into material.
    pub fn from_base64(key_b64: &str, iv_b64: Option<&str>) -> Result<Self> {
        let key = STANDARD
            .decode(key_b64)
            .map_err(|e| BackupError::CryptoSetup {
                message: format!("key is not valid base64: {}", e),
            })?;

        match iv_b64 {
            Some(encoded) => {
                let iv = STANDARD
                    .decode(encoded)
                    .map_err(|e| BackupError::CryptoSetup {
                        message: format!("IV is not valid base64: {}", e),
                    })?;
                Self::new(&key, &iv)
            }
            None => Self::with_random_iv(&key),
        }
    }

    pub fn key(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    pub fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }
}

impl std::fmt::Debug for CryptoMaterial {
    // Never print key bytes.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoMaterial")
            .field("key", &"<redacted>")
            .field("iv", &"<redacted>")
            .finish()
    }
}

/// The sealed local file that is the literal upload payload.
///
/// Content layout: `IV (16 bytes) || AES-256-CBC(key, iv, gzip(source bytes))`.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub blob_name: String,
    pub bytes: u64,
}

/// Outcome of a completed upload.
#[derive(Debug, Clone)]
pub struct UploadReceipt {
    pub container: String,
    pub blob_name: String,
    pub bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_key() {
        let err = CryptoMaterial::new(&[0u8; 31], &[0u8; 16]).unwrap_err();
        assert!(matches!(err, BackupError::CryptoSetup { .. }));
    }

    #[test]
    fn rejects_long_iv() {
        let err = CryptoMaterial::new(&[0u8; 32], &[0u8; 17]).unwrap_err();
        assert!(matches!(err, BackupError::CryptoSetup { .. }));
    }

    #[test]
    fn accepts_exact_sizes() {
        let material = CryptoMaterial::new(&[7u8; 32], &[9u8; 16]).unwrap();
        assert_eq!(material.key(), &[7u8; 32]);
        assert_eq!(material.iv(), &[9u8; 16]);
    }

    #[test]
    fn random_iv_differs_between_calls() {
        let a = CryptoMaterial::with_random_iv(&[1u8; 32]).unwrap();
        let b = CryptoMaterial::with_random_iv(&[1u8; 32]).unwrap();
        assert_ne!(a.iv(), b.iv());
    }

    #[test]
    fn rejects_malformed_base64_key() {
        let err = CryptoMaterial::from_base64("not-base64!!!", None).unwrap_err();
        assert!(matches!(err, BackupError::CryptoSetup { .. }));
    }

    #[test]
    fn debug_output_redacts_key() {
        let material = CryptoMaterial::new(&[7u8; 32], &[9u8; 16]).unwrap();
        let printed = format!("{:?}", material);
        assert!(!printed.contains('7'));
        assert!(printed.contains("<redacted>"));
    }
}
