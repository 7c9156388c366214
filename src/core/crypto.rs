//! AES-256-CBC encryption over gzip-compressed bytes.
//!
//! Compression must precede encryption: ciphertext is high-entropy, so the
//! reverse order would not shrink anything.

use crate::domain::model::{CryptoMaterial, IV_LEN};
use crate::utils::error::{BackupError, Result};
use aes::Aes256;
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Read};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Gzip-compress everything the reader yields.
pub fn compress<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()
}

pub fn decompress(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

/// Encrypt with PKCS#7 padding. Infallible once the material is validated.
pub fn encrypt(material: &CryptoMaterial, plaintext: &[u8]) -> Vec<u8> {
    Aes256CbcEnc::new(material.key().into(), material.iv().into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

pub fn decrypt(material: &CryptoMaterial, ciphertext: &[u8]) -> Result<Vec<u8>> {
    Aes256CbcDec::new(material.key().into(), material.iv().into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| BackupError::CryptoSetup {
            message: "decryption failed: wrong key or corrupted ciphertext".to_string(),
        })
}

/// Recover the original source bytes from a full artifact (`IV || ciphertext`).
pub fn decrypt_artifact(key: &[u8], artifact: &[u8]) -> Result<Vec<u8>> {
    if artifact.len() < IV_LEN {
        return Err(BackupError::CryptoSetup {
            message: format!(
                "artifact too short to contain an IV ({} bytes)",
                artifact.len()
            ),
        });
    }
    let (iv, ciphertext) = artifact.split_at(IV_LEN);
    let material = CryptoMaterial::new(key, iv)?;
    let compressed = decrypt(&material, ciphertext)?;
    Ok(decompress(&compressed)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_material() -> CryptoMaterial {
        CryptoMaterial::new(&[0x42u8; 32], &[0x24u8; 16]).unwrap()
    }

    #[test]
    fn gzip_round_trip() {
        let input = b"hello hello hello hello".to_vec();
        let compressed = compress(input.as_slice()).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn encrypt_decrypt_round_trip() {
        let material = test_material();
        let plaintext = b"the quick brown fox";
        let ciphertext = encrypt(&material, plaintext);
        assert_ne!(&ciphertext, plaintext);
        assert_eq!(ciphertext.len() % 16, 0);
        assert_eq!(decrypt(&material, &ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn decrypt_with_wrong_key_fails() {
        let ciphertext = encrypt(&test_material(), b"secret payload");
        let wrong = CryptoMaterial::new(&[0x43u8; 32], &[0x24u8; 16]).unwrap();
        // PKCS#7 unpadding rejects garbage plaintext with overwhelming probability.
        assert!(decrypt(&wrong, &ciphertext).is_err());
    }

    #[test]
    fn artifact_round_trip() {
        let material = test_material();
        let source = vec![0xAB; 10];
        let compressed = compress(source.as_slice()).unwrap();
        let mut artifact = material.iv().to_vec();
        artifact.extend(encrypt(&material, &compressed));

        let recovered = decrypt_artifact(&[0x42u8; 32], &artifact).unwrap();
        assert_eq!(recovered, source);
    }

    #[test]
    fn truncated_artifact_is_rejected() {
        let err = decrypt_artifact(&[0x42u8; 32], &[0u8; 5]).unwrap_err();
        assert!(matches!(err, BackupError::CryptoSetup { .. }));
    }
}
