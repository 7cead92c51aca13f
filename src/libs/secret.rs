//! Encrypted on-disk storage for the Keka bearer token.
//!
//! The value is encrypted with AES-256-CBC (PKCS7 padding) using the key and
//! IV embedded by `build.rs`, base64-encoded and written to a single file in
//! the data directory.

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs;
use std::path::{Path, PathBuf};

// Include generated metadata with encryption keys
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone, Debug)]
pub struct Secret {
    prompt: String,
    secret_file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    /// A secret stored under `secret_name` in the data directory.
    pub fn new(secret_name: &str, prompt: &str) -> Self {
        let secret_file_path = DataStorage::new().get_path(secret_name).unwrap_or_else(|_| PathBuf::from(secret_name));
        Self::at(secret_file_path, prompt)
    }

    /// A secret stored at an explicit path.
    pub fn at(path: impl Into<PathBuf>, prompt: &str) -> Self {
        Self {
            prompt: prompt.to_owned(),
            secret_file_path: path.into(),
            key: APP_METADATA_ENCRYPTION_KEY.to_vec(),
            iv: APP_METADATA_ENCRYPTION_IV.to_vec(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.secret_file_path
    }

    pub fn exists(&self) -> bool {
        self.secret_file_path.is_file()
    }

    /// The stored value, or `None` when nothing has been stored.
    pub fn get(&self) -> Result<Option<String>> {
        if !self.exists() {
            return Ok(None);
        }
        self.decrypt().map(Some)
    }

    /// Asks for the value without echoing it and stores the answer.
    pub fn prompt(&self) -> Result<String> {
        let value = Password::with_theme(&ColorfulTheme::default()).with_prompt(&self.prompt).interact()?;
        self.store(&value)?;
        Ok(value)
    }

    pub fn store(&self, value: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let ciphertext = cipher.encrypt_vec(value.as_bytes());
        let encoded = BASE64_STANDARD.encode(&ciphertext);

        if let Some(parent) = self.secret_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.secret_file_path, encoded)?;
        Ok(())
    }

    /// Removes the stored value. Returns whether anything was removed.
    pub fn clear(&self) -> Result<bool> {
        if !self.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.secret_file_path)?;
        Ok(true)
    }

    fn decrypt(&self) -> Result<String> {
        let encoded = fs::read_to_string(&self.secret_file_path)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let decrypted = cipher.decrypt_vec(&ciphertext)?;
        Ok(String::from_utf8(decrypted)?)
    }
}
