use dotenv::dotenv;
use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use toml::Value;

const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;

struct AppMetadata {
    file: File,
}

impl AppMetadata {
    pub fn new() -> io::Result<Self> {
        let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
        let dest_path = Path::new(&out_dir).join("app_metadata.rs");
        let file = File::create(&dest_path)?;
        Ok(Self { file })
    }

    pub fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        write!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &str = {:?};\n",
            &key.to_uppercase(),
            value
        )
    }

    pub fn write_bytes(&mut self, key: &str, value: &[u8]) -> io::Result<()> {
        write!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &[u8; {}] = &[",
            &key.to_uppercase(),
            value.len()
        )?;

        for (i, byte) in value.iter().enumerate() {
            if i > 0 {
                write!(self.file, ", ")?;
            }
            write!(self.file, "{}", byte)?;
        }

        writeln!(self.file, "];")
    }
}

/// Pads or truncates `seed` to exactly `len` bytes.
fn fixed_len(seed: String, len: usize) -> Vec<u8> {
    let mut bytes = seed.into_bytes();
    bytes.truncate(len);
    bytes.resize(len, b'!');
    bytes
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=ENCRYPTION_KEY");
    println!("cargo:rerun-if-env-changed=ENCRYPTION_IV");

    // Load .env file if it exists
    let _ = dotenv();

    let cargo_toml = fs::read_to_string("Cargo.toml")?;
    let cargo_toml: Value = toml::from_str(&cargo_toml).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let package_name = env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "clockout".to_string());

    let mut app_metadata = AppMetadata::new()?;
    app_metadata.write("NAME", &package_name)?;
    app_metadata.write("VERSION", &env::var("CARGO_PKG_VERSION").unwrap_or_default())?;

    if let Some(metadata) = cargo_toml.get("package").and_then(|pkg| pkg.get("metadata")).and_then(|meta| meta.as_table()) {
        for (key, value) in metadata {
            if let Some(value) = value.as_str() {
                app_metadata.write(key, value)?;
            }
        }
    }

    let (encryption_key, encryption_iv) = match (env::var("ENCRYPTION_KEY"), env::var("ENCRYPTION_IV")) {
        (Ok(key), Ok(iv)) => {
            if key.len() != KEY_LEN {
                panic!("ENCRYPTION_KEY must be exactly {} bytes long, got {} bytes", KEY_LEN, key.len());
            }
            if iv.len() != IV_LEN {
                panic!("ENCRYPTION_IV must be exactly {} bytes long, got {} bytes", IV_LEN, iv.len());
            }
            (key.into_bytes(), iv.into_bytes())
        }
        _ => {
            println!("cargo:warning=ENCRYPTION_KEY or ENCRYPTION_IV not found in environment.");
            println!("cargo:warning=Using default keys. The stored bearer token is only obfuscated.");

            (
                fixed_len(format!("{}_default_encryption_key_32b", package_name), KEY_LEN),
                fixed_len(format!("{}_iv_16b", package_name), IV_LEN),
            )
        }
    };

    app_metadata.write_bytes("ENCRYPTION_KEY", &encryption_key)?;
    app_metadata.write_bytes("ENCRYPTION_IV", &encryption_iv)?;

    Ok(())
}
