#[cfg(test)]
mod tests {
    use clockout::libs::secret::Secret;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SecretTestContext {
        temp_dir: TempDir,
        test_prompt: String,
        secret_file_name: String,
    }

    impl SecretTestContext {
        fn secret(&self) -> Secret {
            Secret::at(self.temp_dir.path().join(&self.secret_file_name), &self.test_prompt)
        }
    }

    impl TestContext for SecretTestContext {
        fn setup() -> Self {
            SecretTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                test_prompt: "Enter test token".to_string(),
                secret_file_name: ".test_secret".to_string(),
            }
        }
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_missing_secret(ctx: &mut SecretTestContext) {
        let secret = ctx.secret();
        assert!(!secret.exists());
        assert_eq!(secret.get().unwrap(), None);
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_store_and_get(ctx: &mut SecretTestContext) {
        let secret = ctx.secret();
        secret.store("eyJhbGciOiJIUzI1NiJ9.payload.signature").unwrap();

        assert!(secret.exists());
        assert_eq!(secret.get().unwrap().as_deref(), Some("eyJhbGciOiJIUzI1NiJ9.payload.signature"));

        // another handle on the same file reads the same value
        assert_eq!(ctx.secret().get().unwrap().as_deref(), Some("eyJhbGciOiJIUzI1NiJ9.payload.signature"));
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_stored_file_is_not_plaintext(ctx: &mut SecretTestContext) {
        let secret = ctx.secret();
        secret.store("super-secret-value").unwrap();

        let on_disk = fs::read_to_string(secret.path()).unwrap();
        assert!(!on_disk.contains("super-secret-value"));
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_overwrite(ctx: &mut SecretTestContext) {
        let secret = ctx.secret();
        secret.store("first").unwrap();
        secret.store("second").unwrap();
        assert_eq!(secret.get().unwrap().as_deref(), Some("second"));
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_clear(ctx: &mut SecretTestContext) {
        let secret = ctx.secret();
        assert!(!secret.clear().unwrap());

        secret.store("value").unwrap();
        assert!(secret.clear().unwrap());
        assert!(!secret.exists());
        assert_eq!(secret.get().unwrap(), None);
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_corrupt_secret_file(ctx: &mut SecretTestContext) {
        let secret = ctx.secret();
        fs::write(secret.path(), "this is not base64 ciphertext!").unwrap();
        assert!(secret.get().is_err());
    }
}
