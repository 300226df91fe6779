use rollcall::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_is_bcrypt_not_plaintext() {
    let hash = hash_password("s3cret-pass").unwrap();

    assert_ne!(hash, "s3cret-pass");
    assert!(hash.starts_with("$2"));
}

#[test]
fn test_same_password_hashes_differently() {
    let first = hash_password("s3cret-pass").unwrap();
    let second = hash_password("s3cret-pass").unwrap();

    assert_ne!(first, second);
    assert!(verify_password("s3cret-pass", &first).unwrap());
    assert!(verify_password("s3cret-pass", &second).unwrap());
}

#[test]
fn test_verify_rejects_wrong_password() {
    let hash = hash_password("s3cret-pass").unwrap();

    assert!(!verify_password("s3cret-pasS", &hash).unwrap());
}

#[test]
fn test_plaintext_stored_value_is_an_error() {
    // A raw password in the column is not a bcrypt hash
    assert!(verify_password("s3cret-pass", "s3cret-pass").is_err());
}
