use cookbook::cookbook_core::errors::RESOURCE_ISSUE_MESSAGE;
use cookbook::cookbook_core::{hash_password, verify_password};

#[test]
fn test_hash_is_not_the_password() {
    let hash = hash_password("testpassword123").unwrap();
    assert!(!hash.is_empty());
    assert_ne!(hash, "testpassword123");
    assert!(hash.starts_with("$2"));
}

#[test]
fn test_hashes_are_salted() {
    let first = hash_password("samepassword").unwrap();
    let second = hash_password("samepassword").unwrap();
    assert_ne!(first, second);
    assert!(verify_password("samepassword", &first).unwrap());
    assert!(verify_password("samepassword", &second).unwrap());
}

#[test]
fn test_verify_is_case_sensitive() {
    let hash = hash_password("Password").unwrap();
    assert!(!verify_password("password", &hash).unwrap());
    assert!(!verify_password("PASSWORD", &hash).unwrap());
}

#[test]
fn test_unicode_and_special_characters() {
    for password in ["pässwörd🔒", "p@$$w0rd!#%^&*()"] {
        let hash = hash_password(password).unwrap();
        assert!(verify_password(password, &hash).unwrap());
    }
}

#[test]
fn test_invalid_hash_is_a_read_issue() {
    let err = verify_password("testpassword", "not_a_valid_bcrypt_hash").unwrap_err();
    assert_eq!(err.to_string(), RESOURCE_ISSUE_MESSAGE);
}
