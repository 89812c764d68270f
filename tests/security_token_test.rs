// Security policy encoding and signing integration tests
//
// The golden policy/signature strings below were derived independently of
// this implementation (HMAC-SHA256 over the canonical JSON, lowercase hex;
// URL-safe unpadded base64 of the same bytes).

use cdnkit::security::{Call, Policy, Security, SecurityError};
use cdnkit::{FileLink, Transform, TransformPipeline};

// Test: golden regression for the basic read policy
#[test]
fn test_basic_read_policy_golden_values() {
    let policy = Policy::new().expiry(1_700_000_000).call(Call::Read);
    let security = Security::new(&policy, "MY-SECRET").unwrap();

    assert_eq!(
        security.encoded_policy(),
        "eyJleHBpcnkiOjE3MDAwMDAwMDAsImNhbGwiOlsicmVhZCJdfQ"
    );
    assert_eq!(
        security.signature(),
        "eb6cba907c736d2b1308b7d4b00ed227909a21e3f78c49fc4740f855550e3ac1"
    );
}

// Test: golden regression for a policy with a handle restriction
#[test]
fn test_handle_restricted_policy_golden_values() {
    let policy = Policy::new()
        .expiry(1_700_000_000)
        .calls([Call::Read, Call::Store])
        .handle("abc123");
    let security = Security::new(&policy, "MY-SECRET").unwrap();

    assert_eq!(
        security.encoded_policy(),
        "eyJleHBpcnkiOjE3MDAwMDAwMDAsImNhbGwiOlsicmVhZCIsInN0b3JlIl0sImhhbmRsZSI6ImFiYzEyMyJ9"
    );
    assert_eq!(
        security.signature(),
        "64e5b2f73460294798b757df8fba185ccb12c8880aec9ae96721f7ee585acc5e"
    );
}

// Test: golden regression for a path-scoped policy with no expiry
#[test]
fn test_path_scoped_policy_golden_values() {
    let policy = Policy::new()
        .calls([Call::Convert, Call::Read])
        .path("/albums/*");
    let security = Security::new(&policy, "top-secret").unwrap();

    // call order is the enumeration order (read before convert),
    // regardless of how the permissions were added
    assert_eq!(
        security.encoded_policy(),
        "eyJjYWxsIjpbInJlYWQiLCJjb252ZXJ0Il0sInBhdGgiOiIvYWxidW1zLyoifQ"
    );
    assert_eq!(
        security.signature(),
        "e828803c13a7d2ca7a9676591d93b5e299565bf1a921e35865de0f5f5f3dfb49"
    );
}

// Test: golden regression for an expiry-only policy
#[test]
fn test_expiry_only_policy_golden_values() {
    let policy = Policy::new().expiry(1_735_689_600);
    let security = Security::new(&policy, "MY-SECRET").unwrap();

    assert_eq!(security.encoded_policy(), "eyJleHBpcnkiOjE3MzU2ODk2MDB9");
    assert_eq!(
        security.signature(),
        "f96afda3bc396c4c494d4a8727e71274a47c7c14d7bce6506242fab2e29d29a4"
    );
}

// Test: identical semantic content signs identically across population order
#[test]
fn test_signature_determinism() {
    let a = Policy::new()
        .expiry(1_700_000_000)
        .call(Call::Store)
        .call(Call::Read)
        .handle("abc123");
    let b = Policy::new()
        .handle("abc123")
        .calls([Call::Read, Call::Store])
        .expiry(1_700_000_000);

    assert_eq!(
        Security::new(&a, "MY-SECRET").unwrap(),
        Security::new(&b, "MY-SECRET").unwrap()
    );
}

// Test: different secrets produce different signatures over the same policy
#[test]
fn test_secret_changes_signature_not_policy() {
    let policy = Policy::new().expiry(1_700_000_000).call(Call::Read);
    let a = Security::new(&policy, "MY-SECRET").unwrap();
    let b = Security::new(&policy, "OTHER-SECRET").unwrap();

    assert_eq!(a.encoded_policy(), b.encoded_policy());
    assert_ne!(a.signature(), b.signature());
}

// Test: signing without a secret fails fast
#[test]
fn test_missing_secret_is_a_configuration_error() {
    let policy = Policy::new().call(Call::Read);
    assert!(matches!(
        Security::new(&policy, ""),
        Err(SecurityError::MissingSecret)
    ));
}

// Test: a signed file link carries the policy/signature query pair
#[test]
fn test_signed_file_link_url() {
    let policy = Policy::new().expiry(1_700_000_000).call(Call::Read);
    let security = Security::new(&policy, "MY-SECRET").unwrap();

    let url = FileLink::new("https://cdn.example.com", "MY-HANDLE")
        .with_security(security)
        .url();

    assert_eq!(
        url,
        "https://cdn.example.com/MY-HANDLE\
         ?policy=eyJleHBpcnkiOjE3MDAwMDAwMDAsImNhbGwiOlsicmVhZCJdfQ\
         &signature=eb6cba907c736d2b1308b7d4b00ed227909a21e3f78c49fc4740f855550e3ac1"
    );
}

// Test: content-inspection endpoints carry security as a path task
#[test]
fn test_security_as_path_task_in_pipeline() {
    let policy = Policy::new().expiry(1_700_000_000).call(Call::Read);
    let security = Security::new(&policy, "MY-SECRET").unwrap();

    let url = TransformPipeline::new("MY-HANDLE")
        .push(Transform::new("sfw"))
        .push(security.to_transform())
        .url("https://cdn.example.com")
        .unwrap();

    assert_eq!(
        url,
        "https://cdn.example.com/sfw\
         /security=policy:eyJleHBpcnkiOjE3MDAwMDAwMDAsImNhbGwiOlsicmVhZCJdfQ\
         ,signature:eb6cba907c736d2b1308b7d4b00ed227909a21e3f78c49fc4740f855550e3ac1\
         /MY-HANDLE"
    );
}
