use uidlock_crypto::CryptoError;
use uidlock_license::{DeviceError, LicenseError, VerificationStatus};

#[test]
fn error_display_not_configured() {
    let err = LicenseError::NotConfigured;
    assert!(format!("{err}").contains("not configured"));
}

#[test]
fn error_display_invalid_uid_format() {
    let err = LicenseError::InvalidUidFormat(CryptoError::InvalidHexLength {
        expected: 54,
        actual: 3,
    });
    let msg = format!("{err}");
    assert!(msg.contains("device UID"));
    assert!(msg.contains("54"));
}

#[test]
fn error_display_hardware() {
    let err: LicenseError = DeviceError::ReadFailed("timeout".into()).into();
    let msg = format!("{err}");
    assert!(msg.contains("hardware"));
    assert!(msg.contains("timeout"));
}

#[test]
fn error_display_device_length() {
    let err = DeviceError::InvalidLength { expected: 27, actual: 16 };
    let msg = format!("{err}");
    assert!(msg.contains("27"));
    assert!(msg.contains("16"));
}

#[test]
fn device_error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: DeviceError = io.into();
    assert!(format!("{err}").contains("I/O"));
}

#[test]
fn errors_map_to_statuses() {
    let cases = [
        (LicenseError::NotConfigured, VerificationStatus::InvalidConfig),
        (
            LicenseError::InvalidUidFormat(CryptoError::InvalidHex("x".into())),
            VerificationStatus::InvalidUidFormat,
        ),
        (
            LicenseError::InvalidKeyFormat(CryptoError::EmptyBase64),
            VerificationStatus::InvalidKeyFormat,
        ),
        (
            LicenseError::Hardware(DeviceError::ReadFailed("x".into())),
            VerificationStatus::HardwareError,
        ),
        (LicenseError::UidMismatch, VerificationStatus::UidMismatch),
        (
            LicenseError::InvalidSignature(CryptoError::SignatureMismatch),
            VerificationStatus::SignatureInvalid,
        ),
    ];
    for (err, status) in cases {
        assert_eq!(err.status(), status);
    }
}

#[test]
fn key_parse_and_signature_failures_share_a_status() {
    let bad_key = LicenseError::InvalidSignature(CryptoError::InvalidPublicKey("x".into()));
    let bad_sig = LicenseError::InvalidSignature(CryptoError::SignatureMismatch);
    assert_eq!(bad_key.status(), bad_sig.status());
    assert_eq!(format!("{bad_key}"), format!("{bad_sig}"));
}

#[test]
fn error_is_debug() {
    let _ = format!("{:?}", LicenseError::UidMismatch);
}
