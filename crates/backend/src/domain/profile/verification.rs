//! Rule-based document verification.
//!
//! The wizard consumes verification as an opaque
//! `verify(file, document type, number) -> outcome` call; this module is
//! the stand-in implementation behind that interface. A future scanning
//! service plugs in behind the same trait.

use async_trait::async_trait;
use contracts::profile::verification::{DocumentType, VerificationOutcome};

/// Upload size cap, matching the form-side hint
pub const MAX_FILE_SIZE_BYTES: usize = 5 * 1024 * 1024;

const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png"];

#[async_trait]
pub trait DocumentVerifier: Send + Sync {
    async fn verify(
        &self,
        file_name: &str,
        file_size: usize,
        doc_type: DocumentType,
        number: &str,
    ) -> VerificationOutcome;
}

/// Default verifier: file shape plus per-type number format checks
pub struct RuleBasedVerifier;

#[async_trait]
impl DocumentVerifier for RuleBasedVerifier {
    async fn verify(
        &self,
        file_name: &str,
        file_size: usize,
        doc_type: DocumentType,
        number: &str,
    ) -> VerificationOutcome {
        let mut errors = Vec::new();
        check_file(file_name, file_size, &mut errors);
        check_number(doc_type, number, &mut errors);
        if errors.is_empty() {
            VerificationOutcome::valid()
        } else {
            VerificationOutcome::rejected(errors)
        }
    }
}

fn check_file(file_name: &str, file_size: usize, errors: &mut Vec<String>) {
    if file_name.trim().is_empty() {
        errors.push("No file was uploaded".to_string());
        return;
    }
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        errors.push(format!(
            "Unsupported file type \".{}\", upload PDF, JPG or PNG",
            extension
        ));
    }
    if file_size == 0 {
        errors.push("Uploaded file is empty".to_string());
    } else if file_size > MAX_FILE_SIZE_BYTES {
        errors.push("File exceeds the 5 MB limit".to_string());
    }
}

fn check_number(doc_type: DocumentType, number: &str, errors: &mut Vec<String>) {
    let number = number.trim();
    if number.is_empty() {
        errors.push(format!("{} number is missing", doc_type.display_name()));
        return;
    }
    let ok = match doc_type {
        // AAAAA9999A
        DocumentType::Pan => {
            number.len() == 10
                && number.chars().take(5).all(|c| c.is_ascii_uppercase())
                && number.chars().skip(5).take(4).all(|c| c.is_ascii_digit())
                && number.chars().nth(9).is_some_and(|c| c.is_ascii_uppercase())
        }
        // 12 digits
        DocumentType::Aadhaar => number.len() == 12 && number.chars().all(|c| c.is_ascii_digit()),
        // 15 alphanumeric, state prefix is numeric
        DocumentType::Gstin => {
            number.len() == 15
                && number.chars().all(|c| c.is_ascii_alphanumeric())
                && number.chars().take(2).all(|c| c.is_ascii_digit())
        }
        // IBBI/IPA-NNN/IP-PNNNNN/YYYY-YYYY/NNNNN, checked loosely by shape
        DocumentType::IbbiRegistration => {
            number.starts_with("IBBI/") && number.len() >= 12 && number.matches('/').count() >= 3
        }
    };
    if !ok {
        errors.push(format!(
            "{} number format is invalid",
            doc_type.display_name()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn verify(
        file_name: &str,
        file_size: usize,
        doc_type: DocumentType,
        number: &str,
    ) -> VerificationOutcome {
        RuleBasedVerifier
            .verify(file_name, file_size, doc_type, number)
            .await
    }

    #[tokio::test]
    async fn test_valid_pan_upload() {
        let outcome = verify("pan-card.pdf", 120_000, DocumentType::Pan, "ABCDE1234F").await;
        assert!(outcome.is_valid, "{:?}", outcome.errors);
    }

    #[tokio::test]
    async fn test_bad_extension_and_number_collect_both_errors() {
        let outcome = verify("scan.bmp", 120_000, DocumentType::Pan, "12345").await;
        assert!(!outcome.is_valid);
        assert_eq!(outcome.errors.len(), 2);
    }

    #[tokio::test]
    async fn test_size_limits() {
        let outcome = verify("a.pdf", 0, DocumentType::Aadhaar, "123412341234").await;
        assert!(!outcome.is_valid);

        let outcome = verify(
            "a.pdf",
            MAX_FILE_SIZE_BYTES + 1,
            DocumentType::Aadhaar,
            "123412341234",
        )
        .await;
        assert!(!outcome.is_valid);
    }

    #[tokio::test]
    async fn test_number_formats() {
        assert!(verify("a.pdf", 1, DocumentType::Aadhaar, "123412341234").await.is_valid);
        assert!(!verify("a.pdf", 1, DocumentType::Aadhaar, "12341234").await.is_valid);
        assert!(verify("a.pdf", 1, DocumentType::Gstin, "27AAPFU0939F1ZV").await.is_valid);
        assert!(!verify("a.pdf", 1, DocumentType::Gstin, "XXAAPFU0939F1ZV").await.is_valid);
        assert!(
            verify("a.pdf", 1, DocumentType::IbbiRegistration, "IBBI/IPA-001/IP-P00001/2017-2018/10001")
                .await
                .is_valid
        );
        assert!(!verify("a.pdf", 1, DocumentType::IbbiRegistration, "REG-123").await.is_valid);
    }
}
