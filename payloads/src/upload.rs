//! Upload allow-list shared with the backend's `ALLOWED_EXTS`.
//!
//! Keep these lists in sync with the backend: a file the frontend accepts
//! but the backend rejects produces a confusing round trip.

/// Lowercase extensions (including the dot) the analyzer accepts.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".pdf", ".docx"];

/// Declared MIME types the analyzer accepts, in the same order as
/// [`ACCEPTED_EXTENSIONS`].
pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Human-readable format labels for user-facing messages: `"PDF, DOCX"`.
pub fn accept_label() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| ext.trim_start_matches('.').to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Value for the file input's `accept` attribute: `".pdf,.docx"`.
pub fn accept_attr() -> String {
    ACCEPTED_EXTENSIONS.join(",")
}

/// Validation result for a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileValidation {
    Valid,
    UnsupportedType,
}

impl FileValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Valid => None,
            Self::UnsupportedType => Some(format!(
                "Erro: selecione um ficheiro nos formatos {}.",
                accept_label()
            )),
        }
    }
}

/// Validate a file by its declared MIME type or its extension.
///
/// The match is a logical OR: a correct extension with a wrong or missing
/// MIME type (or vice versa) is still accepted, since browsers are
/// unreliable about both.
pub fn validate_file(name: &str, mime_type: &str) -> FileValidation {
    let extension = name
        .rfind('.')
        .map(|idx| name[idx..].to_lowercase())
        .unwrap_or_default();

    let mime_allowed = ACCEPTED_MIME_TYPES.contains(&mime_type);
    let extension_allowed =
        ACCEPTED_EXTENSIONS.contains(&extension.as_str());

    if mime_allowed || extension_allowed {
        FileValidation::Valid
    } else {
        FileValidation::UnsupportedType
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_pdf_with_matching_mime() {
        assert!(validate_file("contrato.pdf", "application/pdf").is_valid());
    }

    #[test]
    fn accepts_docx_by_extension_alone() {
        // Some browsers report an empty or generic MIME type
        assert!(validate_file("contrato.docx", "").is_valid());
        assert!(
            validate_file("CONTRATO.DOCX", "application/octet-stream")
                .is_valid()
        );
    }

    #[test]
    fn accepts_by_mime_alone() {
        assert!(validate_file("upload.tmp", "application/pdf").is_valid());
    }

    #[test]
    fn rejects_plain_text() {
        let validation = validate_file("notas.txt", "text/plain");
        assert!(!validation.is_valid());
        let message = validation.error_message().unwrap();
        assert!(message.contains("PDF, DOCX"));
    }

    #[test]
    fn rejects_file_without_extension_or_known_mime() {
        assert!(!validate_file("contrato", "").is_valid());
    }

    #[test]
    fn label_and_accept_attr_derive_from_the_same_list() {
        assert_eq!(accept_label(), "PDF, DOCX");
        assert_eq!(accept_attr(), ".pdf,.docx");
    }
}
