// PDF-to-text boundary adapter.
use crate::model::ExtractError;

/// Extracts the raw text layer from the downloaded document bytes. The
/// parser tolerates whatever extraction artifacts come back; only a
/// failed extraction is an error.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    Ok(pdf_extract::extract_text_from_mem(bytes)?)
}
