use pdf_extract::extract_text_from_mem_by_pages;

use super::ExtractError;

/// Extracts text from every page in stored order and concatenates the page
/// texts with no separator. A page yielding no extractable text contributes
/// an empty segment; that is not an error.
pub fn extract(data: &[u8]) -> Result<String, ExtractError> {
    let pages = extract_text_from_mem_by_pages(data)?;
    Ok(pages.concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(extract(&[]).is_err());
    }

    #[test]
    fn test_truncated_header_is_an_error() {
        assert!(extract(b"%PDF-1.7\n").is_err());
    }
}
