use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use super::ExtractError;

/// Extracts the document body text, one line per paragraph.
/// Embedded media and non-text content are ignored.
pub fn extract(data: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(data)?;

    let mut text = String::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for paragraph_child in paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_extracts_paragraph_text() {
        let data = build_docx(&["5 years Python, Django, PostgreSQL"]);
        let text = extract(&data).unwrap();
        assert!(text.contains("5 years Python, Django, PostgreSQL"));
    }

    #[test]
    fn test_paragraphs_are_newline_separated() {
        let data = build_docx(&["first paragraph", "second paragraph"]);
        let text = extract(&data).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["first paragraph", "second paragraph"]);
    }

    #[test]
    fn test_malformed_docx_is_an_error() {
        assert!(extract(b"not a zip archive").is_err());
    }
}
