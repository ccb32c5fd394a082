//! Export naming helpers.

/// File name for a PDF capture: whitespace runs become underscores,
/// then a fixed suffix.
pub fn pdf_file_name(shop_name: &str) -> String {
    let stem = shop_name.split_whitespace().collect::<Vec<_>>().join("_");
    if stem.is_empty() {
        "Portfolio.pdf".to_string()
    } else {
        format!("{stem}_Portfolio.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_file_name() {
        assert_eq!(
            pdf_file_name("Sonhos de Papel"),
            "Sonhos_de_Papel_Portfolio.pdf"
        );
        assert_eq!(pdf_file_name("TechZone"), "TechZone_Portfolio.pdf");
    }

    #[test]
    fn test_pdf_file_name_collapses_whitespace() {
        assert_eq!(pdf_file_name("  Surf   Vibe "), "Surf_Vibe_Portfolio.pdf");
        assert_eq!(pdf_file_name(""), "Portfolio.pdf");
    }
}
