//! Document Store Tests
//!
//! Pins down the static document set, since ids, titles and content lengths
//! are all visible to API clients.

#[cfg(test)]
mod tests {
    use crate::documents::LEGAL_DOCUMENTS;
    use std::collections::HashSet;

    #[test]
    fn test_store_order_is_canonical() {
        let ids: Vec<&str> = LEGAL_DOCUMENTS.iter().map(|doc| doc.id).collect();
        assert_eq!(ids, vec!["doc_001", "doc_002", "doc_003"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = LEGAL_DOCUMENTS.iter().map(|doc| doc.id).collect();
        assert_eq!(ids.len(), LEGAL_DOCUMENTS.len());
    }

    #[test]
    fn test_titles() {
        assert_eq!(LEGAL_DOCUMENTS[0].title, "Contract Law Fundamentals");
        assert_eq!(LEGAL_DOCUMENTS[1].title, "Employment Law Guidelines");
        assert_eq!(LEGAL_DOCUMENTS[2].title, "Intellectual Property Rights");
    }

    #[test]
    fn test_content_lengths() {
        // Counted over the raw content, continuation indentation included
        let lengths: Vec<usize> = LEGAL_DOCUMENTS
            .iter()
            .map(|doc| doc.content_length())
            .collect();
        assert_eq!(lengths, vec![675, 736, 808]);
    }

    #[test]
    fn test_content_keeps_line_layout() {
        let contract = LEGAL_DOCUMENTS[0].content;

        assert!(contract.starts_with("A contract is a legally binding agreement"));
        assert!(contract.contains("parties. \n        For a contract"));
        assert!(contract.ends_with("not against public policy."));
    }
}
