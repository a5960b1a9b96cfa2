//! End-to-end checks of the document analysis over a small sample
//! contract, including the serialized wire shape.

use shared::dto::Page;
use shared::matcher::DEFAULT_MAX_SNIPPETS;
use shared::report::analyze_document;

fn sample_pages() -> Vec<Page> {
    vec![
        Page {
            page: 1,
            text: "Master Services Agreement. This agreement is entered into by \
Acme Corp and Beta LLC. The scope of work covers software development services."
                .to_string(),
        },
        Page {
            page: 2,
            text: "Total contract value: $250,000 split across milestones. \
Invoices are issued monthly. Payment is due within 30 days of receipt."
                .to_string(),
        },
        Page {
            page: 3,
            text: "This agreement is governed by the laws of the State of Delaware. \
Either party may terminate with 60 days written notice."
                .to_string(),
        },
    ]
}

#[test]
fn matching_pointer_lands_on_the_right_page() {
    let pointers = vec!["total contract value".to_string()];
    let report = analyze_document("msa.pdf", &sample_pages(), &pointers, DEFAULT_MAX_SNIPPETS);

    let matches = &report.pointers[0].matches;
    let hit = matches
        .iter()
        .find(|m| m.snippet == "Total contract value: $250,000 split across milestones.")
        .expect("full sentence should be reported verbatim");
    assert_eq!(hit.page, Some(2));
    assert_eq!(hit.start, Some(0));
}

#[test]
fn every_pointer_gets_a_report_in_order() {
    let pointers = vec![
        "governing law".to_string(),
        "payment terms".to_string(),
        "quantum entanglement".to_string(),
    ];
    let report = analyze_document("msa.pdf", &sample_pages(), &pointers, DEFAULT_MAX_SNIPPETS);

    assert_eq!(report.pointers.len(), 3);
    for (pr, pointer) in report.pointers.iter().zip(&pointers) {
        assert_eq!(&pr.pointer, pointer);
        assert!(!pr.matches.is_empty());
        let numbers: Vec<u32> = pr.matches.iter().map(|m| m.page.unwrap()).collect();
        let mut sorted = numbers.clone();
        sorted.sort();
        assert_eq!(numbers, sorted);
    }
}

#[test]
fn empty_document_falls_back_for_every_pointer() {
    let pages = vec![
        Page {
            page: 1,
            text: String::new(),
        },
        Page {
            page: 2,
            text: String::new(),
        },
    ];
    let pointers = vec!["first claim".to_string(), "second claim".to_string()];
    let report = analyze_document("scan.pdf", &pages, &pointers, DEFAULT_MAX_SNIPPETS);

    for pr in &report.pointers {
        assert_eq!(pr.matches.len(), 1);
        let entry = &pr.matches[0];
        assert_eq!(entry.page, None);
        assert_eq!(entry.rationale, "No matching text found for the pointer.");
    }
}

#[test]
fn serialized_report_matches_the_wire_format() {
    let pointers = vec!["total contract value".to_string()];
    let report = analyze_document("msa.pdf", &sample_pages(), &pointers, DEFAULT_MAX_SNIPPETS);
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["fileName"], "msa.pdf");
    let first = &value["pointers"][0]["matches"][0];
    for key in ["snippet", "page", "start", "end", "rationale"] {
        assert!(first.get(key).is_some(), "missing key {key}");
    }
}
