use kldb_skos::core::hierarchy::HierarchyBuilder;
use kldb_skos::domain::model::TableRow;

fn row(code: &str, level: &str, title: &str) -> TableRow {
    TableRow {
        code: code.to_string(),
        level: level.to_string(),
        title: title.to_string(),
        ..TableRow::default()
    }
}

fn row_with_texts(code: &str, level: &str, title: &str, remarks: &str, inclusions: &str) -> TableRow {
    TableRow {
        remarks: remarks.to_string(),
        inclusions: inclusions.to_string(),
        ..row(code, level, title)
    }
}

/// Fixture spanning all four levels, one orphan and one duplicate code.
fn sample_rows() -> Vec<TableRow> {
    vec![
        row_with_texts("1", "1", "Berufe A", "Leitung von Teams", ""),
        row("2", "1", "Berufe B"),
        row("11", "2", "Alt"),
        row_with_texts("11", "2", "Neu", "", "Teamleitung"),
        row("12", "2", "Berufe AB"),
        row("21", "2", "Berufe BA"),
        row("111", "3", "Berufe AAA"),
        row("1111", "4", "Berufe AAAA"),
        row("341", "3", "Verwaist"),
    ]
}

#[test]
fn test_parent_and_child_links_are_bidirectional() {
    let hierarchy = HierarchyBuilder::new().build(&sample_rows());

    for concept in hierarchy.concepts.values() {
        if let Some(parent_id) = &concept.parent {
            let parent = &hierarchy.concepts[parent_id];
            assert!(
                parent.children.contains(&concept.id),
                "{} is missing child {}",
                parent_id,
                concept.id
            );
        }
        for child_id in &concept.children {
            assert_eq!(
                hierarchy.concepts[child_id].parent.as_ref(),
                Some(&concept.id),
                "{} does not point back to {}",
                child_id,
                concept.id
            );
        }
    }
}

#[test]
fn test_prefix_derived_adjacency() {
    let hierarchy = HierarchyBuilder::new().build(&sample_rows());

    assert_eq!(hierarchy.children_of["1"], vec!["11", "12"]);
    assert_eq!(hierarchy.children_of["2"], vec!["21"]);
    assert_eq!(hierarchy.children_of["11"], vec!["111"]);
    assert_eq!(hierarchy.children_of["111"], vec!["1111"]);
}

#[test]
fn test_orphan_without_parent_prefix_stays_unlinked() {
    let hierarchy = HierarchyBuilder::new().build(&sample_rows());

    // "34" never appears, so "341" cannot be attached anywhere
    let orphan = &hierarchy.concepts["341"];
    assert_eq!(orphan.parent, None);
    assert!(orphan.children.is_empty());
    assert!(!hierarchy.children_of.contains_key("34"));
    for children in hierarchy.children_of.values() {
        assert!(!children.contains(&"341".to_string()));
    }
}

#[test]
fn test_duplicate_code_resolved_before_linking() {
    let hierarchy = HierarchyBuilder::new().build(&sample_rows());

    let concept = &hierarchy.concepts["11"];
    assert_eq!(concept.title, "Neu");
    assert_eq!(concept.note, "Teamleitung");
    // The surviving row still carries the links of the shared code
    assert_eq!(concept.parent.as_deref(), Some("1"));
    assert!(concept.children.contains("111"));
}

#[test]
fn test_code_length_matches_level_for_conforming_rows() {
    let hierarchy = HierarchyBuilder::new().build(&sample_rows());

    for concept in hierarchy.concepts.values() {
        assert_eq!(concept.id.chars().count(), concept.level as usize);
    }
}

#[test]
fn test_statistics_counts_levels_and_text_fields() {
    let stats = HierarchyBuilder::new().build(&sample_rows()).statistics();

    assert_eq!(stats.level_counts, [2, 3, 2, 1]);
    assert_eq!(stats.total, 8);
    assert_eq!(stats.with_definition, 1);
    assert_eq!(stats.with_note, 1);

    let top: Vec<(&str, &str)> = stats
        .top_concepts
        .iter()
        .map(|t| (t.id.as_str(), t.title.as_str()))
        .collect();
    assert_eq!(top, vec![("1", "Berufe A"), ("2", "Berufe B")]);
}

#[test]
fn test_text_fields_are_cleaned_during_build() {
    let rows = vec![row_with_texts(
        "1",
        "1",
        "Land-   &amp;   Forstwirtschaft",
        "Arbeit mit &lt;Geräten&gt;",
        "sagt \"Hallo\"",
    )];

    let hierarchy = HierarchyBuilder::new().build(&rows);

    let concept = &hierarchy.concepts["1"];
    assert_eq!(concept.title, "Land- & Forstwirtschaft");
    assert_eq!(concept.definition, "Arbeit mit <Geräten>");
    assert_eq!(concept.note, "sagt \\\"Hallo\\\"");
}
