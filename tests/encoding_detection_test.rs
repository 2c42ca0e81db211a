use kldb_skos::core::loader::TableLoader;
use kldb_skos::utils::error::ConvertError;

#[test]
fn test_windows1252_umlauts_survive_detection() {
    // "Tätigkeiten" encoded as Windows-1252: 0xE4 makes the UTF-8 candidates fail
    let data = b"Schluessel;Ebene;Titel;Kurztitel;Bemerkungen;Einschluesse;Umfasst;Ausschluesse\n\
01;1;T\xE4tigkeiten;T\xE4t.;;;;\n";

    let table = TableLoader::new().load(data).unwrap();

    assert_eq!(table.encoding, "windows-1252");
    assert_eq!(table.delimiter, ';');
    assert_eq!(table.rows[0].title, "Tätigkeiten");
    assert_eq!(table.rows[0].short_title, "Tät.");
}

#[test]
fn test_tab_delimited_table_detected_after_semicolon_and_comma() {
    let data = "Schluessel\tEbene\tTitel\tKurztitel\tBemerkungen\tEinschluesse\tUmfasst\tAusschluesse\n\
21\t2\tTitel\tT\t\t\t\t\n";

    let table = TableLoader::new().load(data.as_bytes()).unwrap();

    assert_eq!(table.encoding, "utf-8");
    assert_eq!(table.delimiter, '\t');
    assert_eq!(table.rows[0].code, "21");
}

#[test]
fn test_utf8_wins_over_later_candidates_for_valid_utf8() {
    // Valid UTF-8 umlauts must not fall through to the single-byte decoders
    let data = "c1;c2;c3;c4;c5;c6;c7;c8\n1;1;Fächer;F;;;;\n";

    let table = TableLoader::new().load(data.as_bytes()).unwrap();

    assert_eq!(table.encoding, "utf-8");
    assert_eq!(table.rows[0].title, "Fächer");
}

#[test]
fn test_semicolon_wins_when_several_delimiters_would_qualify() {
    // Both ';' and ',' split this header into 8+ fields; the candidate order decides
    let data = "a1,a2,a3,a4,a5,a6,a7,a8;b1;b2;b3;b4;b5;b6;b7\n\
x1,x2,x3,x4,x5,x6,x7,x8;y1;y2;y3;y4;y5;y6;y7\n";

    let table = TableLoader::new().load(data.as_bytes()).unwrap();

    assert_eq!(table.delimiter, ';');
    assert_eq!(table.rows[0].code, "x1,x2,x3,x4,x5,x6,x7,x8");
}

#[test]
fn test_bom_prefixed_file_still_parses() {
    let mut data = vec![0xEF, 0xBB, 0xBF];
    data.extend_from_slice(b"c1;c2;c3;c4;c5;c6;c7;c8\n1;1;Titel;T;;;;\n");

    let table = TableLoader::new().load(&data).unwrap();

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].code, "1");
    assert_eq!(table.rows[0].title, "Titel");
}

#[test]
fn test_every_candidate_combination_is_tried_before_failing() {
    let data = b"zu;wenige;spalten\n1;2;3\n";

    let err = TableLoader::new().load(data).unwrap_err();

    match err {
        ConvertError::TableFormatError { attempts } => assert_eq!(attempts, 15),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_quoted_fields_with_embedded_delimiters() {
    let data = "c1;c2;c3;c4;c5;c6;c7;c8\n1;1;\"Titel; mit Semikolon\";T;;;;\n";

    let table = TableLoader::new().load(data.as_bytes()).unwrap();

    assert_eq!(table.rows[0].title, "Titel; mit Semikolon");
    assert_eq!(table.rows[0].short_title, "T");
}
