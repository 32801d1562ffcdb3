use tabular_preview::ingestion::csv::{Delimiter, grid_from_text, tokenize_line};
use tabular_preview::ingestion::{PreviewOptions, parse_preview, preview_from_path};
use tabular_preview::types::SourceFile;

fn quiet() -> PreviewOptions {
    PreviewOptions {
        observer: None,
        ..Default::default()
    }
}

#[test]
fn comma_fixture_preview() {
    let preview = preview_from_path("tests/fixtures/teachers.csv", &quiet());

    assert_eq!(preview.rows.len(), 3);
    assert!(preview.errors.is_empty());

    let first = &preview.rows[0];
    assert_eq!(first.len(), 6);
    assert_eq!(first.get("email_ens"), Some("wafa.karoui@isi.utm.tn"));

    // Quoted delimiter, short row padded.
    let second = &preview.rows[1];
    assert_eq!(second.get("nom_ens"), Some("Ben Salah, Jr"));
    assert_eq!(second.get("participe_surveillance"), Some(""));

    // Escaped quotes, extra trailing cell dropped.
    let third = &preview.rows[2];
    assert_eq!(third.get("prenom_ens"), Some(r#"Sana "S.""#));
    assert_eq!(third.len(), 6);
    assert_eq!(third.get("participe_surveillance"), Some("0"));
}

#[test]
fn semicolon_fixture_with_crlf_preview() {
    let preview = preview_from_path("tests/fixtures/wishes_semicolon.csv", &quiet());

    assert_eq!(preview.rows.len(), 2);
    assert_eq!(
        preview.rows[0].keys().collect::<Vec<_>>(),
        vec!["code_smartex_ens", "nom_ens", "prenom_ens", "jour", "seance"]
    );
    assert_eq!(preview.rows[0].get("seance"), Some("S3"));
    assert_eq!(preview.rows[1].get("nom_ens"), Some("Ben Salah"));
}

#[test]
fn quoted_semester_tokenizes_to_three_fields() {
    let fields = tokenize_line(r#"N.BEN HARIZ,"Semestre 1, Principale",Partiel"#, Delimiter::Comma);
    assert_eq!(fields, vec!["N.BEN HARIZ", "Semestre 1, Principale", "Partiel"]);
}

#[test]
fn header_selects_delimiter() {
    let (_, d) = grid_from_text("a;b;c\n1;2;3\n", None).unwrap();
    assert_eq!(d, Delimiter::Semicolon);
    let (_, d) = grid_from_text("a,b,c\n1,2,3\n", None).unwrap();
    assert_eq!(d, Delimiter::Comma);
}

#[test]
fn delimiter_is_chosen_once_per_file() {
    let file = SourceFile::new("mixed.csv", "a;b\n1,2;3\n");
    let preview = parse_preview(&file, &quiet());
    assert_eq!(preview.rows[0].get("a"), Some("1,2"));
    assert_eq!(preview.rows[0].get("b"), Some("3"));
}

#[test]
fn short_row_yields_all_header_keys() {
    let file = SourceFile::new("short.csv", "a,b,c,d,e\n1,2,3\n");
    let preview = parse_preview(&file, &quiet());

    let row = &preview.rows[0];
    assert_eq!(row.len(), 5);
    assert_eq!(row.get("d"), Some(""));
    assert_eq!(row.get("e"), Some(""));
}

#[test]
fn header_names_are_trimmed_and_duplicates_collapse() {
    let file = SourceFile::new("dup.csv", " id , name ,id\n1,Ada,2\n");
    let preview = parse_preview(&file, &quiet());

    let row = &preview.rows[0];
    assert_eq!(row.keys().collect::<Vec<_>>(), vec!["id", "name"]);
    assert_eq!(row.get("id"), Some("2"));
}

#[test]
fn rejoin_property_for_plain_lines() {
    let lines = [
        "dateExam,h_debut,h_fin",
        "13/05/2025,08:30:00,10:00:00 ",
        "  a;b;;d",
        "only",
    ];
    for line in lines {
        let d = Delimiter::detect(line);
        let joined = tokenize_line(line, d).join(&d.as_char().to_string());
        assert_eq!(joined, line.trim(), "line={line:?}");
    }
}
