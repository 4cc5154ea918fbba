use pretty_assertions::assert_eq;
use ristei::{Catalog, DateAttrStyle, Element, TeiConfig, convert_str};
use std::fs;
use std::path::{Path, PathBuf};

fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn names(element: &Element) -> Vec<&str> {
    element.elements().map(Element::name).collect()
}

#[test]
fn converts_files_in_order_and_skips_unsupported_types() {
    let mut catalog = Catalog::new();
    let files_read = catalog.parse([data("mixed.ris"), data("second.ris")]);
    assert_eq!(files_read, 2);
    assert_eq!(catalog.len(), 3);

    let document = catalog.to_xml();
    let structs: Vec<_> = document.root().children_named("biblStruct").collect();
    assert_eq!(structs.len(), 3);

    // BOOK
    assert_eq!(names(structs[0]), vec!["monogr", "series"]);
    let monogr = structs[0].child("monogr").unwrap();
    assert_eq!(
        names(monogr),
        vec!["author", "editor", "title", "idno", "imprint", "series"]
    );

    // JOUR
    assert_eq!(names(structs[1]), vec!["analytic", "monogr"]);
    let analytic = structs[1].child("analytic").unwrap();
    let doi = analytic
        .children_named("idno")
        .find(|e| e.attribute("type") == Some("DOI"))
        .unwrap();
    assert_eq!(doi.text(), "10.5555/llc.1997.0012");

    let date = structs[1]
        .child("monogr")
        .and_then(|m| m.child("imprint"))
        .and_then(|i| i.child("date"))
        .unwrap();
    assert_eq!(date.text(), "Autumn 1997");
    assert_eq!(date.attribute("when"), Some("1997-9"));

    // EDBOOK from the second file
    let edited = structs[2].child("monogr").unwrap();
    assert_eq!(names(edited), vec!["editor", "title", "imprint"]);
    assert_eq!(edited.child("title").unwrap().text(), "Kant’s Ethics Revisited");
}

#[test]
fn missing_files_do_not_stop_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.ris");
    let present = dir.path().join("present.ris");
    fs::write(&present, "TY  - BOOK\nTI  - Present\nER  -\n").unwrap();

    let mut catalog = Catalog::new();
    assert_eq!(catalog.parse([&missing, &present]), 1);
    assert_eq!(catalog.len(), 1);
}

#[test]
fn journal_serialization() {
    let input = "TY  - JOUR\nAU  - Smith, John A.\nTI  - On Tests\nJO  - Testing\nSP  - 100-110\nDO  - DOI: 10.1234/x\nER  -\n";
    let xml = convert_str(input, &TeiConfig::new()).unwrap();

    assert!(xml.contains(r#"<biblScope unit="page" from="100" to="110">100–110</biblScope>"#));
    assert!(xml.contains(r#"<idno type="DOI">10.1234/x</idno>"#));
    assert!(xml.contains(r#"<title level="j">Testing</title>"#));
    assert!(xml.contains("<surname>Smith</surname>"));
    assert!(xml.contains("<forename>John A.</forename>"));
}

#[test]
fn zero_padded_months() {
    let mut config = TeiConfig::new();
    config.set_date_style(DateAttrStyle::ZeroPadded);

    let mut catalog = Catalog::with_config(config);
    catalog.parse([data("second.ris")]);
    let xml = catalog.to_xml_string().unwrap();
    assert!(xml.contains(r#"<date when="2011-03">March 2011</date>"#));
}

#[test]
fn same_input_gives_identical_output() {
    let input = fs::read_to_string(data("mixed.ris")).unwrap();
    let config = TeiConfig::new();
    assert_eq!(
        convert_str(&input, &config).unwrap(),
        convert_str(&input, &config).unwrap()
    );
}

#[test]
fn compact_output_has_no_line_breaks_inside_the_document() {
    let mut config = TeiConfig::new();
    config.set_indent(0);
    let xml = convert_str("TY  - BOOK\nTI  - One Line\nER  -\n", &config).unwrap();
    assert_eq!(xml.trim_end().lines().count(), 1);
}
