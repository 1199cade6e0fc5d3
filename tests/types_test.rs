use email_reply::*;

// --- Fragment ---

#[test]
fn test_fragment_lines_and_content() {
    let email = parse("Hello\nworld\n\n> old");
    let first = &email.fragments()[0];

    assert_eq!(first.lines(), ["Hello", "world"]);
    assert_eq!(first.content(), "Hello\nworld");
    assert_eq!(first.to_string(), first.content());
}

#[test]
fn test_fragment_keeps_raw_whitespace() {
    let email = parse("trailing space   \n   indented");
    assert_eq!(email.fragments()[0].lines(), ["trailing space   ", "   indented"]);
}

#[test]
fn test_fragment_is_blank() {
    let email = parse("  \n\t\n-- \nBob");

    assert_eq!(email.len(), 2);
    assert_eq!(email.fragments()[0].lines(), ["  "]);
    assert!(email.fragments()[0].is_blank());
    assert!(!email.fragments()[0].is_hidden());
    assert!(!email.fragments()[1].is_blank());
    assert!(email.fragments()[1].is_signature());

    let blank = parse("\n \n");
    assert_eq!(blank.len(), 1);
    assert!(blank.fragments()[0].is_blank());
}

#[test]
fn test_trailing_blank_lines_join_quote() {
    let email = parse("> quoted\n  \n\t");

    assert_eq!(email.len(), 1);
    assert!(email.fragments()[0].is_quoted());
    assert_eq!(email.fragments()[0].lines(), ["> quoted", "  ", "\t"]);
}

// --- Email ---

#[test]
fn test_email_default_is_empty() {
    let email = Email::default();

    assert!(email.is_empty());
    assert_eq!(email.len(), 0);
    assert!(email.get(0).is_none());
    assert!(email.signature().is_none());
    assert_eq!(email.full_text(), "");
    assert_eq!(email.visible_text(), "");
    assert_eq!(email.to_string(), "");
}

#[test]
fn test_email_full_text_is_lossless() {
    let body = "Hi there\n\nThanks,\n-- \nBob\n";
    assert_eq!(parse(body).full_text(), body);
}

#[test]
fn test_email_display_is_visible_text() {
    let email = parse("Hi there\n\nThanks,\n-- \nBob");
    assert_eq!(email.to_string(), "Hi there");
}

#[test]
fn test_email_visible_text_trims_blank_lines() {
    let email = parse("\n\n  \nHello\n\n\n");
    assert_eq!(email.visible_text(), "Hello");
}

#[test]
fn test_email_signature() {
    let email = parse("Hi there\n\nThanks,\n-- \nBob");
    let sig = email.signature().unwrap();

    assert!(sig.is_signature());
    assert_eq!(sig.content(), "\nThanks,\n-- \nBob");
}

#[test]
fn test_email_quoted_text() {
    let email = parse("New text\n\nOn Jan 1, 2020, X wrote:\n> old text\n\nMore\n> older");
    assert_eq!(
        email.quoted_text(),
        "\nOn Jan 1, 2020, X wrote:\n> old text\n> older"
    );
}

#[test]
fn test_email_iteration() {
    let email = parse("a\n\n> b\n\nc");

    let via_iter: Vec<String> = email.iter().map(Fragment::content).collect();
    let via_ref: Vec<String> = (&email).into_iter().map(Fragment::content).collect();

    assert_eq!(via_iter, via_ref);
    assert_eq!(via_iter.len(), email.len());
    assert_eq!(email.get(1).map(Fragment::is_quoted), Some(true));
    assert!(email.get(email.len()).is_none());
}

#[test]
fn test_email_json() {
    let email = parse("Sounds good\n\nOn Mon, Ann wrote:\n> lunch?");
    let json = serde_json::to_value(&email).unwrap();

    let fragments = json["fragments"].as_array().unwrap();
    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0]["lines"][0], "Sounds good");
    assert_eq!(fragments[1]["quoted"], true);
    assert_eq!(fragments[1]["hidden"], true);

    let back: Email = serde_json::from_value(json).unwrap();
    assert_eq!(back, email);
}
