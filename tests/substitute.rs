//! Integration tests for template substitution

use std::collections::{BTreeMap, HashMap};

use pretty_assertions::assert_eq;
use strtpl::{
    substitute, FnLookup, Policy, Position, SubstituteError, Template, TemplateSpec,
};

fn people() -> HashMap<&'static str, &'static str> {
    HashMap::from([("who", "Alice"), ("what", "bananas"), ("verb", "run")])
}

#[test]
fn test_identifier_substitution() {
    assert_eq!(
        substitute("$who likes $what.", &people()).unwrap(),
        "Alice likes bananas."
    );
}

#[test]
fn test_brace_form_for_concatenation() {
    let values = HashMap::from([("verb", "run")]);
    assert_eq!(substitute("${verb}s fast.", &values).unwrap(), "runs fast.");
}

#[test]
fn test_unbraced_identifier_extends_greedily() {
    let err = substitute("$verbs fast.", &people()).unwrap_err();
    assert!(matches!(err, SubstituteError::KeyNotFound { ref key, .. } if key == "verbs"));
}

#[test]
fn test_literal_text_is_unchanged() {
    let empty: HashMap<String, String> = HashMap::new();
    for text in ["", "plain text", "multi\nline\r\ntext", "braces {x} and 100%"] {
        assert_eq!(substitute(text, &empty).unwrap(), text);
        assert_eq!(substitute(text, &people()).unwrap(), text);
    }
}

#[test]
fn test_doubled_delimiter_is_one_delimiter() {
    let empty: [(&str, &str); 0] = [];
    assert_eq!(substitute("$$", &empty).unwrap(), "$");
    assert_eq!(substitute("$$", &people()).unwrap(), "$");
    assert_eq!(substitute("$$who", &people()).unwrap(), "$who");
}

#[test]
fn test_missing_key_fails() {
    let values = HashMap::from([("who", "Alice")]);
    let err = substitute("$who likes $where.", &values).unwrap_err();
    match err {
        SubstituteError::KeyNotFound { key, .. } => assert_eq!(key, "where"),
        other => panic!("expected KeyNotFound, got {:?}", other),
    }
}

#[test]
fn test_missing_braced_key_fails() {
    let err = substitute("${nope}", &people()).unwrap_err();
    assert!(matches!(err, SubstituteError::KeyNotFound { ref key, span: _ } if key == "nope"));
}

#[test]
fn test_malformed_placeholder_position() {
    let values = HashMap::from([("who", "Alice")]);
    let err = substitute("$who likes $.", &values).unwrap_err();
    assert_eq!(
        err,
        SubstituteError::InvalidPlaceholder {
            position: Position::new(1, 12),
            span: 11..12,
        }
    );
    assert_eq!(err.to_string(), "invalid placeholder in string: line 1, col 12");
}

#[test]
fn test_malformed_placeholder_across_separators() {
    let cases = [
        ("a\n$", Position::new(2, 1)),
        ("a\r\nb $", Position::new(2, 3)),
        ("a\rb\x0Bc\x0C  $!", Position::new(4, 3)),
        ("ünïcode $", Position::new(1, 9)),
    ];
    for (text, expected) in cases {
        match substitute(text, &people()) {
            Err(SubstituteError::InvalidPlaceholder { position, .. }) => {
                assert_eq!(position, expected, "for {:?}", text)
            }
            other => panic!("expected InvalidPlaceholder for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn test_first_failure_wins() {
    let err = substitute("$ then $missing", &people()).unwrap_err();
    assert!(matches!(err, SubstituteError::InvalidPlaceholder { .. }));
}

#[test]
fn test_any_lookup_table() {
    let btree = BTreeMap::from([("who".to_string(), "Bob".to_string())]);
    assert_eq!(substitute("hi $who", &btree).unwrap(), "hi Bob");

    let pairs = vec![("who", "Carol")];
    assert_eq!(substitute("hi $who", &pairs).unwrap(), "hi Carol");

    let env = FnLookup(|key: &str| Some(format!("<{}>", key)));
    assert_eq!(substitute("$a ${b}", &env).unwrap(), "<a> <b>");
}

#[test]
fn test_sentinel_mode_never_fails() {
    let template = Template::new(TemplateSpec::new().with_policy(Policy::sentinel())).unwrap();
    assert_eq!(
        template.substitute("$who met $nobody at $.", &people()).unwrap(),
        "Alice met NONE at ERROR."
    );
}

#[test]
fn test_custom_sentinels() {
    let policy = Policy::Sentinel {
        missing: "?".to_string(),
        invalid: "!".to_string(),
    };
    let template = Template::new(TemplateSpec::new().with_policy(policy)).unwrap();
    assert_eq!(template.substitute("$x $", &people()).unwrap(), "? !");
}

#[test]
fn test_template_is_reusable() {
    let template = Template::new(TemplateSpec::default()).unwrap();
    for (text, expected) in [
        ("$who", "Alice"),
        ("$what!", "bananas!"),
        ("${verb}ning", "running"),
    ] {
        assert_eq!(template.substitute(text, &people()).unwrap(), expected);
    }
}

#[test]
fn test_template_shared_across_threads() {
    let template = std::sync::Arc::new(Template::new(TemplateSpec::default()).unwrap());
    let values = std::sync::Arc::new(people());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let template = template.clone();
            let values = values.clone();
            std::thread::spawn(move || {
                template
                    .substitute(&format!("{} $who", i), values.as_ref())
                    .unwrap()
            })
        })
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["0 Alice", "1 Alice", "2 Alice", "3 Alice"]);
}
