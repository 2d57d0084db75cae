use std::{collections::HashSet, error::Error, thread};

use super::{StandardCharset, names};

const TABLE: [(&str, &str); 6] = [
    ("US_ASCII", "US-ASCII"),
    ("ISO_8859_1", "ISO-8859-1"),
    ("UTF_8", "UTF-8"),
    ("UTF_16", "UTF-16"),
    ("UTF_16BE", "UTF-16BE"),
    ("UTF_16LE", "UTF-16LE"),
];

#[test]
fn canonical_names() {
    assert_eq!(StandardCharset::UsAscii.canonical_name(), "US-ASCII");
    assert_eq!(StandardCharset::Iso8859_1.canonical_name(), "ISO-8859-1");
    assert_eq!(StandardCharset::Utf8.canonical_name(), "UTF-8");
    assert_eq!(StandardCharset::Utf16.canonical_name(), "UTF-16");
    assert_eq!(StandardCharset::Utf16Be.canonical_name(), "UTF-16BE");
    assert_eq!(StandardCharset::Utf16Le.canonical_name(), "UTF-16LE");

    assert_ne!(StandardCharset::Utf8.canonical_name(), "utf-8");
    assert_ne!(StandardCharset::Utf8.canonical_name(), "UTF8");
}

#[test]
fn name_constants() {
    assert_eq!(names::US_ASCII, "US-ASCII");
    assert_eq!(names::ISO_8859_1, "ISO-8859-1");
    assert_eq!(names::UTF_8, "UTF-8");
    assert_eq!(names::UTF_16, "UTF-16");
    assert_eq!(names::UTF_16BE, "UTF-16BE");
    assert_eq!(names::UTF_16LE, "UTF-16LE");
}

#[test]
fn registry_is_complete() {
    let entries: Vec<_> = StandardCharset::iter()
        .map(|charset| (charset.symbol(), charset.canonical_name()))
        .collect();
    assert_eq!(entries, TABLE);

    let unique: HashSet<_> = StandardCharset::iter().map(|c| c.canonical_name()).collect();
    assert_eq!(unique.len(), 6);
}

#[test]
fn names_are_stable() {
    const UTF_16LE: &str = StandardCharset::Utf16Le.canonical_name();
    let first: Vec<_> = StandardCharset::iter().map(|c| c.canonical_name()).collect();
    for _ in 0..3 {
        let again: Vec<_> = StandardCharset::iter().map(|c| c.canonical_name()).collect();
        assert_eq!(first, again);
    }
    assert_eq!(UTF_16LE, "UTF-16LE");
}

#[test]
fn concurrent_readers() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                StandardCharset::iter()
                    .map(|c| c.canonical_name())
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for handle in handles {
        let names = handle.join().unwrap();
        assert_eq!(names.len(), 6);
        assert_eq!(names[1], "ISO-8859-1");
    }
}

#[test]
fn display_is_canonical_name() {
    assert_eq!(StandardCharset::Utf16Le.to_string(), "UTF-16LE");
    assert_eq!(format!("{}", StandardCharset::Iso8859_1), "ISO-8859-1");
}

#[test]
fn lookup_by_canonical_name_and_symbol() {
    for charset in StandardCharset::iter() {
        assert_eq!(StandardCharset::from_name(charset.canonical_name()), Some(charset));
        assert_eq!(StandardCharset::from_name(charset.symbol()), Some(charset));
    }
}

#[test]
fn lookup_ignores_case_and_whitespace() {
    assert_eq!(StandardCharset::from_name("utf-8"), Some(StandardCharset::Utf8));
    assert_eq!(StandardCharset::from_name("  Utf-16be\n"), Some(StandardCharset::Utf16Be));
    assert_eq!(StandardCharset::from_name("LATIN1"), Some(StandardCharset::Iso8859_1));
    assert_eq!(StandardCharset::from_name(""), None);
    assert_eq!(StandardCharset::from_name("   "), None);
}

#[test]
fn lookup_by_alias() {
    assert_eq!(StandardCharset::from_name("ascii"), Some(StandardCharset::UsAscii));
    assert_eq!(StandardCharset::from_name("cp819"), Some(StandardCharset::Iso8859_1));
    assert_eq!(StandardCharset::from_name("UTF8"), Some(StandardCharset::Utf8));
    assert_eq!(StandardCharset::from_name("unicode"), Some(StandardCharset::Utf16));
    assert_eq!(
        StandardCharset::from_name("UnicodeBigUnmarked"),
        Some(StandardCharset::Utf16Be)
    );
    assert_eq!(
        StandardCharset::from_name("UnicodeLittleUnmarked"),
        Some(StandardCharset::Utf16Le)
    );
}

#[test]
fn aliases_do_not_overlap() {
    let mut seen = HashSet::new();
    for charset in StandardCharset::iter() {
        for alias in charset.aliases() {
            assert!(seen.insert(alias.to_ascii_lowercase()), "duplicate alias {alias}");
            assert_eq!(StandardCharset::from_name(alias), Some(charset));
        }
    }
}

#[test]
fn parse() {
    assert_eq!("ISO-8859-1".parse::<StandardCharset>(), Ok(StandardCharset::Iso8859_1));

    let err = "EBCDIC".parse::<StandardCharset>().unwrap_err();
    assert_eq!(err.name(), "EBCDIC");
    assert!(err.source().is_none());
    assert_eq!(
        err.to_string(),
        "`EBCDIC` is not a standard charset, these charsets are supported: \
         US-ASCII, ISO-8859-1, UTF-8, UTF-16, UTF-16BE, UTF-16LE"
    );
}

#[test]
fn serde_uses_canonical_name() {
    let json = serde_json::to_string(&StandardCharset::ALL).unwrap();
    assert_eq!(
        json,
        r#"["US-ASCII","ISO-8859-1","UTF-8","UTF-16","UTF-16BE","UTF-16LE"]"#
    );

    let parsed: Vec<StandardCharset> = serde_json::from_str(r#"["utf8","l1"]"#).unwrap();
    assert_eq!(parsed, [StandardCharset::Utf8, StandardCharset::Iso8859_1]);

    assert!(serde_json::from_str::<StandardCharset>(r#""KOI8-R""#).is_err());
}

#[test]
fn descriptions_are_present() {
    for charset in StandardCharset::iter() {
        assert!(!charset.description().is_empty());
    }
    assert_eq!(
        StandardCharset::Utf8.description(),
        "Eight-bit Unicode Transformation Format"
    );
}
