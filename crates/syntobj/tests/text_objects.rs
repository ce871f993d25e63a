//! Public API tests for the configured text-object service.

use std::num::NonZeroUsize;

use camino::Utf8PathBuf;
use insta::assert_snapshot;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use syntobj::{ByteRange, CategoryGroup, Config, TextObjects, TextObjectsError};

const TS_SOURCE: &str = "function foo() { if (x) { bar(); } }";

#[fixture]
fn objects() -> TextObjects {
    TextObjects::from_config(&Config::default()).unwrap_or_else(|err| panic!("build: {err}"))
}

fn group(text: &str) -> CategoryGroup {
    text.parse()
        .unwrap_or_else(|err| panic!("group {text}: {err}"))
}

#[rstest]
fn selects_inner_conditional(objects: TextObjects) {
    let selection = objects
        .select_for_language_id(
            "typescript",
            TS_SOURCE,
            &group("conditional.inner"),
            27,
            NonZeroUsize::MIN,
        )
        .unwrap_or_else(|err| panic!("select: {err}"));

    assert_eq!(selection.range(), ByteRange::new(24, 34));
    assert_eq!(selection.text(TS_SOURCE), Some("{ bar(); }"));
}

#[rstest]
fn selects_from_explicit_snapshot(objects: TextObjects) {
    let parsed = objects
        .parse("javascript", TS_SOURCE)
        .unwrap_or_else(|err| panic!("parse: {err}"));
    let selection = objects
        .select(&parsed, &group("function.inner"), 27, NonZeroUsize::MIN)
        .unwrap_or_else(|err| panic!("select: {err}"));

    assert_eq!(selection.text(parsed.source()), Some("{ if (x) { bar(); } }"));
}

#[rstest]
fn no_match_is_recoverable(objects: TextObjects) {
    let err = objects
        .select_for_language_id(
            "typescript",
            TS_SOURCE,
            &group("loop.outer"),
            27,
            NonZeroUsize::MIN,
        )
        .expect_err("no loop");

    assert!(err.is_no_match());
    assert_snapshot!(err.to_string(), @"no match for loop.outer at byte 27");
}

#[test]
fn configured_alias_resolves_to_grammar() {
    let config = Config::from_yaml_str("languages:\n  - language_id: rustic\n    grammar: rust\n")
        .unwrap_or_else(|err| panic!("config: {err}"));
    let objects = TextObjects::from_config(&config).unwrap_or_else(|err| panic!("build: {err}"));

    let source = "fn main() { run(); }";
    let selection = objects
        .select_for_language_id("rustic", source, &group("call.outer"), 13, NonZeroUsize::MIN)
        .unwrap_or_else(|err| panic!("select: {err}"));

    assert_eq!(selection.text(source), Some("run()"));
}

#[test]
fn alias_to_unknown_grammar_is_rejected() {
    let config = Config::default().with_language("lisp", "clojure");
    let err = TextObjects::from_config(&config).expect_err("clojure is unsupported");

    assert!(matches!(err, TextObjectsError::UnknownGrammar { .. }));
    assert_snapshot!(
        err.to_string(),
        @"language 'lisp' is mapped to an unsupported grammar: unsupported language: 'clojure'"
    );
}

#[test]
fn configured_catalog_directory_overrides_builtins() {
    let dir = TempDir::new().unwrap_or_else(|err| panic!("temp dir: {err}"));
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
        .unwrap_or_else(|path| panic!("non UTF-8 path: {}", path.display()));
    let language_dir = root.join("python");
    std::fs::create_dir_all(&language_dir).unwrap_or_else(|err| panic!("mkdir: {err}"));
    std::fs::write(
        language_dir.join("textobjects.scm"),
        "(string) @string.outer\n",
    )
    .unwrap_or_else(|err| panic!("write: {err}"));

    let config = Config::default().with_catalog_path(root);
    let objects = TextObjects::from_config(&config).unwrap_or_else(|err| panic!("build: {err}"));

    let source = "greeting = \"hello\"\n";
    let selection = objects
        .select_for_language_id("python", source, &group("string.outer"), 0, NonZeroUsize::MIN)
        .unwrap_or_else(|err| panic!("select: {err}"));
    assert_eq!(selection.text(source), Some("\"hello\""));
}

#[test]
fn disabled_builtins_fail_preload() {
    let config = Config::default().with_builtin_catalogs(false);
    let objects = TextObjects::from_config(&config).unwrap_or_else(|err| panic!("build: {err}"));

    let err = objects.preload().expect_err("no catalogs anywhere");
    assert_snapshot!(err.to_string(), @"no text-object catalog found for rust");
}

#[rstest]
fn builtin_catalogs_preload(objects: TextObjects) {
    objects
        .preload()
        .unwrap_or_else(|err| panic!("preload: {err}"));
}

#[rstest]
#[case("rust", "function.outer,parameter.inner", true)]
#[case("python", "class.inner|function.inner", true)]
#[case("typescript", "function.outer,widget.inner", false)]
fn validates_bindings(
    objects: TextObjects,
    #[case] language_id: &str,
    #[case] categories: &str,
    #[case] valid: bool,
) {
    let outcome = objects.validate_binding(language_id, &group(categories));
    assert_eq!(outcome.is_ok(), valid, "{outcome:?}");
}

#[rstest]
fn unmapped_language_is_reported(objects: TextObjects) {
    let err = objects
        .parse("cobol", "IDENTIFICATION DIVISION.")
        .expect_err("cobol is unmapped");

    assert!(!err.is_no_match());
    assert_snapshot!(err.to_string(), @"no grammar registered for language 'cobol'");
}
