//! Behaviour-driven tests for text-object selection over real grammars.

use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::str::FromStr;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use syntobj_core::{ByteRange, CategoryGroup, Selection};

use crate::{SyntaxError, TextObjectSelector};

/// A quoted string value from a Gherkin feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').to_owned()))
    }
}

impl QuotedString {
    fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Default)]
struct TestWorld {
    selector: TextObjectSelector,
    language_id: String,
    source: String,
    outcome: Option<Result<Selection<ByteRange>, SyntaxError>>,
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

// =============================================================================
// Given Steps
// =============================================================================

#[given("editor language {language_id}")]
fn given_language(world: &RefCell<TestWorld>, language_id: QuotedString) {
    world.borrow_mut().language_id = language_id.as_str().to_owned();
}

#[given("source {code}")]
fn given_source(world: &RefCell<TestWorld>, code: QuotedString) {
    world.borrow_mut().source = code.as_str().to_owned();
}

// =============================================================================
// When Steps
// =============================================================================

#[when("selecting {group} at byte {cursor} with count {count}")]
fn when_selecting(world: &RefCell<TestWorld>, group: QuotedString, cursor: usize, count: usize) {
    let mut w = world.borrow_mut();
    let request = CategoryGroup::from_str(group.as_str()).expect("valid group");
    let wanted = NonZeroUsize::new(count).expect("non-zero count");
    let outcome = w
        .selector
        .select_for_language_id(&w.language_id, &w.source, &request, cursor, wanted);
    w.outcome = Some(outcome);
}

// =============================================================================
// Then Steps
// =============================================================================

#[then("the selected text is {text}")]
fn then_selected_text(world: &RefCell<TestWorld>, text: QuotedString) {
    let w = world.borrow();
    let outcome = w.outcome.as_ref().expect("selection should have run");
    let selection = outcome.as_ref().expect("selection should succeed");
    assert_eq!(selection.text(&w.source), Some(text.as_str()));
}

#[then("no match is reported")]
fn then_no_match(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    let outcome = w.outcome.as_ref().expect("selection should have run");
    assert!(
        outcome.as_ref().is_err_and(SyntaxError::is_no_match),
        "expected no match, got {outcome:?}"
    );
}

#[then("no grammar mapping is reported")]
fn then_no_grammar(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    let outcome = w.outcome.as_ref().expect("selection should have run");
    assert!(
        matches!(outcome, Err(SyntaxError::NoGrammarMapping { .. })),
        "expected missing grammar mapping, got {outcome:?}"
    );
}

// =============================================================================
// Scenario Bindings
// =============================================================================

#[scenario(
    path = "tests/features/text_objects.feature",
    name = "Inner conditional around a call"
)]
fn inner_conditional(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/text_objects.feature",
    name = "Loop request without a loop"
)]
fn loop_without_loop(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(path = "tests/features/text_objects.feature", name = "Two sibling functions")]
fn two_sibling_functions(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/text_objects.feature",
    name = "Rust parameter under the cursor"
)]
fn rust_parameter(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/text_objects.feature",
    name = "Editor language without a grammar"
)]
fn language_without_grammar(world: RefCell<TestWorld>) {
    drop(world);
}
