use super::*;

// =============================================================================
// PatternSet
// =============================================================================

#[test]
fn pattern_set_matches_any_regex_by_search() {
    let set = PatternSet::new(["^feature:", "bug"]).unwrap();

    assert!(set.is_match("feature:ui"));
    assert!(set.is_match("type: bug fix"));
    assert!(!set.is_match("Feature:ui"));
    assert!(!set.is_match("docs"));
}

#[test]
fn pattern_set_case_insensitive() {
    let set = PatternSet::case_insensitive(["^do not merge$"]).unwrap();
    assert!(set.is_match("DO NOT MERGE"));
}

#[test]
fn empty_pattern_set_matches_nothing() {
    let set = PatternSet::default();
    assert!(set.is_empty());
    assert!(!set.is_match("anything"));
}

#[test]
fn empty_string_pattern_matches_everything() {
    let set = PatternSet::new([""]).unwrap();
    assert!(set.is_match("any label"));
    assert!(set.is_match(""));
}

#[test]
fn pattern_set_reports_invalid_regex() {
    let err = PatternSet::new(["ok", "(broken"]).unwrap_err();
    assert!(err.to_string().contains("(broken"));
}

#[test]
fn unmatched_lists_patterns_without_candidates() {
    let set = PatternSet::new(["^feature:", "^size:", "urgent"]).unwrap();
    let labels = ["size:small", "Bug"];

    let missing: Vec<_> = set
        .unmatched(labels.iter().copied())
        .into_iter()
        .map(regex::Regex::as_str)
        .collect();
    assert_eq!(missing, vec!["^feature:", "urgent"]);
}

#[test]
fn unmatched_with_no_candidates_returns_all() {
    let set = PatternSet::new(["a", "b"]).unwrap();
    assert_eq!(set.unmatched(std::iter::empty()).len(), 2);
}

// =============================================================================
// TestFileMatcher
// =============================================================================

#[test]
fn default_test_matcher_detects_test_source_sets() {
    let matcher = TestFileMatcher::default();

    assert!(matcher.is_test_file("app/src/test/java/org/FooTest.kt"));
    assert!(matcher.is_test_file("app/src/androidTest/java/org/FooTest.java"));
    assert!(matcher.is_test_file("test/Foo.kt"));
    assert!(!matcher.is_test_file("app/src/main/java/org/Foo.kt"));
    assert!(!matcher.is_test_file("app/src/test/resources/data.json"));
    assert!(!matcher.is_test_file("app/src/latest/Foo.kt"));
}

#[test]
fn custom_test_matcher_patterns() {
    let matcher = TestFileMatcher::from_patterns([r"_test\.rs$", r"^tests/"]).unwrap();

    assert!(matcher.is_test_file("src/diff_test.rs"));
    assert!(matcher.is_test_file("tests/cli.rs"));
    assert!(!matcher.is_test_file("src/diff.rs"));
}

// =============================================================================
// ClassDetector
// =============================================================================

#[test]
fn any_classes_captures_name_and_tail() {
    let detector = ClassDetector::new();
    let found = detector.any_classes("private class Foo extends Bar {");

    assert_eq!(
        found,
        vec![ClassDeclaration {
            name: "Foo".to_string(),
            tail: "extends Bar".to_string(),
        }]
    );
}

#[test]
fn any_classes_finds_several_on_one_line() {
    let detector = ClassDetector::new();
    let found = detector.any_classes("class A { } class B : Base() {");

    let names: Vec<_> = found.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn any_classes_requires_opening_brace_and_capitalised_name() {
    let detector = ClassDetector::new();
    assert!(detector.any_classes("class Foo : Bar()").is_empty());
    assert!(detector.any_classes("class foo {").is_empty());
    assert!(detector.any_classes("val subclass Foo {").is_empty());
}

#[test]
fn non_private_classes_accept_visibility_modifiers() {
    let detector = ClassDetector::new();

    for line in [
        "class Foo {",
        "public class Foo extends Bar {",
        "    internal open class Foo : Bar() {",
        "data class Foo(val id: Int) {",
        "@Singleton class Foo @Inject constructor() {",
        "public final class Foo implements Runnable {",
    ] {
        let found = detector.non_private_classes(line);
        assert_eq!(found.len(), 1, "expected a class in `{line}`");
        assert_eq!(found[0].name, "Foo");
    }
}

#[test]
fn non_private_classes_skip_private_and_inline_declarations() {
    let detector = ClassDetector::new();

    assert!(detector.non_private_classes("private class Foo {").is_empty());
    assert!(detector.non_private_classes("private data class Foo(val a: Int) {").is_empty());
    assert!(detector.non_private_classes("val x = object { class Foo {").is_empty());
}

#[test]
fn parent_type_keyword_syntax() {
    let detector = ClassDetector::new();
    assert_eq!(
        detector.parent_type("<T> extends BaseActivity<T> implements Foo", InheritanceSyntax::Keyword),
        Some("BaseActivity".to_string())
    );
    assert_eq!(
        detector.parent_type("implements Runnable", InheritanceSyntax::Keyword),
        None
    );
}

#[test]
fn parent_type_colon_syntax_skips_constructor() {
    let detector = ClassDetector::new();
    assert_eq!(
        detector.parent_type("(private val repo: Repo) : BaseFragment()", InheritanceSyntax::Colon),
        Some("BaseFragment".to_string())
    );
    assert_eq!(
        detector.parent_type(": RecyclerView.Adapter<Holder>()", InheritanceSyntax::Colon),
        Some("RecyclerView.Adapter".to_string())
    );
    assert_eq!(
        detector.parent_type("<T : Any>(value: T)", InheritanceSyntax::Colon),
        None
    );
}

#[test]
fn parent_type_keyword_skips_generic_bounds() {
    let detector = ClassDetector::new();
    assert_eq!(
        detector.parent_type(
            "<T extends Comparable<T>> extends AppCompatActivity",
            InheritanceSyntax::Keyword
        ),
        Some("AppCompatActivity".to_string())
    );
    assert_eq!(
        detector.parent_type("<T extends Number> implements Supplier<T>", InheritanceSyntax::Keyword),
        None
    );
}

#[test]
fn parent_type_colon_handles_function_types() {
    let detector = ClassDetector::new();
    assert_eq!(
        detector.parent_type(
            "(val onClick: () -> Unit, val id: Int) : Fragment()",
            InheritanceSyntax::Colon
        ),
        Some("Fragment".to_string())
    );
    assert_eq!(
        detector.parent_type(
            "(private val map: (Int) -> List<String>) : Mapper<Int>()",
            InheritanceSyntax::Colon
        ),
        Some("Mapper".to_string())
    );
}

#[test]
fn inheritance_syntax_follows_extension() {
    assert_eq!(
        InheritanceSyntax::for_extension(Some("java")),
        InheritanceSyntax::Keyword
    );
    assert_eq!(
        InheritanceSyntax::for_extension(Some("kt")),
        InheritanceSyntax::Colon
    );
    assert_eq!(InheritanceSyntax::for_extension(None), InheritanceSyntax::Colon);
}

#[test]
fn has_excepted_parent_uses_file_family() {
    let detector = ClassDetector::new();
    let exceptions = PatternSet::new([r"(Fragment|Activity)\b"]).unwrap();

    let kotlin = ClassDeclaration {
        name: "HomeFragment".to_string(),
        tail: ": Fragment()".to_string(),
    };
    let java = ClassDeclaration {
        name: "MainActivity".to_string(),
        tail: "extends AppCompatActivity".to_string(),
    };

    assert!(detector.has_excepted_parent(&kotlin, Some("kt"), &exceptions));
    assert!(detector.has_excepted_parent(&java, Some("java"), &exceptions));
    // Java tail read with colon syntax has no parent.
    assert!(!detector.has_excepted_parent(&java, Some("kt"), &exceptions));
    assert!(!detector.has_excepted_parent(&kotlin, Some("kt"), &PatternSet::default()));
}
