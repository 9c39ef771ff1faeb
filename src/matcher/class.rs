use regex::Regex;

use super::PatternSet;

/// A class declaration found on a single diff line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    pub name: String,
    /// Everything between the class name and the opening brace, e.g.
    /// `extends Bar implements Baz` or `(val id: Int) : Bar()`.
    pub tail: String,
}

/// How a source file family spells inheritance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InheritanceSyntax {
    /// `class Foo extends Bar`
    Keyword,
    /// `class Foo : Bar()`
    Colon,
}

impl InheritanceSyntax {
    /// Pick the syntax from a file extension. Unknown extensions use the
    /// colon form.
    #[must_use]
    pub fn for_extension(extension: Option<&str>) -> Self {
        match extension {
            Some("java" | "groovy" | "scala" | "dart" | "php" | "js" | "jsx" | "ts" | "tsx") => {
                Self::Keyword
            }
            _ => Self::Colon,
        }
    }
}

/// Regex-based class declaration detector.
#[derive(Debug, Clone)]
pub struct ClassDetector {
    any_class: Regex,
    non_private_class: Regex,
    extends: Regex,
}

impl Default for ClassDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassDetector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            any_class: Regex::new(r"\bclass\s+([A-Z]\w*)\s*(.*?)\s*\{").expect("Invalid regex"),
            non_private_class: Regex::new(
                r"^\s*(?:(?:public|protected|internal|open|abstract|final|sealed|data|inner|enum|annotation|value|static|strictfp)\s+|@\w+(?:\([^)]*\))?\s+)*class\s+([A-Z]\w*)\s*(.*?)\s*\{",
            )
            .expect("Invalid regex"),
            extends: Regex::new(r"\bextends\s+([A-Za-z_][\w.]*)").expect("Invalid regex"),
        }
    }

    /// Every class declaration on the line, whatever its visibility.
    #[must_use]
    pub fn any_classes(&self, line: &str) -> Vec<ClassDeclaration> {
        self.any_class
            .captures_iter(line)
            .map(|caps| to_declaration(&caps))
            .collect()
    }

    /// Class declarations whose modifiers do not make them private.
    ///
    /// The declaration has to start the line (after indentation and
    /// annotations), so `private class`, `private data class` and classes
    /// declared mid-expression are skipped.
    #[must_use]
    pub fn non_private_classes(&self, line: &str) -> Vec<ClassDeclaration> {
        self.non_private_class
            .captures(line)
            .map(|caps| to_declaration(&caps))
            .into_iter()
            .collect()
    }

    /// Name of the first parent type in a declaration tail.
    ///
    /// Only the top level of the tail is searched, so generic bounds and
    /// constructor parameters never resolve as the parent.
    #[must_use]
    pub fn parent_type(&self, tail: &str, syntax: InheritanceSyntax) -> Option<String> {
        let top = top_level(tail);
        match syntax {
            InheritanceSyntax::Keyword => self
                .extends
                .captures(&top)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string()),
            InheritanceSyntax::Colon => colon_parent(&top),
        }
    }

    /// True if the declaration's parent type matches one of `exceptions`.
    #[must_use]
    pub fn has_excepted_parent(
        &self,
        declaration: &ClassDeclaration,
        extension: Option<&str>,
        exceptions: &PatternSet,
    ) -> bool {
        if exceptions.is_empty() {
            return false;
        }
        self.parent_type(&declaration.tail, InheritanceSyntax::for_extension(extension))
            .is_some_and(|parent| exceptions.is_match(&parent))
    }
}

fn to_declaration(caps: &regex::Captures<'_>) -> ClassDeclaration {
    ClassDeclaration {
        name: caps.get(1).map_or("", |m| m.as_str()).to_string(),
        tail: caps.get(2).map_or("", |m| m.as_str()).to_string(),
    }
}

/// The tail with every bracketed group removed. The `>` of a `->` arrow
/// does not close a group.
fn top_level(tail: &str) -> String {
    let mut depth = 0usize;
    let mut prev = None;
    let mut out = String::with_capacity(tail.len());
    for ch in tail.chars() {
        match ch {
            '>' if prev == Some('-') => {
                if depth == 0 {
                    out.push(ch);
                }
            }
            '(' | '<' | '[' => depth += 1,
            ')' | '>' | ']' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(ch),
            _ => {}
        }
        prev = Some(ch);
    }
    out
}

/// Parent after the first `:` of an already flattened tail.
fn colon_parent(top: &str) -> Option<String> {
    let (_, supertypes) = top.split_once(':')?;
    let name: String = supertypes
        .trim_start()
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '.')
        .collect();
    (!name.is_empty()).then_some(name)
}
