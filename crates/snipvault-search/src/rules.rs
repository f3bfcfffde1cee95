//! Highlight rule tables and the interpreter that applies one rule.
//!
//! Rules run over the raw (unescaped) code. Each accepted match *claims* the
//! byte range of its token; escaping happens later, when claims are rendered.

use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use snipvault_core::models::language::Language;

/// Lexical categories, rendered as `code-{name}` CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Tag,
    Attribute,
    String,
    Comment,
    Property,
    Value,
    Keyword,
    Function,
    Variable,
    Number,
}

impl Category {
    pub fn class_name(self) -> &'static str {
        match self {
            Category::Tag => "code-tag",
            Category::Attribute => "code-attribute",
            Category::String => "code-string",
            Category::Comment => "code-comment",
            Category::Property => "code-property",
            Category::Value => "code-value",
            Category::Keyword => "code-keyword",
            Category::Function => "code-function",
            Category::Variable => "code-variable",
            Category::Number => "code-number",
        }
    }
}

/// One pattern and the capture group it highlights.
#[derive(Debug)]
pub struct Rule {
    pub category: Category,
    regex: Regex,
    /// Capture group wrapped in the span. Group 0 wraps the whole match.
    token: usize,
    /// When set, text matched after the token is context only and may be
    /// matched again by the same rule.
    lookahead: bool,
}

impl Rule {
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex. Rules are only built from the
    /// literal tables below, so a panic means a typo in a table.
    fn new(category: Category, pattern: &str, token: usize) -> Self {
        Self {
            category,
            regex: Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid highlight pattern {pattern:?}: {e}")),
            token,
            lookahead: false,
        }
    }

    fn with_lookahead(mut self) -> Self {
        self.lookahead = true;
        self
    }
}

/// A highlighted byte range of the raw code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub range: Range<usize>,
    pub category: Category,
}

/// Non-overlapping claims keyed by start offset.
#[derive(Debug, Default)]
pub struct Claims {
    by_start: BTreeMap<usize, Claim>,
}

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_start.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_start.is_empty()
    }

    /// Claims in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Claim> {
        self.by_start.values()
    }

    /// Claims sharing at least one byte with `span`.
    fn overlapping(&self, span: &Range<usize>) -> impl Iterator<Item = &Claim> {
        let before = self
            .by_start
            .range(..span.start)
            .next_back()
            .map(|(_, c)| c)
            .filter(|c| c.range.end > span.start);
        before.into_iter().chain(self.by_start.range(span.clone()).map(|(_, c)| c))
    }

    /// Insert `claim`, dropping every claim that starts inside it. Callers
    /// have already checked that those claims lie wholly inside it.
    fn absorb(&mut self, claim: Claim) {
        let inner: Vec<usize> = self
            .by_start
            .range(claim.range.clone())
            .map(|(&start, _)| start)
            .collect();
        for start in inner {
            self.by_start.remove(&start);
        }
        self.by_start.insert(claim.range.start, claim);
    }
}

static HTML_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(Category::Tag, r"(</?)([a-zA-Z][a-zA-Z0-9]*)", 2),
        Rule::new(Category::Attribute, r"([a-zA-Z-]+)=", 1),
        Rule::new(Category::String, r#"("([^"]*)")"#, 1),
        Rule::new(Category::Comment, r"<!--([\s\S]*?)-->", 0),
    ]
});

static CSS_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(Category::Property, r"([a-zA-Z-]+)\s*:", 1),
        Rule::new(Category::Value, r"(:)([^;]+);", 2),
        Rule::new(Category::Comment, r"/\*([\s\S]*?)\*/", 0),
    ]
});

static JAVASCRIPT_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(
            Category::Keyword,
            r"\b(function|var|let|const|if|else|for|while|return|class)\b",
            1,
        ),
        Rule::new(Category::Function, r"\b([a-zA-Z_$][a-zA-Z0-9_$]*)\s*\(", 1),
        Rule::new(Category::Variable, r"\b([a-zA-Z_$][a-zA-Z0-9_$]*)\s*[;=,\n]", 1)
            .with_lookahead(),
        Rule::new(Category::String, r#"("([^"]*)"|'([^']*)')"#, 1),
        Rule::new(Category::Number, r"\b([0-9]+)\b", 1),
        Rule::new(Category::Comment, r"//([^\n]*)", 0),
        Rule::new(Category::Comment, r"/\*([\s\S]*?)\*/", 0),
    ]
});

/// The ordered rule table for `language`; empty for languages without rules.
pub fn rules_for(language: &Language) -> &'static [Rule] {
    match language {
        Language::Html => HTML_RULES.as_slice(),
        Language::Css => CSS_RULES.as_slice(),
        Language::JavaScript => JAVASCRIPT_RULES.as_slice(),
        Language::Other(_) => &[],
    }
}

/// Apply one rule to `code`, adding its claims to `claims`.
///
/// A match is rejected when the text it consumes crosses an existing claim or
/// when its token is exactly an existing claim. Claims lying strictly inside
/// the new token are absorbed by it. After a rejection the search resumes one
/// character later.
pub fn apply_rule(rule: &Rule, code: &str, claims: &mut Claims) {
    let mut pos = 0;
    while pos <= code.len() {
        let Some(caps) = rule.regex.captures_at(code, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };
        let Some(token) = caps.get(rule.token) else {
            pos = next_char(code, whole.start());
            continue;
        };

        let consumed_end = if rule.lookahead {
            token.end()
        } else {
            whole.end()
        };
        let consumed = whole.start()..consumed_end;
        let token = token.range();

        if token.is_empty() || !accepts(claims, &consumed, &token) {
            pos = next_char(code, whole.start());
            continue;
        }

        claims.absorb(Claim {
            range: token,
            category: rule.category,
        });

        pos = if consumed_end > whole.start() {
            consumed_end
        } else {
            next_char(code, whole.start())
        };
    }
}

fn accepts(claims: &Claims, consumed: &Range<usize>, token: &Range<usize>) -> bool {
    claims
        .overlapping(consumed)
        .all(|c| contains(token, &c.range) && c.range != *token)
}

fn contains(outer: &Range<usize>, inner: &Range<usize>) -> bool {
    outer.start <= inner.start && inner.end <= outer.end
}

fn next_char(code: &str, at: usize) -> usize {
    code[at..]
        .chars()
        .next()
        .map_or(code.len() + 1, |c| at + c.len_utf8())
}
