use snipvault_core::models::language::Language;

use crate::escape::push_escaped;
use crate::rules::{Claims, apply_rule, rules_for};

/// Render `code` as escaped HTML with `<span class="code-…">` around the
/// tokens recognised by the rules for `language`.
///
/// This is cosmetic. Languages without rules come back escaped and nothing
/// else.
pub fn highlight(code: &str, language: &str) -> String {
    let language = Language::from_tag(language);
    let rules = rules_for(&language);

    let mut claims = Claims::new();
    for rule in rules {
        apply_rule(rule, code, &mut claims);
    }
    tracing::trace!(%language, rules = rules.len(), spans = claims.len(), "highlighted");

    render(code, &claims)
}

fn render(code: &str, claims: &Claims) -> String {
    let mut out = String::with_capacity(code.len() + claims.len() * 32);
    let mut cursor = 0;
    for claim in claims.iter() {
        push_escaped(&mut out, &code[cursor..claim.range.start]);
        out.push_str("<span class=\"");
        out.push_str(claim.category.class_name());
        out.push_str("\">");
        push_escaped(&mut out, &code[claim.range.clone()]);
        out.push_str("</span>");
        cursor = claim.range.end;
    }
    push_escaped(&mut out, &code[cursor..]);
    out
}
