//! AST visitor that collects Chinese-bearing literals.
//!
//! The walk is pure: it produces `LiteralOccurrence` values and performs no
//! rewriting. Once a node is classified its subtree is not re-visited, so a
//! literal is never reported twice through different ancestors.

use swc_common::{SourceMap, Span};
use swc_ecma_ast::{Expr, JSXAttr, JSXAttrValue, JSXText, MemberExpr, MemberProp, Module, Str, Tpl};
use swc_ecma_visit::{Visit, VisitWith};

use super::occurrence::{LiteralKind, LiteralOccurrence};
use crate::utils::contains_han;

/// Everything the walk found in one module.
pub struct Extraction {
    /// Chinese-bearing literals in document order.
    pub occurrences: Vec<LiteralOccurrence>,
    /// 1-based lines of Chinese-bearing template literals left untouched by
    /// the conservative-skip policy (multi-line span or unsupported
    /// interpolation).
    pub skipped_templates: Vec<usize>,
}

/// Walk a parsed module and return every Chinese-bearing literal in
/// document order.
pub fn collect_occurrences(module: &Module, source_map: &SourceMap) -> Extraction {
    let mut visitor = ChineseTextVisitor {
        source_map,
        occurrences: Vec::new(),
        skipped_templates: Vec::new(),
    };
    visitor.visit_module(module);
    Extraction {
        occurrences: visitor.occurrences,
        skipped_templates: visitor.skipped_templates,
    }
}

struct ChineseTextVisitor<'a> {
    source_map: &'a SourceMap,
    occurrences: Vec<LiteralOccurrence>,
    skipped_templates: Vec<usize>,
}

impl<'a> ChineseTextVisitor<'a> {
    fn span_lines(&self, span: Span) -> (usize, usize) {
        let start = self.source_map.lookup_char_pos(span.lo).line;
        let end = self.source_map.lookup_char_pos(span.hi).line;
        (start, end)
    }

    fn record_str(&mut self, node: &Str, needs_brace_wrap: bool) {
        let Some(value) = node.value.as_str() else {
            return;
        };
        if !contains_han(value) {
            return;
        }
        let (start_line, end_line) = self.span_lines(node.span);
        self.occurrences.push(LiteralOccurrence {
            raw_value: value.to_string(),
            start_line,
            end_line,
            kind: LiteralKind::Str,
            needs_brace_wrap,
        });
    }

    /// Flatten a dotted member chain like `info.person.name`.
    ///
    /// Accepted only when every segment is a plain identifier; computed
    /// members, calls, and any other expression shape reject the chain.
    fn member_chain(member: &MemberExpr) -> Option<String> {
        let MemberProp::Ident(prop) = &member.prop else {
            return None;
        };
        match &*member.obj {
            Expr::Ident(obj) => Some(format!("{}.{}", obj.sym, prop.sym)),
            Expr::Member(inner) => {
                Self::member_chain(inner).map(|base| format!("{}.{}", base, prop.sym))
            }
            _ => None,
        }
    }

    fn interpolation_text(expr: &Expr) -> Option<String> {
        match expr {
            Expr::Ident(ident) => Some(ident.sym.to_string()),
            Expr::Member(member) => Self::member_chain(member),
            _ => None,
        }
    }
}

impl<'a> Visit for ChineseTextVisitor<'a> {
    fn visit_jsx_text(&mut self, node: &JSXText) {
        let (start_line, end_line) = self.span_lines(node.span);
        // Split on line breaks, trim each segment, drop empty and
        // non-Chinese segments; each survivor shares the node's span.
        for segment in node.value.split('\n') {
            let segment = segment.trim();
            if segment.is_empty() || !contains_han(segment) {
                continue;
            }
            self.occurrences.push(LiteralOccurrence {
                raw_value: segment.to_string(),
                start_line,
                end_line,
                kind: LiteralKind::JsxText,
                needs_brace_wrap: false,
            });
        }
    }

    fn visit_jsx_attr(&mut self, node: &JSXAttr) {
        match &node.value {
            // A string that is the direct attribute value needs brace
            // wrapping when rewritten; handled here so the generic string
            // visit below never sees it.
            Some(JSXAttrValue::Str(s)) => self.record_str(s, true),
            _ => node.visit_children_with(self),
        }
    }

    fn visit_str(&mut self, node: &Str) {
        self.record_str(node, false);
    }

    fn visit_tpl(&mut self, node: &Tpl) {
        // Conservative-skip policy: the subtree is never descended, so a
        // rejected template leaves its contents untouched rather than
        // risking a partial rewrite.
        if !node.quasis.iter().any(|q| contains_han(q.raw.as_str())) {
            return;
        }
        let (start_line, end_line) = self.span_lines(node.span);
        if start_line != end_line {
            self.skipped_templates.push(start_line);
            return;
        }
        let mut interpolations = Vec::with_capacity(node.exprs.len());
        for expr in &node.exprs {
            match Self::interpolation_text(expr) {
                Some(text) => interpolations.push(text),
                None => {
                    self.skipped_templates.push(start_line);
                    return;
                }
            }
        }

        let mut source = String::from("`");
        let mut value = String::new();
        let mut substitutions = Vec::with_capacity(interpolations.len());
        for (i, quasi) in node.quasis.iter().enumerate() {
            let raw = quasi.raw.as_str();
            source.push_str(raw);
            value.push_str(raw);
            if let Some(expr_text) = interpolations.get(i) {
                source.push_str("${");
                source.push_str(expr_text);
                source.push('}');
                let placeholder = format!("value{}", i + 1);
                value.push_str(&format!("{{{{{}}}}}", placeholder));
                substitutions.push((placeholder, expr_text.clone()));
            }
        }
        source.push('`');

        let key_source: String = node
            .quasis
            .iter()
            .map(|q| q.raw.as_str())
            .filter(|raw| !raw.is_empty())
            .collect();

        self.occurrences.push(LiteralOccurrence {
            raw_value: key_source,
            start_line,
            end_line,
            kind: LiteralKind::Template {
                value,
                source,
                substitutions,
            },
            needs_brace_wrap: false,
        });
    }
}
