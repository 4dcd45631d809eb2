//! Callee resolution: attribute chains to dotted identifiers.

use crate::ast::Expr;

/// Reconstructs the dotted identifier of a call target.
///
/// Walks the expression from the outermost node inward: each attribute
/// access contributes its field name, and a terminating name reference
/// contributes the root segment. Segments are collected trailing-first and
/// reversed into root-to-leaf order.
///
/// Returns `None` as soon as the chain reaches any other expression shape
/// (a call, subscript, literal, ...). Such targets have no static
/// module-item identifier; this is the expected outcome for most calls and
/// callers skip them without reporting anything.
///
/// A bare name resolves to itself. With no dot it can never match a
/// restriction entry, which always carries a module path.
///
/// # Example
///
/// ```
/// use item_lint_core::ast::{Expr, Span};
/// use item_lint_core::dotted_path;
///
/// let span = Span::new(1, 1);
/// let callee = Expr::attribute(
///     Expr::attribute(Expr::name("os", span), "path", span),
///     "join",
///     span,
/// );
/// assert_eq!(dotted_path(&callee).as_deref(), Some("os.path.join"));
/// ```
#[must_use]
pub fn dotted_path(expr: &Expr) -> Option<String> {
    let mut segments = Vec::new();
    let mut current = expr;
    loop {
        match current {
            Expr::Name(name) => {
                segments.push(name.id.as_str());
                break;
            }
            Expr::Attribute(attr) => {
                segments.push(attr.attr.as_str());
                current = &attr.value;
            }
            Expr::Call(_) | Expr::Other(_) => return None,
        }
    }
    segments.reverse();
    Some(segments.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Span;

    fn chain(segments: &[&str]) -> Expr {
        let span = Span::default();
        let mut iter = segments.iter();
        let mut expr = Expr::name(*iter.next().unwrap(), span);
        for segment in iter {
            expr = Expr::attribute(expr, *segment, span);
        }
        expr
    }

    #[test]
    fn bare_name_resolves_to_itself() {
        assert_eq!(dotted_path(&chain(&["join"])).as_deref(), Some("join"));
    }

    #[test]
    fn attribute_chain_resolves_root_to_leaf() {
        assert_eq!(
            dotted_path(&chain(&["os", "path", "join"])).as_deref(),
            Some("os.path.join")
        );
    }

    #[test]
    fn resolves_at_any_depth() {
        assert_eq!(
            dotted_path(&chain(&["pkg", "sub", "mod", "Name"])).as_deref(),
            Some("pkg.sub.mod.Name")
        );
    }

    #[test]
    fn call_base_fails_resolution() {
        // f().join — the chain bottoms out in a call, not a name.
        let span = Span::default();
        let callee = Expr::attribute(
            Expr::call(Expr::name("f", span), vec![], span),
            "join",
            span,
        );
        assert_eq!(dotted_path(&callee), None);
    }

    #[test]
    fn opaque_base_fails_resolution() {
        // items[0].join — subscript bases are not dotted paths.
        let span = Span::default();
        let callee = Expr::attribute(Expr::other("subscript", vec![], span), "join", span);
        assert_eq!(dotted_path(&callee), None);
    }

    #[test]
    fn failure_is_detected_deep_in_the_chain() {
        let span = Span::default();
        let callee = Expr::attribute(
            Expr::attribute(
                Expr::call(Expr::name("factory", span), vec![], span),
                "path",
                span,
            ),
            "join",
            span,
        );
        assert_eq!(dotted_path(&callee), None);
    }
}
