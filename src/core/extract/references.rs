//! Style reference detection.
//!
//! Normalizes the syntactic shapes a style usage can take into
//! [`StyleReference`] values:
//!
//! | Expression                    | Reference            |
//! |-------------------------------|----------------------|
//! | `styles.a`, `styles?.a`       | `Key(styles, a)`     |
//! | `styles['a']`, ``styles[`a`]``| `Key(styles, a)`     |
//! | `styles[name]`                | `WholeSheet(styles)` |
//! | `styles.a.b`                  | `Key(styles, a)`     |
//! | `[styles.a, cond && styles.b]`| both keys            |

use swc_ecma_ast::{BinaryOp, Expr, MemberExpr, MemberProp, OptChainBase};

use crate::core::collect::helpers::{static_string, unwrap_ts_expr};
use crate::core::registry::StyleReference;

/// Reference made by a member expression whose base is a plain identifier.
///
/// Deeper chains (`styles.a.b`) produce nothing here; their inner member
/// expression carries the reference.
pub fn reference_from_member(member: &MemberExpr) -> Option<StyleReference> {
    let Expr::Ident(base) = unwrap_ts_expr(&member.obj) else {
        return None;
    };
    let sheet = base.sym.as_str();

    match &member.prop {
        MemberProp::Ident(prop) => Some(StyleReference::key(sheet, prop.sym.as_str())),
        MemberProp::Computed(computed) => Some(match static_string(&computed.expr) {
            Some(key) => StyleReference::key(sheet, key),
            None => StyleReference::whole_sheet(sheet),
        }),
        MemberProp::PrivateName(_) => None,
    }
}

/// Collect every style reference in a composite style expression.
pub fn collect_references(expr: &Expr, out: &mut Vec<StyleReference>) {
    match unwrap_ts_expr(expr) {
        Expr::Member(member) => collect_member(member, out),
        Expr::OptChain(opt) => {
            if let OptChainBase::Member(member) = &*opt.base {
                collect_member(member, out);
            }
        }
        Expr::Array(array) => {
            for elem in array.elems.iter().flatten() {
                collect_references(&elem.expr, out);
            }
        }
        Expr::Bin(bin)
            if matches!(
                bin.op,
                BinaryOp::LogicalAnd | BinaryOp::LogicalOr | BinaryOp::NullishCoalescing
            ) =>
        {
            collect_references(&bin.left, out);
            collect_references(&bin.right, out);
        }
        Expr::Cond(cond) => {
            collect_references(&cond.cons, out);
            collect_references(&cond.alt, out);
        }
        _ => {}
    }
}

fn collect_member(member: &MemberExpr, out: &mut Vec<StyleReference>) {
    match reference_from_member(member) {
        Some(reference) => out.push(reference),
        None => collect_references(&member.obj, out),
    }
}
