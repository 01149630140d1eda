use crate::ir::Expr;

/// Trait for visiting expression trees.
///
/// Implement this trait to traverse a tree without rebuilding it.
/// The default implementation handles recursion automatically.
///
/// # Example
///
/// ```
/// use arbor_core::ir::{BinaryOp, Expr};
/// use arbor_core::visitor::ExprVisitor;
///
/// struct LiteralCounter {
///     count: usize,
/// }
///
/// impl ExprVisitor for LiteralCounter {
///     fn visit_expr(&mut self, expr: &Expr) {
///         if matches!(expr, Expr::Literal(_)) {
///             self.count += 1;
///         }
///         self.super_visit_expr(expr);
///     }
/// }
///
/// let expr = Expr::binary(Expr::int(1), BinaryOp::Add, Expr::var("x"));
/// let mut counter = LiteralCounter { count: 0 };
/// counter.visit_expr(&expr);
/// assert_eq!(counter.count, 1);
/// ```
pub trait ExprVisitor {
    /// Visit a node.
    ///
    /// Override this to customize behavior for all nodes.
    /// Call `super_visit_expr` to recurse into the children.
    fn visit_expr(&mut self, expr: &Expr) {
        self.super_visit_expr(expr)
    }

    /// Default recursion into the immediate children, in child order.
    ///
    /// Override `visit_expr` instead of this method.
    fn super_visit_expr(&mut self, expr: &Expr) {
        for child in expr.children() {
            self.visit_expr(child);
        }
    }
}

/// Visitor that calls a closure on every node, parents before children.
pub struct ClosureVisitor<F>(pub F);

impl<F: FnMut(&Expr)> ExprVisitor for ClosureVisitor<F> {
    fn visit_expr(&mut self, expr: &Expr) {
        (self.0)(expr);
        self.super_visit_expr(expr);
    }
}

/// Computes tree depth. Leaves have depth 1.
#[derive(Debug, Default)]
pub struct DepthCalculator {
    pub max_depth: usize,
    current_depth: usize,
}

impl DepthCalculator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExprVisitor for DepthCalculator {
    fn visit_expr(&mut self, expr: &Expr) {
        self.current_depth += 1;
        self.max_depth = self.max_depth.max(self.current_depth);

        self.super_visit_expr(expr);

        self.current_depth -= 1;
    }
}
