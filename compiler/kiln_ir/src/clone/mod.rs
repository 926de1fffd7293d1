//! Structural expression cloning.
//!
//! Passes that duplicate a subexpression (loop unrolling, inlining,
//! switch-to-if desugaring) must not alias the original subtree. The
//! [`ExprCloner`] rebuilds a subtree node by node inside the same arena:
//!
//! - literals and native member references are returned as-is; their id is
//!   their identity and they carry nothing a later pass could mutate
//! - `this` is regenerated through [`Program::this_ref`]
//! - local and parameter references become new nodes bound to the same
//!   declaration
//! - composite nodes are rebuilt with every child slot cloned depth-first,
//!   left to right, in slot order
//!
//! The dispatch is a single exhaustive `match`, so a variant added to
//! [`ExprKind`] without a cloning rule does not compile. What can still go
//! wrong at runtime is a corrupted tree: an id or list range that does not
//! belong to the arena, or a child that does not precede its parent. The
//! arena is append-only, so every child of a well-formed node was allocated
//! before it; a child at or after its owner means a cycle. Either is reported
//! as a [`CloneProblem`], an internal compiler defect, and no partial clone
//! is handed back.
//!
//! Trees can be arbitrarily deep. Each level of the walk runs under
//! `ensure_sufficient_stack`.

use smallvec::SmallVec;

use crate::stack::ensure_sufficient_stack;
use crate::{Expr, ExprArena, ExprId, ExprKind, ExprRange, Program, Span};

/// A defect found while cloning.
///
/// Never caused by the program being compiled: every variant means the tree
/// handed to the cloner is not a well-formed tree of its arena.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CloneProblem {
    /// The root of the clone request is not a node of the arena.
    #[error("unable to clone expression {id:?}: not a node of this arena")]
    DanglingExpr { id: ExprId },
    /// A child slot of `owner` points outside the arena.
    #[error("unable to clone {kind} {owner:?}: child {child:?} is not a node of this arena")]
    DanglingChild {
        owner: ExprId,
        kind: &'static str,
        span: Span,
        child: ExprId,
    },
    /// A child slot of `owner` points at `owner` itself or a later node.
    #[error("unable to clone {kind} {owner:?}: child {child:?} does not precede it in the arena")]
    CyclicChild {
        owner: ExprId,
        kind: &'static str,
        span: Span,
        child: ExprId,
    },
    /// A child list of `owner` reaches past the arena's list storage.
    #[error("unable to clone {kind} {owner:?}: child list {range:?} is outside this arena")]
    DanglingList {
        owner: ExprId,
        kind: &'static str,
        span: Span,
        range: ExprRange,
    },
}

impl CloneProblem {
    /// The node the defect was found on.
    pub fn offending(&self) -> ExprId {
        match *self {
            CloneProblem::DanglingExpr { id } => id,
            CloneProblem::DanglingChild { owner, .. }
            | CloneProblem::CyclicChild { owner, .. }
            | CloneProblem::DanglingList { owner, .. } => owner,
        }
    }

    /// Source span of the offending node, when it could be read.
    pub fn span(&self) -> Option<Span> {
        match *self {
            CloneProblem::DanglingExpr { .. } => None,
            CloneProblem::DanglingChild { span, .. }
            | CloneProblem::CyclicChild { span, .. }
            | CloneProblem::DanglingList { span, .. } => Some(span),
        }
    }
}

/// Deep-clones expression subtrees inside one arena.
///
/// Holds no state between requests besides its borrows; each call to
/// [`clone_expr`](Self::clone_expr) is independent.
pub struct ExprCloner<'a> {
    arena: &'a mut ExprArena,
    program: &'a Program,
}

impl<'a> ExprCloner<'a> {
    pub fn new(arena: &'a mut ExprArena, program: &'a Program) -> Self {
        Self { arena, program }
    }

    /// Clone the subtree rooted at `id`.
    ///
    /// `ExprId::INVALID` clones to `ExprId::INVALID`. The returned id is the
    /// input id exactly when the root is a shareable literal.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn clone_expr(&mut self, id: ExprId) -> Result<ExprId, CloneProblem> {
        if !id.is_valid() {
            return Ok(ExprId::INVALID);
        }
        if !self.arena.contains(id) {
            return Err(defect(CloneProblem::DanglingExpr { id }));
        }
        self.clone_node(id)
    }

    /// Clone each expression of `exprs` in order.
    ///
    /// `None` clones to `None`; an empty slice to an empty vector.
    pub fn clone_exprs(
        &mut self,
        exprs: Option<&[ExprId]>,
    ) -> Result<Option<Vec<ExprId>>, CloneProblem> {
        let Some(exprs) = exprs else {
            return Ok(None);
        };
        let mut cloned = Vec::with_capacity(exprs.len());
        for &expr in exprs {
            cloned.push(self.clone_expr(expr)?);
        }
        Ok(Some(cloned))
    }

    /// Dispatch on the node's kind. `id` is known to be in the arena.
    ///
    /// Recursion goes through [`clone_child`](Self::clone_child) only, never
    /// back through the instrumented entry point.
    fn clone_node(&mut self, id: ExprId) -> Result<ExprId, CloneProblem> {
        let Expr { kind, span, ty } = self.arena.get(id);
        tracing::trace!(?id, kind = kind.name(), "clone");

        let cloned = match kind {
            // Shared as-is
            ExprKind::Bool(_)
            | ExprKind::Char(_)
            | ExprKind::Int(_)
            | ExprKind::Long(_)
            | ExprKind::Float(_)
            | ExprKind::Double(_)
            | ExprKind::String(_)
            | ExprKind::Null
            | ExprKind::AbsentArrayDimension
            | ExprKind::ClassLiteral { .. }
            | ExprKind::NativeFieldRef { .. }
            | ExprKind::NativeMethodRef { .. } => return Ok(id),

            ExprKind::ThisRef { class_type } => {
                return Ok(self.program.this_ref(self.arena, span, class_type));
            }

            // Same declaration, new reference node
            ExprKind::LocalRef(local) => ExprKind::LocalRef(local),
            ExprKind::ParamRef(param) => ExprKind::ParamRef(param),

            ExprKind::ArrayRef { instance, index } => {
                let instance = self.clone_child(id, instance)?;
                let index = self.clone_child(id, index)?;
                ExprKind::ArrayRef { instance, index }
            }
            ExprKind::Binary { op, lhs, rhs } => {
                let lhs = self.clone_child(id, lhs)?;
                let rhs = self.clone_child(id, rhs)?;
                ExprKind::Binary { op, lhs, rhs }
            }
            ExprKind::Prefix { op, arg } => {
                let arg = self.clone_child(id, arg)?;
                ExprKind::Prefix { op, arg }
            }
            ExprKind::Postfix { op, arg } => {
                let arg = self.clone_child(id, arg)?;
                ExprKind::Postfix { op, arg }
            }
            ExprKind::Cast { cast_type, expr } => {
                let expr = self.clone_child(id, expr)?;
                ExprKind::Cast { cast_type, expr }
            }
            ExprKind::InstanceOf { test_type, expr } => {
                let expr = self.clone_child(id, expr)?;
                ExprKind::InstanceOf { test_type, expr }
            }
            ExprKind::Conditional {
                test,
                then_expr,
                else_expr,
            } => {
                let test = self.clone_child(id, test)?;
                let then_expr = self.clone_child(id, then_expr)?;
                let else_expr = self.clone_child(id, else_expr)?;
                ExprKind::Conditional {
                    test,
                    then_expr,
                    else_expr,
                }
            }
            ExprKind::FieldRef {
                instance,
                field,
                enclosing_type,
            } => {
                let instance = self.clone_child(id, instance)?;
                ExprKind::FieldRef {
                    instance,
                    field,
                    enclosing_type,
                }
            }
            ExprKind::MethodCall {
                instance,
                target,
                args,
                polymorphic,
            } => {
                let instance = self.clone_child(id, instance)?;
                let args = self.clone_list(id, args)?;
                ExprKind::MethodCall {
                    instance,
                    target,
                    args,
                    polymorphic,
                }
            }
            ExprKind::NewInstance { class_type } => ExprKind::NewInstance { class_type },
            ExprKind::NewArray {
                array_type,
                dims,
                initializers,
                class_literals,
            } => {
                let dims = dims.map(|dims| self.clone_list(id, dims)).transpose()?;
                let initializers = initializers
                    .map(|inits| self.clone_list(id, inits))
                    .transpose()?;
                ExprKind::NewArray {
                    array_type,
                    dims,
                    initializers,
                    class_literals,
                }
            }
            ExprKind::Multi { exprs } => {
                let exprs = self.clone_list(id, exprs)?;
                ExprKind::Multi { exprs }
            }

            // The clone no longer knows the seeded class statically; it is
            // typed as the root type.
            ExprKind::ClassSeed { ref_type } => {
                let root = self.program.root_type();
                return Ok(self.arena.alloc(ExprKind::ClassSeed { ref_type }, span, root));
            }

            ExprKind::DeferredCreate {
                source_type,
                result_types,
                instantiations,
            } => {
                let instantiations = self.clone_list(id, instantiations)?;
                ExprKind::DeferredCreate {
                    source_type,
                    result_types,
                    instantiations,
                }
            }
        };

        Ok(self.arena.alloc(cloned, span, ty))
    }

    /// Clone one child slot of `owner`. Empty slots stay empty.
    fn clone_child(&mut self, owner: ExprId, child: ExprId) -> Result<ExprId, CloneProblem> {
        if !child.is_valid() {
            return Ok(ExprId::INVALID);
        }
        let kind = self.arena.kind(owner).name();
        let span = self.arena.span(owner);
        if !self.arena.contains(child) {
            return Err(defect(CloneProblem::DanglingChild {
                owner,
                kind,
                span,
                child,
            }));
        }
        if child.raw() >= owner.raw() {
            return Err(defect(CloneProblem::CyclicChild {
                owner,
                kind,
                span,
                child,
            }));
        }
        ensure_sufficient_stack(|| self.clone_node(child))
    }

    /// Clone a child list of `owner` into a fresh range.
    fn clone_list(&mut self, owner: ExprId, range: ExprRange) -> Result<ExprRange, CloneProblem> {
        let Some(children) = self.arena.try_get_expr_list(range) else {
            return Err(defect(CloneProblem::DanglingList {
                owner,
                kind: self.arena.kind(owner).name(),
                span: self.arena.span(owner),
                range,
            }));
        };
        // Copy out before cloning: cloning appends to the list storage.
        let children: SmallVec<[ExprId; 8]> = SmallVec::from_slice(children);

        let mut cloned: SmallVec<[ExprId; 8]> = SmallVec::with_capacity(children.len());
        for child in children {
            cloned.push(self.clone_child(owner, child)?);
        }
        // Same length as `range`, so it fits.
        Ok(self.arena.push_expr_list(&cloned))
    }
}

/// Clone the subtree rooted at `id` into `arena`.
///
/// Shorthand for a one-off [`ExprCloner::clone_expr`].
pub fn clone_expr(
    arena: &mut ExprArena,
    program: &Program,
    id: ExprId,
) -> Result<ExprId, CloneProblem> {
    ExprCloner::new(arena, program).clone_expr(id)
}

fn defect(problem: CloneProblem) -> CloneProblem {
    tracing::error!(%problem, "clone defect");
    problem
}
