//! Expression arena.
//!
//! [`ExprArena`] uses struct-of-arrays layout for cache locality (parallel
//! `kinds`, `spans`, `types` arrays indexed by [`ExprId`]). Nodes are only
//! ever appended: an `ExprId` handed out once keeps addressing the same
//! node, which is what lets literal nodes be shared between trees.

use crate::{Expr, ExprId, ExprKind, ExprRange, Span, TypeId, TypeRange};

/// An expression list longer than one [`ExprRange`] can address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("expression list of {len} entries exceeds the {} an ExprRange can hold", ExprRange::MAX_LEN)]
pub struct ListTooLong {
    pub len: usize,
}

/// Arena for expression nodes.
///
/// # Index Spaces
///
/// - `kinds`/`spans`/`types`: parallel arrays indexed by [`ExprId`]
/// - `expr_lists`: flat `Vec<ExprId>` indexed by [`ExprRange`]
/// - `type_lists`: flat `Vec<TypeId>` indexed by [`TypeRange`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    /// Expression kinds (parallel with spans and types).
    kinds: Vec<ExprKind>,
    /// Source spans (parallel with kinds).
    spans: Vec<Span>,
    /// Declared static types (parallel with kinds).
    types: Vec<TypeId>,
    /// Flattened expression id lists (args, dims, initializers, sequences).
    expr_lists: Vec<ExprId>,
    /// Flattened type id lists.
    type_lists: Vec<TypeId>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node, returning its ID.
    pub fn alloc(&mut self, kind: ExprKind, span: Span, ty: TypeId) -> ExprId {
        let id = ExprId::new(to_u32(self.kinds.len(), "expressions"));
        self.kinds.push(kind);
        self.spans.push(span);
        self.types.push(ty);
        id
    }

    /// Returns `true` if `id` addresses a node of this arena.
    #[inline]
    pub fn contains(&self, id: ExprId) -> bool {
        id.is_valid() && id.index() < self.kinds.len()
    }

    /// Get the expression kind for a node.
    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.kinds[id.index()]
    }

    /// Get the source span for a node.
    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.spans[id.index()]
    }

    /// Get the declared type for a node.
    #[inline]
    pub fn ty(&self, id: ExprId) -> TypeId {
        self.types[id.index()]
    }

    /// Reconstruct a full `Expr` from the parallel arrays.
    pub fn get(&self, id: ExprId) -> Expr {
        Expr {
            kind: self.kinds[id.index()],
            span: self.spans[id.index()],
            ty: self.types[id.index()],
        }
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns `true` if no nodes have been allocated.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Allocate a contiguous range of expression IDs.
    ///
    /// # Panics
    /// Panics if `ids` is longer than [`ExprRange::MAX_LEN`]. Callers building
    /// lists from unbounded input use
    /// [`try_push_expr_list`](Self::try_push_expr_list).
    pub fn push_expr_list(&mut self, ids: &[ExprId]) -> ExprRange {
        self.try_push_expr_list(ids).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Allocate a contiguous range of expression IDs, or report a list too
    /// long for an [`ExprRange`]. Nothing is stored on failure.
    pub fn try_push_expr_list(&mut self, ids: &[ExprId]) -> Result<ExprRange, ListTooLong> {
        if ids.is_empty() {
            return Ok(ExprRange::EMPTY);
        }
        let len = u16::try_from(ids.len()).map_err(|_| ListTooLong { len: ids.len() })?;
        let start = to_u32(self.expr_lists.len(), "expression lists");
        self.expr_lists.extend_from_slice(ids);
        Ok(ExprRange::new(start, len))
    }

    /// Get expression IDs from a range.
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        if range.is_empty() {
            return &[];
        }
        &self.expr_lists[range.start as usize..range.end()]
    }

    /// Like [`get_expr_list`](Self::get_expr_list), but `None` if the range
    /// reaches past this arena's list storage.
    pub fn try_get_expr_list(&self, range: ExprRange) -> Option<&[ExprId]> {
        if range.is_empty() {
            return Some(&[]);
        }
        self.expr_lists.get(range.start as usize..range.end())
    }

    /// Allocate a contiguous range of type IDs.
    pub fn push_type_list(&mut self, types: &[TypeId]) -> TypeRange {
        if types.is_empty() {
            return TypeRange::EMPTY;
        }
        let start = to_u32(self.type_lists.len(), "type lists");
        self.type_lists.extend_from_slice(types);
        TypeRange::new(start, to_u16(types.len(), "type list"))
    }

    /// Get type IDs from a range.
    pub fn get_type_list(&self, range: TypeRange) -> &[TypeId] {
        if range.is_empty() {
            return &[];
        }
        &self.type_lists[range.start as usize..range.end()]
    }
}

/// Convert an arena length to a `u32` index.
///
/// # Panics
/// Panics if the arena outgrows the `u32` index space.
pub(crate) fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}

/// Convert a list length to a `u16` range length.
///
/// # Panics
/// Panics if a single list exceeds `u16::MAX` entries.
pub(crate) fn to_u16(len: usize, what: &str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("{what} too long: {len} exceeds u16::MAX"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn alloc_and_read_back() {
        let mut arena = ExprArena::new();
        let id = arena.alloc(ExprKind::Int(7), Span::new(0, 1), TypeId::INT);
        assert_eq!(arena.len(), 1);
        assert_eq!(*arena.kind(id), ExprKind::Int(7));
        assert_eq!(arena.span(id), Span::new(0, 1));
        assert_eq!(arena.ty(id), TypeId::INT);
        assert_eq!(
            arena.get(id),
            Expr::new(ExprKind::Int(7), Span::new(0, 1), TypeId::INT)
        );
    }

    #[test]
    fn contains_rejects_foreign_and_invalid_ids() {
        let mut arena = ExprArena::new();
        let id = arena.alloc(ExprKind::Null, Span::DUMMY, TypeId::NULL);
        assert!(arena.contains(id));
        assert!(!arena.contains(ExprId::INVALID));
        assert!(!arena.contains(ExprId::new(1)));
    }

    #[test]
    fn expr_lists() {
        let mut arena = ExprArena::new();
        let a = arena.alloc(ExprKind::Int(1), Span::DUMMY, TypeId::INT);
        let b = arena.alloc(ExprKind::Int(2), Span::DUMMY, TypeId::INT);
        let range = arena.push_expr_list(&[a, b]);
        assert_eq!(arena.get_expr_list(range), &[a, b]);
        assert_eq!(arena.push_expr_list(&[]), ExprRange::EMPTY);
        assert_eq!(arena.get_expr_list(ExprRange::EMPTY), &[] as &[ExprId]);
    }

    #[test]
    fn oversized_expr_list_is_refused() {
        let mut arena = ExprArena::new();
        let a = arena.alloc(ExprKind::Int(1), Span::DUMMY, TypeId::INT);

        let longest = vec![a; ExprRange::MAX_LEN];
        let range = arena.try_push_expr_list(&longest);
        assert_eq!(range.map(|range| range.len()), Ok(ExprRange::MAX_LEN));

        let too_long = vec![a; ExprRange::MAX_LEN + 1];
        assert_eq!(
            arena.try_push_expr_list(&too_long),
            Err(ListTooLong { len: 65_536 })
        );
        // The refused list left no entries behind.
        let next = arena.push_expr_list(&[a]);
        assert_eq!(next.start as usize, ExprRange::MAX_LEN);
    }

    #[test]
    fn try_get_expr_list_out_of_bounds() {
        let arena = ExprArena::new();
        assert_eq!(arena.try_get_expr_list(ExprRange::new(0, 3)), None);
        assert_eq!(arena.try_get_expr_list(ExprRange::EMPTY), Some(&[] as &[ExprId]));
    }

    #[test]
    fn type_lists() {
        let mut arena = ExprArena::new();
        let range = arena.push_type_list(&[TypeId::INT, TypeId::STRING]);
        assert_eq!(arena.get_type_list(range), &[TypeId::INT, TypeId::STRING]);
    }
}
