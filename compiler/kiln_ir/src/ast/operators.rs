//! Binary, prefix and postfix operators.

/// Binary operators, including compound assignment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Arithmetic
    Mul,
    Div,
    Mod,
    Add,
    Sub,

    // Shifts
    Shl,
    Shr,
    /// Unsigned right shift (`>>>`).
    Shru,

    // Comparison
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Neq,

    // Bitwise
    BitAnd,
    BitXor,
    BitOr,

    // Logical
    And,
    Or,

    // Assignment
    Assign,
    AssignMul,
    AssignDiv,
    AssignMod,
    AssignAdd,
    AssignSub,
    AssignShl,
    AssignShr,
    AssignShru,
    AssignBitAnd,
    AssignBitXor,
    AssignBitOr,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Shru => ">>>",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::BitOr => "|",
            Self::And => "&&",
            Self::Or => "||",
            Self::Assign => "=",
            Self::AssignMul => "*=",
            Self::AssignDiv => "/=",
            Self::AssignMod => "%=",
            Self::AssignAdd => "+=",
            Self::AssignSub => "-=",
            Self::AssignShl => "<<=",
            Self::AssignShr => ">>=",
            Self::AssignShru => ">>>=",
            Self::AssignBitAnd => "&=",
            Self::AssignBitXor => "^=",
            Self::AssignBitOr => "|=",
        }
    }

    /// True for `=` and the compound assignments.
    pub const fn is_assignment(self) -> bool {
        matches!(
            self,
            Self::Assign
                | Self::AssignMul
                | Self::AssignDiv
                | Self::AssignMod
                | Self::AssignAdd
                | Self::AssignSub
                | Self::AssignShl
                | Self::AssignShr
                | Self::AssignShru
                | Self::AssignBitAnd
                | Self::AssignBitXor
                | Self::AssignBitOr
        )
    }
}

/// Prefix (unary) operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum PrefixOp {
    Inc,
    Dec,
    Neg,
    Not,
    BitNot,
}

impl PrefixOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Inc => "++",
            Self::Dec => "--",
            Self::Neg => "-",
            Self::Not => "!",
            Self::BitNot => "~",
        }
    }

    /// True if the operator writes back to its operand.
    pub const fn is_modifying(self) -> bool {
        matches!(self, Self::Inc | Self::Dec)
    }
}

/// Postfix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum PostfixOp {
    Inc,
    Dec,
}

impl PostfixOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Inc => "++",
            Self::Dec => "--",
        }
    }
}
