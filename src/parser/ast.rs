// Expression tree definitions for the arithmetic evaluator

use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// The character this operator is written as.
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            _ => None,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One node of the expression tree.
///
/// Every `BinaryOp` exclusively owns both of its children, so a tree has no
/// sharing and no cycles. Nodes are built bottom-up by the parser and never
/// mutated afterwards; dropping the root releases the whole tree.
///
/// A long operator chain builds a tree as tall as the chain is long, so the
/// walks a tree of any height can reach (`Drop`, `Display`, evaluation and
/// height) keep their own stack instead of recursing.
#[derive(Debug, PartialEq, Eq)]
pub enum ExprNode {
    /// A single decimal digit, `0..=9`
    Leaf(u8),
    BinaryOp {
        op: BinOp,
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    },
}

impl ExprNode {
    pub fn leaf(digit: u8) -> Self {
        debug_assert!(digit <= 9, "leaf digit out of range: {}", digit);
        ExprNode::Leaf(digit)
    }

    pub fn binary(op: BinOp, left: ExprNode, right: ExprNode) -> Self {
        ExprNode::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The character printed for this node in tree layouts.
    pub fn token(&self) -> char {
        match self {
            ExprNode::Leaf(digit) => char::from(b'0' + digit),
            ExprNode::BinaryOp { op, .. } => op.symbol(),
        }
    }

    /// Left and right children, `None` for leaves.
    pub fn children(&self) -> Option<(&ExprNode, &ExprNode)> {
        match self {
            ExprNode::Leaf(_) => None,
            ExprNode::BinaryOp { left, right, .. } => Some((&**left, &**right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ExprNode::Leaf(_))
    }
}

/// Move the operator children of `node` onto `pending`, leaving leaves behind.
fn detach_children(node: &mut ExprNode, pending: &mut Vec<ExprNode>) {
    if let ExprNode::BinaryOp { left, right, .. } = node {
        for child in [left, right] {
            if !child.is_leaf() {
                pending.push(std::mem::replace(&mut **child, ExprNode::Leaf(0)));
            }
        }
    }
}

impl Drop for ExprNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);

        // Every node is detached before its children, so releasing in
        // reverse detach order frees children before their parent.
        let mut detached = Vec::new();
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
            detached.push(node);
        }
        while let Some(node) = detached.pop() {
            drop(node);
        }
    }
}

enum Piece<'a> {
    Node(&'a ExprNode),
    Op(BinOp),
    Close,
}

/// Fully parenthesized in-order form, e.g. `((9 - 3) - 2)`.
impl fmt::Display for ExprNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pieces = vec![Piece::Node(self)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Node(ExprNode::Leaf(digit)) => write!(f, "{}", digit)?,
                Piece::Node(ExprNode::BinaryOp { op, left, right }) => {
                    f.write_str("(")?;
                    pieces.push(Piece::Close);
                    pieces.push(Piece::Node(&**right));
                    pieces.push(Piece::Op(*op));
                    pieces.push(Piece::Node(&**left));
                }
                Piece::Op(op) => write!(f, " {} ", op)?,
                Piece::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}
