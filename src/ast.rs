//! Expression trees.
//!
//! [`Node`] is the owned tree built by the [parser][crate::parser]: every binary node owns
//! exactly two children, `Not` owns one, identifiers are leaves.
//!
//! [`Arena`] is a flattened, read-only view of a tree where every node has a stable
//! synthetic index ([`Idx`]). It is used wherever nodes need identities, e.g. in the
//! [DOT renderer][crate::dot].

use std::collections::VecDeque;
use std::fmt::{Display, Formatter};

/// Variant tag of a node.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NodeKind {
    And,
    Or,
    Not,
    Identifier,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NodeKind::And => "AND",
            NodeKind::Or => "OR",
            NodeKind::Not => "NOT",
            NodeKind::Identifier => "ID",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Node {
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
    Not(Box<Node>),
    Identifier(String),
}

impl Node {
    pub fn and(lhs: Node, rhs: Node) -> Self {
        Node::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Node, rhs: Node) -> Self {
        Node::Or(Box::new(lhs), Box::new(rhs))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: Node) -> Self {
        Node::Not(Box::new(operand))
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier(name.into())
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::And(..) => NodeKind::And,
            Node::Or(..) => NodeKind::Or,
            Node::Not(_) => NodeKind::Not,
            Node::Identifier(_) => NodeKind::Identifier,
        }
    }

    pub fn is_and(&self) -> bool {
        matches!(self, Node::And(..))
    }
    pub fn is_or(&self) -> bool {
        matches!(self, Node::Or(..))
    }
    pub fn is_not(&self) -> bool {
        matches!(self, Node::Not(_))
    }
    pub fn is_identifier(&self) -> bool {
        matches!(self, Node::Identifier(_))
    }

    /// Identifier name, for identifier nodes.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Identifier(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Left child of a binary node.
    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::And(lhs, _) | Node::Or(lhs, _) => Some(&**lhs),
            _ => None,
        }
    }

    /// Right child of a binary node.
    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::And(_, rhs) | Node::Or(_, rhs) => Some(&**rhs),
            _ => None,
        }
    }

    /// Operand of a `Not` node.
    pub fn operand(&self) -> Option<&Node> {
        match self {
            Node::Not(inner) => Some(&**inner),
            _ => None,
        }
    }

    /// Children in left-to-right order: zero, one or two of them.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::And(lhs, rhs) | Node::Or(lhs, rhs) => vec![&**lhs, &**rhs],
            Node::Not(inner) => vec![&**inner],
            Node::Identifier(_) => vec![],
        }
    }

    /// Total number of nodes in the tree.
    pub fn size(&self) -> usize {
        let mut size = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            size += 1;
            stack.extend(node.children());
        }
        size
    }
}

// Chains like `a && a && ...` are as deep as they are long, so the tree is torn down
// with an explicit stack instead of recursive drops.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Node> = Vec::new();
        detach_children(self, &mut stack);
        while let Some(mut node) = stack.pop() {
            detach_children(&mut node, &mut stack);
        }
    }
}

/// Moves the inner children of `node` onto `stack`, leaving empty leaves in their place.
fn detach_children(node: &mut Node, stack: &mut Vec<Node>) {
    let mut detach = |child: &mut Box<Node>| {
        if !child.is_identifier() {
            stack.push(std::mem::replace(&mut **child, Node::Identifier(String::new())));
        }
    };
    match node {
        Node::And(lhs, rhs) | Node::Or(lhs, rhs) => {
            detach(lhs);
            detach(rhs);
        }
        Node::Not(inner) => detach(inner),
        Node::Identifier(_) => {}
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        enum Piece<'n> {
            Node(&'n Node),
            Text(&'static str),
        }

        let mut stack = vec![Piece::Node(self)];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(Node::Identifier(name)) => f.write_str(name)?,
                Piece::Node(Node::Not(inner)) => {
                    f.write_str("!")?;
                    stack.push(Piece::Node(inner));
                }
                Piece::Node(Node::And(lhs, rhs)) => {
                    f.write_str("(")?;
                    stack.extend([
                        Piece::Text(")"),
                        Piece::Node(rhs),
                        Piece::Text(" && "),
                        Piece::Node(lhs),
                    ]);
                }
                Piece::Node(Node::Or(lhs, rhs)) => {
                    f.write_str("(")?;
                    stack.extend([
                        Piece::Text(")"),
                        Piece::Node(rhs),
                        Piece::Text(" || "),
                        Piece::Node(lhs),
                    ]);
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Idx(usize);

impl Idx {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for Idx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One node of an [`Arena`], with children referenced by `I`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr<'a, I = Idx> {
    Identifier(&'a str),
    Not(I),
    And(I, I),
    Or(I, I),
}

impl<'a, A> Expr<'a, A> {
    #[inline(always)]
    pub fn fmap<B, F>(self, mut f: F) -> Expr<'a, B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Expr::Identifier(name) => Expr::Identifier(name),
            Expr::Not(a) => Expr::Not(f(a)),
            Expr::And(a, b) => Expr::And(f(a), f(b)),
            Expr::Or(a, b) => Expr::Or(f(a), f(b)),
        }
    }

    #[inline(always)]
    pub fn fmap_ref<B, F>(&self, mut f: F) -> Expr<'a, B>
    where
        F: FnMut(&A) -> B,
    {
        match self {
            Expr::Identifier(name) => Expr::Identifier(*name),
            Expr::Not(a) => Expr::Not(f(a)),
            Expr::And(a, b) => Expr::And(f(a), f(b)),
            Expr::Or(a, b) => Expr::Or(f(a), f(b)),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Identifier(_) => NodeKind::Identifier,
            Expr::Not(_) => NodeKind::Not,
            Expr::And(..) => NodeKind::And,
            Expr::Or(..) => NodeKind::Or,
        }
    }
}

impl<'a> Expr<'a> {
    pub fn children(&self) -> Vec<Idx> {
        match *self {
            Expr::Identifier(_) => vec![],
            Expr::Not(a) => vec![a],
            Expr::And(a, b) | Expr::Or(a, b) => vec![a, b],
        }
    }
}

// See: https://recursion.wtf/posts/rust_schemes/
#[derive(Debug)]
pub struct Arena<'a> {
    /// Breadth-first order, root first. Children always come after their parent.
    exprs: Vec<Expr<'a>>,
}

impl<'a> Arena<'a> {
    pub fn from_node(root: &'a Node) -> Self {
        let mut frontier: VecDeque<&'a Node> = VecDeque::from([root]);
        let mut exprs: Vec<Expr<'a>> = vec![];

        while let Some(node) = frontier.pop_front() {
            let expr: Expr<'a, &'a Node> = match node {
                Node::Identifier(name) => Expr::Identifier(name.as_str()),
                Node::Not(a) => Expr::Not(&**a),
                Node::And(a, b) => Expr::And(&**a, &**b),
                Node::Or(a, b) => Expr::Or(&**a, &**b),
            };
            let expr = expr.fmap(|child| {
                frontier.push_back(child);
                Idx(exprs.len() + frontier.len())
            });
            exprs.push(expr);
        }

        Self { exprs }
    }

    pub fn root(&self) -> Idx {
        Idx(0)
    }

    pub fn get(&self, idx: Idx) -> &Expr<'a> {
        &self.exprs[idx.0]
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Idx, &Expr<'a>)> {
        self.exprs.iter().enumerate().map(|(i, e)| (Idx(i), e))
    }

    /// Folds the arena bottom-up, from the leaves to the root.
    pub fn collapse<R, F>(&self, mut collapse: F) -> R
    where
        F: FnMut(Expr<'a, R>) -> R,
    {
        let mut results: Vec<Option<R>> = std::iter::repeat_with(|| None).take(self.exprs.len()).collect();

        for (i, expr) in self.exprs.iter().enumerate().rev() {
            let expr = expr.fmap_ref(|idx| results[idx.0].take().expect("child is folded before its parent"));
            results[i] = Some(collapse(expr));
        }

        results
            .into_iter()
            .next()
            .flatten()
            .expect("arena always holds a root")
    }

    /// Rebuilds the owned tree.
    pub fn to_node(&self) -> Node {
        self.collapse(|expr| match expr {
            Expr::Identifier(name) => Node::identifier(name),
            Expr::Not(a) => Node::not(a),
            Expr::And(a, b) => Node::and(a, b),
            Expr::Or(a, b) => Node::or(a, b),
        })
    }
}
