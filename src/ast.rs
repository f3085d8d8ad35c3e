//! Abstract syntax tree for regular expressions

use crate::symbol::Symbol;
use core::fmt;
use core::mem;

/// The node types of a regular expression.
/// There is no empty-language node: an automaton accepting nothing has no
/// regex, which `to_regex` reports as a synthesis failure.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Regex {
    /// Match exactly one symbol, or the empty word if the symbol is epsilon.
    Symbol(Symbol),

    /// Match the left expression followed by the right one.
    Concat(Box<Regex>, Box<Regex>),

    /// Match an alternation like a|b.
    Alt(Box<Regex>, Box<Regex>),

    /// Match zero or more repetitions.
    Star(Box<Regex>),
}

impl Regex {
    /// A leaf matching \p symbol.
    #[inline]
    pub fn symbol<S: Into<Symbol>>(symbol: S) -> Regex {
        Regex::Symbol(symbol.into())
    }

    /// A leaf matching the empty word.
    #[inline]
    pub fn empty() -> Regex {
        Regex::Symbol(Symbol::epsilon())
    }

    #[inline]
    pub fn concat(left: Regex, right: Regex) -> Regex {
        Regex::Concat(Box::new(left), Box::new(right))
    }

    #[inline]
    pub fn alt(left: Regex, right: Regex) -> Regex {
        Regex::Alt(Box::new(left), Box::new(right))
    }

    #[inline]
    pub fn star(inner: Regex) -> Regex {
        Regex::Star(Box::new(inner))
    }

    /// \return whether this is the empty-word leaf.
    pub fn is_empty(&self) -> bool {
        matches!(self, Regex::Symbol(s) if s.is_epsilon())
    }

    /// \return whether this is a leaf.
    pub fn is_symbol(&self) -> bool {
        matches!(self, Regex::Symbol(..))
    }

    /// Move the node out, leaving the empty-word leaf in its place.
    pub fn take(&mut self) -> Regex {
        mem::replace(self, Regex::empty())
    }

    /// \return the binding strength of this node's outermost operator.
    fn precedence(&self) -> u8 {
        match self {
            Regex::Alt(..) => 0,
            Regex::Concat(..) => 1,
            Regex::Star(..) => 2,
            Regex::Symbol(..) => 3,
        }
    }

    /// \return a tree rendering, one node per line, children indented.
    pub fn to_tree_string(&self) -> String {
        let mut result = String::new();
        walk(false, self, &mut |node: &Regex, w: &mut Walk| {
            for _ in 0..w.depth {
                result.push_str("..");
            }
            match node {
                Regex::Symbol(s) if s.is_epsilon() => result.push_str("Empty"),
                Regex::Symbol(s) => {
                    result.push_str("Symbol ");
                    result.push_str(s.as_str());
                }
                Regex::Concat(..) => result.push_str("Concat"),
                Regex::Alt(..) => result.push_str("Alt"),
                Regex::Star(..) => result.push_str("Star"),
            }
            result.push('\n');
        });
        result
    }
}

/// A helper type for walking.
#[derive(Debug, Clone, Default)]
pub struct Walk {
    // If set to true, skip the children of this node.
    pub skip_children: bool,

    // The current depth of the walk.
    pub depth: usize,
}

struct Walker<'a, F>
where
    F: FnMut(&Regex, &mut Walk),
{
    func: &'a mut F,
    postorder: bool,
    walk: Walk,
}

impl<F> Walker<'_, F>
where
    F: FnMut(&Regex, &mut Walk),
{
    fn process_children(&mut self, n: &Regex) {
        match n {
            Regex::Symbol(..) => {}
            Regex::Concat(left, right) | Regex::Alt(left, right) => {
                self.process(left);
                self.process(right);
            }
            Regex::Star(inner) => self.process(inner),
        }
    }

    fn process(&mut self, n: &Regex) {
        self.walk.skip_children = false;
        if !self.postorder {
            (self.func)(n, &mut self.walk);
        }
        if !self.walk.skip_children {
            self.walk.depth += 1;
            self.process_children(n);
            self.walk.depth -= 1;
        }
        if self.postorder {
            (self.func)(n, &mut self.walk)
        }
    }
}

struct MutWalker<'a, F>
where
    F: FnMut(&mut Regex, &mut Walk),
{
    func: &'a mut F,
    postorder: bool,
    walk: Walk,
}

impl<F> MutWalker<'_, F>
where
    F: FnMut(&mut Regex, &mut Walk),
{
    fn process_children(&mut self, n: &mut Regex) {
        match n {
            Regex::Symbol(..) => {}
            Regex::Concat(left, right) | Regex::Alt(left, right) => {
                self.process(left);
                self.process(right);
            }
            Regex::Star(inner) => self.process(inner),
        }
    }

    fn process(&mut self, n: &mut Regex) {
        self.walk.skip_children = false;
        if !self.postorder {
            (self.func)(n, &mut self.walk);
        }
        if !self.walk.skip_children {
            self.walk.depth += 1;
            self.process_children(n);
            self.walk.depth -= 1;
        }
        if self.postorder {
            (self.func)(n, &mut self.walk);
        }
    }
}

/// Call a function on every node.
/// If \p postorder is true, then process children before the node;
/// otherwise process children after the node.
pub fn walk<F>(postorder: bool, n: &Regex, func: &mut F)
where
    F: FnMut(&Regex, &mut Walk),
{
    let mut walker = Walker {
        func,
        postorder,
        walk: Walk::default(),
    };
    walker.process(n);
}

/// Call a function on every node, which may mutate the node.
/// If \p postorder is true, then process children before the node;
/// otherwise process children after the node. A preorder function may set
/// `skip_children` to avoid descending.
pub fn walk_mut<F>(postorder: bool, n: &mut Regex, func: &mut F)
where
    F: FnMut(&mut Regex, &mut Walk),
{
    let mut walker = MutWalker {
        func,
        postorder,
        walk: Walk::default(),
    };
    walker.process(n);
}

/// Characters which must be escaped when printed as a one-character symbol.
pub(crate) const SPECIAL_CHARS: &[char] = &['(', ')', '|', '*', '{', '}', '\\', '&'];

/// Characters which must be escaped inside a braced token.
pub(crate) const BRACED_SPECIAL_CHARS: &[char] = &['}', '\\'];

fn display_symbol(s: &Symbol, f: &mut fmt::Formatter) -> fmt::Result {
    let text = s.as_str();
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if SPECIAL_CHARS.contains(&c) || c.is_whitespace() => {
            write!(f, "\\{}", c)
        }
        (Some(_), None) => f.write_str(text),
        // Multi-character tokens are braced so they reparse as one symbol.
        _ => {
            f.write_str("{")?;
            for c in text.chars() {
                if BRACED_SPECIAL_CHARS.contains(&c) {
                    f.write_str("\\")?;
                }
                write!(f, "{}", c)?;
            }
            f.write_str("}")
        }
    }
}

/// Print \p node, parenthesized if it binds more loosely than \p min_prec.
fn display_node(node: &Regex, min_prec: u8, f: &mut fmt::Formatter) -> fmt::Result {
    let parens = node.precedence() < min_prec;
    if parens {
        f.write_str("(")?;
    }
    match node {
        Regex::Symbol(s) => display_symbol(s, f)?,
        Regex::Concat(left, right) => {
            display_node(left, 1, f)?;
            display_node(right, 1, f)?;
        }
        Regex::Alt(left, right) => {
            display_node(left, 0, f)?;
            f.write_str("|")?;
            display_node(right, 0, f)?;
        }
        Regex::Star(inner) => {
            display_node(inner, 2, f)?;
            f.write_str("*")?;
        }
    }
    if parens {
        f.write_str(")")?;
    }
    Ok(())
}

/// Minimally parenthesized rendering: star binds tighter than concatenation,
/// which binds tighter than alternation.
impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        display_node(self, 0, f)
    }
}
