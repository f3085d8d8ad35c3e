//! Algebraic simplification of regex ASTs

use crate::ast::{walk_mut, Regex, Walk};

/// Things that a Pass may do.
pub enum PassAction {
    // Do nothing to the given node.
    Keep,

    // Notes that we modified the node in-place.
    Modified,

    /// Replace the given node with a new node.
    Replace(Regex),
}

struct Pass<'a, F>
where
    F: FnMut(&mut Regex) -> PassAction,
{
    // The function.
    func: &'a mut F,

    // Whether this pass has changed anything.
    changed: bool,
}

impl<'a, F> Pass<'a, F>
where
    F: FnMut(&mut Regex) -> PassAction,
{
    fn new(func: &'a mut F) -> Self {
        Pass {
            func,
            changed: false,
        }
    }

    fn run_postorder(&mut self, start: &mut Regex) {
        walk_mut(true, start, &mut |n: &mut Regex, _walk: &mut Walk| {
            match (self.func)(n) {
                PassAction::Keep => {}
                PassAction::Modified => {
                    self.changed = true;
                }
                PassAction::Replace(newnode) => {
                    *n = newnode;
                    self.changed = true;
                }
            }
        })
    }

    fn run_to_fixpoint(&mut self, n: &mut Regex) {
        debug_assert!(!self.changed, "Pass has already been run");
        loop {
            self.changed = false;
            self.run_postorder(n);
            if !self.changed {
                break;
            }
        }
    }
}

/// Run a pass to a fixpoint. \return true if something changed.
fn run_pass<F>(r: &mut Regex, func: &mut F) -> bool
where
    F: FnMut(&mut Regex) -> PassAction,
{
    let mut p = Pass::new(func);
    p.run_to_fixpoint(r);
    p.changed
}

// &x    -> x
// x&    -> x
// (xy)z -> x(yz)
fn simplify_concat(n: &mut Regex) -> PassAction {
    let Regex::Concat(left, right) = n else {
        return PassAction::Keep;
    };
    if left.is_empty() {
        return PassAction::Replace(right.take());
    }
    if right.is_empty() {
        return PassAction::Replace(left.take());
    }
    if let Regex::Concat(a, b) = left.as_mut() {
        let (a, b) = (a.take(), b.take());
        return PassAction::Replace(Regex::concat(a, Regex::concat(b, right.take())));
    }
    PassAction::Keep
}

// x|x             -> x
// (x|y)|z         -> x|(y|z)
// b|a             -> a|b      (leaves only)
// x|(x|y)         -> x|y
fn simplify_alt(n: &mut Regex) -> PassAction {
    let Regex::Alt(left, right) = n else {
        return PassAction::Keep;
    };
    if left == right {
        return PassAction::Replace(left.take());
    }
    if let Regex::Alt(a, b) = left.as_mut() {
        let (a, b) = (a.take(), b.take());
        return PassAction::Replace(Regex::alt(a, Regex::alt(b, right.take())));
    }
    let out_of_order = match (&**left, &**right) {
        (Regex::Symbol(l), Regex::Symbol(r)) => r < l,
        _ => false,
    };
    if out_of_order {
        core::mem::swap(left, right);
        return PassAction::Modified;
    }
    if let Regex::Alt(x, y) = right.as_mut() {
        if x == left {
            return PassAction::Replace(Regex::alt(left.take(), y.take()));
        }
    }
    PassAction::Keep
}

// &*  -> &
// x** -> x*
fn simplify_star(n: &mut Regex) -> PassAction {
    let Regex::Star(inner) = n else {
        return PassAction::Keep;
    };
    if inner.is_empty() {
        return PassAction::Replace(Regex::empty());
    }
    if let Regex::Star(innermost) = inner.as_mut() {
        return PassAction::Replace(Regex::star(innermost.take()));
    }
    PassAction::Keep
}

fn simplify_node(n: &mut Regex) -> PassAction {
    match n {
        Regex::Symbol(..) => PassAction::Keep,
        Regex::Concat(..) => simplify_concat(n),
        Regex::Alt(..) => simplify_alt(n),
        Regex::Star(..) => simplify_star(n),
    }
}

/// Simplify a regex in place, rewriting bottom-up until nothing changes.
/// \return true if something changed.
pub fn simplify_in_place(r: &mut Regex) -> bool {
    run_pass(r, &mut simplify_node)
}

/// \return the simplified form of \p r.
pub fn simplify(mut r: Regex) -> Regex {
    simplify_in_place(&mut r);
    r
}
