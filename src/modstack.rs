//! Reversible graph transformations applied by folding reductions.
//!
//! A fold never literally deletes a vertex: it allocates a fresh
//! representative, rebinds the adjacency of whichever vertices gained or
//! lost an edge because of the contraction, and marks the contracted
//! vertices FOLDED. Undo replays the saved adjacency and un-folds them.
//! Once the whole graph is solved, `reverse()` walks the stack the other
//! way and assigns the FOLDED vertices their real 0/1 values from the
//! representative's solved value.
//!
//! Two shapes cover every reduction in this crate:
//!
//! - `Fold`: a single representative `rep`. Whichever value the solver
//!   gives `rep`, `same` copies it and `opposite` takes the complement.
//!   Used by fold2 (deg-2 folding): `same` is the far neighbor that
//!   shares `rep`'s fate, `opposite` is the folded degree-2 vertex itself.
//! - `Alternative`: two representatives `rep_a`/`rep_b` joined by an edge
//!   (so a cover must include at least one), each wired to the external
//!   neighborhood of its own side. `group_a`/`group_b` copy `rep_a`'s and
//!   `rep_b`'s value respectively. Used by funnel (`|group_a| =
//!   |group_b| = 1`) and desk (`|group_a| = |group_b| = 2`): reductions
//!   whose pattern has two symmetric alternatives of equal size, so the
//!   added cost is a fixed constant regardless of which side the solver
//!   picks.

use crate::graph::Graph;
use crate::types::{FOLDED, UNDECIDED};

#[derive(Clone, Debug)]
pub enum Modification {
    Fold {
        add: usize,
        removed: Vec<usize>,
        same: Vec<usize>,
        opposite: Vec<usize>,
        rep: usize,
        affected: Vec<(usize, Vec<usize>)>,
    },
    Alternative {
        add: usize,
        group_a: Vec<usize>,
        group_b: Vec<usize>,
        rep_a: usize,
        rep_b: usize,
        affected: Vec<(usize, Vec<usize>)>,
    },
}

/// What changed in `s`/`graph` when a modification was undone.
#[derive(Clone, Debug)]
pub struct PopEffect {
    pub restored: Vec<usize>,
    pub dead: Vec<usize>,
}

#[derive(Clone, Debug, Default)]
pub struct ModStack {
    stack: Vec<Modification>,
}

fn dedup_union(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    for &x in a.iter().chain(b.iter()) {
        if !out.contains(&x) {
            out.push(x);
        }
    }
    out
}

impl ModStack {
    pub fn new() -> Self {
        ModStack { stack: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Contract `removed` into a fresh vertex wired to `new_neighbors`.
    /// `same` receives the representative's solved value at `reverse()`
    /// time, `opposite` receives its complement. Returns the new vertex.
    #[allow(clippy::too_many_arguments)]
    pub fn push_fold(
        &mut self,
        graph: &mut Graph,
        s: &mut Vec<i8>,
        current_value: &mut usize,
        remaining_vertices: &mut usize,
        removed: Vec<usize>,
        same: Vec<usize>,
        opposite: Vec<usize>,
        new_neighbors: &[usize],
        add: usize,
    ) -> usize {
        let rep = graph.push_vertex();
        s.push(UNDECIDED);

        let mut affected = Vec::with_capacity(new_neighbors.len());
        for &x in new_neighbors {
            let old = graph.adj[x].clone();
            graph.adj[x].retain(|y| !removed.contains(y));
            graph.add_edge(rep, x);
            affected.push((x, old));
        }

        for &v in &removed {
            s[v] = FOLDED;
        }
        *current_value += add;
        *remaining_vertices = *remaining_vertices + 1 - removed.len();

        self.stack.push(Modification::Fold {
            add,
            removed,
            same,
            opposite,
            rep,
            affected,
        });
        rep
    }

    /// Contract `group_a`/`group_b` (equal size) into two representatives
    /// joined by an edge, each wired to its side's external neighborhood.
    /// At most one side is ever excluded from the cover (the edge forces
    /// it), which is exactly the "choose A or choose B" structure funnel
    /// and desk need. Returns `(rep_a, rep_b)`.
    #[allow(clippy::too_many_arguments)]
    pub fn push_alternative(
        &mut self,
        graph: &mut Graph,
        s: &mut Vec<i8>,
        current_value: &mut usize,
        remaining_vertices: &mut usize,
        group_a: Vec<usize>,
        group_b: Vec<usize>,
        ext_a: &[usize],
        ext_b: &[usize],
        add: usize,
    ) -> (usize, usize) {
        let rep_a = graph.push_vertex();
        s.push(UNDECIDED);
        let rep_b = graph.push_vertex();
        s.push(UNDECIDED);

        let removed = dedup_union(&group_a, &group_b);
        let touched = dedup_union(ext_a, ext_b);

        let mut affected = Vec::with_capacity(touched.len());
        for &x in &touched {
            let old = graph.adj[x].clone();
            graph.adj[x].retain(|y| !removed.contains(y));
            affected.push((x, old));
        }
        for &x in ext_a {
            graph.add_edge(rep_a, x);
        }
        for &x in ext_b {
            graph.add_edge(rep_b, x);
        }
        graph.add_edge(rep_a, rep_b);

        for &v in &removed {
            s[v] = FOLDED;
        }
        *current_value += add;
        *remaining_vertices = *remaining_vertices + 2 - removed.len();

        self.stack.push(Modification::Alternative {
            add,
            group_a,
            group_b,
            rep_a,
            rep_b,
            affected,
        });
        (rep_a, rep_b)
    }

    /// Undo the most recent modification. Returns `None` if the stack was
    /// empty, else the vertices that became UNDECIDED again and the
    /// representative(s) that are now dead, so the caller can update its
    /// own active-vertex bookkeeping (matching state, scratch sets).
    pub fn pop(
        &mut self,
        graph: &mut Graph,
        s: &mut Vec<i8>,
        current_value: &mut usize,
        remaining_vertices: &mut usize,
    ) -> Option<PopEffect> {
        let m = self.stack.pop()?;
        let effect = match m {
            Modification::Fold {
                add,
                removed,
                rep,
                affected,
                ..
            } => {
                *current_value -= add;
                *remaining_vertices = *remaining_vertices + removed.len() - 1;
                for &v in &removed {
                    s[v] = UNDECIDED;
                }
                for (x, old) in affected {
                    graph.adj[x] = old;
                }
                graph.adj[rep].clear();
                s[rep] = FOLDED;
                PopEffect {
                    restored: removed,
                    dead: vec![rep],
                }
            }
            Modification::Alternative {
                add,
                group_a,
                group_b,
                rep_a,
                rep_b,
                affected,
            } => {
                *current_value -= add;
                *remaining_vertices =
                    *remaining_vertices + group_a.len() + group_b.len() - 2;
                let mut restored = group_a;
                restored.extend(group_b);
                for &v in &restored {
                    s[v] = UNDECIDED;
                }
                for (x, old) in affected {
                    graph.adj[x] = old;
                }
                graph.adj[rep_a].clear();
                graph.adj[rep_b].clear();
                s[rep_a] = FOLDED;
                s[rep_b] = FOLDED;
                PopEffect {
                    restored,
                    dead: vec![rep_a, rep_b],
                }
            }
        };
        Some(effect)
    }

    /// Walk every modification on the stack, most recent first, and
    /// assign the folded-away vertices their real value in `s` from
    /// whatever the solver decided for the representative(s). Does not
    /// touch the stack itself.
    pub fn reverse(&self, s: &mut [i8]) {
        for m in self.stack.iter().rev() {
            match m {
                Modification::Fold {
                    same, opposite, rep, ..
                } => {
                    let rv = s[*rep];
                    for &v in same {
                        s[v] = rv;
                    }
                    for &v in opposite {
                        s[v] = 1 - rv;
                    }
                }
                Modification::Alternative {
                    group_a,
                    group_b,
                    rep_a,
                    rep_b,
                    ..
                } => {
                    let ra = s[*rep_a];
                    let rb = s[*rep_b];
                    for &v in group_a {
                        s[v] = ra;
                    }
                    for &v in group_b {
                        s[v] = rb;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_push_then_pop_restores_graph_and_counters() {
        let mut g = Graph::with_n(3);
        g.add_edge(0, 1); // v=0, u0=1
        g.add_edge(0, 2); // u1=2
        let before = g.clone();
        let mut s = vec![UNDECIDED; 3];
        let mut cv = 0usize;
        let mut rem = 3usize;
        let mut stack = ModStack::new();

        let rep = stack.push_fold(&mut g, &mut s, &mut cv, &mut rem, vec![0, 2], vec![2], vec![0], &[1], 1);
        assert_eq!(s[0], FOLDED);
        assert_eq!(s[2], FOLDED);
        assert_eq!(cv, 1);
        assert_eq!(rem, 2); // 3 - 2 removed + 1 rep
        assert!(g.has_edge(1, rep));

        assert!(stack.pop(&mut g, &mut s, &mut cv, &mut rem).is_some());
        assert_eq!(cv, 0);
        assert_eq!(rem, 3);
        assert_eq!(s[0], UNDECIDED);
        assert_eq!(s[2], UNDECIDED);
        assert_eq!(g.adj[1], before.adj[1]);
    }

    #[test]
    fn fold_reverse_assigns_same_and_opposite_from_rep() {
        let mut g = Graph::with_n(3);
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        let mut s = vec![UNDECIDED; 3];
        let mut cv = 0usize;
        let mut rem = 3usize;
        let mut stack = ModStack::new();
        let rep = stack.push_fold(&mut g, &mut s, &mut cv, &mut rem, vec![0, 2], vec![2], vec![0], &[1], 1);

        s[rep] = 1; // representative placed in the cover
        stack.reverse(&mut s);
        assert_eq!(s[2], 1); // same
        assert_eq!(s[0], 0); // opposite

        s[rep] = 0;
        stack.reverse(&mut s);
        assert_eq!(s[2], 0);
        assert_eq!(s[0], 1);
    }

    #[test]
    fn alternative_push_pop_round_trip() {
        let mut g = Graph::with_n(4);
        g.add_edge(0, 2); // v in A, external neighbor 2
        g.add_edge(1, 3); // u in B, external neighbor 3
        let before = g.clone();
        let mut s = vec![UNDECIDED; 4];
        let mut cv = 0usize;
        let mut rem = 4usize;
        let mut stack = ModStack::new();

        let (ra, rb) = stack.push_alternative(
            &mut g, &mut s, &mut cv, &mut rem,
            vec![0], vec![1], &[2], &[3], 1,
        );
        assert_eq!(cv, 1);
        assert_eq!(rem, 4); // 4 - 2 + 2
        assert!(g.has_edge(ra, rb));
        assert!(g.has_edge(ra, 2));
        assert!(g.has_edge(rb, 3));

        assert!(stack.pop(&mut g, &mut s, &mut cv, &mut rem).is_some());
        assert_eq!(cv, 0);
        assert_eq!(rem, 4);
        assert_eq!(g.adj[2], before.adj[2]);
        assert_eq!(g.adj[3], before.adj[3]);
    }

    #[test]
    fn alternative_reverse_assigns_each_group_from_its_rep() {
        let mut g = Graph::with_n(4);
        g.add_edge(0, 2);
        g.add_edge(1, 3);
        let mut s = vec![UNDECIDED; 4];
        let mut cv = 0usize;
        let mut rem = 4usize;
        let mut stack = ModStack::new();
        let (ra, rb) = stack.push_alternative(
            &mut g, &mut s, &mut cv, &mut rem,
            vec![0], vec![1], &[2], &[3], 1,
        );
        s[ra] = 1;
        s[rb] = 0;
        stack.reverse(&mut s);
        assert_eq!(s[0], 1);
        assert_eq!(s[1], 0);
    }
}
