//! The recursive branch-and-reduce driver.
//!
//! `Solver` owns every piece of mutable search state: the residual graph,
//! the assignment vector, the two undo stacks (plain vertex fixes via
//! `restore_stack`, folds/alternatives via `ModStack`), the packing-
//! constraint store, the bipartite matching used by the LP machinery, and
//! the running best solution. `rec()` is the single recursive entry point:
//! check the deadline, reduce to a fixed point, prune against a lower
//! bound, try to split into components, otherwise branch.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::component;
use crate::branch;
use crate::graph::Graph;
use crate::intset::FastSet;
use crate::lowerbound;
use crate::matching::Matching;
use crate::modstack::ModStack;
use crate::packing::PackingStore;
use crate::reductions;
use crate::types::{Config, Status, Stats, IN_COVER, UNDECIDED};

pub struct Solver {
    pub graph: Graph,
    pub s: Vec<i8>,
    pub current_value: usize,
    pub remaining_vertices: usize,
    pub restore_stack: Vec<isize>,
    pub mods: ModStack,
    pub packing: PackingStore,
    pub matching: Matching,
    pub active: FastSet,
    pub config: Config,
    pub stats: Stats,
    pub deadline: Option<Instant>,
    pub start_n: usize,
    pub rng: StdRng,
    pub status: Status,
    pub optimal_value: usize,
    pub optimal_solution: Vec<i8>,
}

impl Solver {
    pub fn new(graph: Graph, config: Config) -> Self {
        let n = graph.n();
        let deadline = config.timeout.map(|d| Instant::now() + d);
        let mut active = FastSet::new(n);
        for v in 0..n {
            active.add(v);
        }
        Solver {
            s: vec![UNDECIDED; n],
            matching: Matching::new(n),
            graph,
            current_value: 0,
            remaining_vertices: n,
            restore_stack: Vec::new(),
            mods: ModStack::new(),
            packing: PackingStore::new(),
            active,
            rng: StdRng::seed_from_u64(config.seed),
            status: Status::Normal,
            optimal_value: n + 1,
            optimal_solution: vec![UNDECIDED; n],
            start_n: n,
            deadline,
            config,
            stats: Stats::default(),
        }
    }

    pub fn n(&self) -> usize {
        self.s.len()
    }

    pub fn timed_out(&self) -> bool {
        matches!(self.deadline, Some(d) if Instant::now() >= d)
    }

    pub fn checkpoint(&self) -> usize {
        self.restore_stack.len()
    }

    fn grow_scratch(&mut self) {
        let n = self.n();
        self.active.resize(n);
        self.matching.resize(n);
    }

    /// Fix a single undecided vertex to IN_SET or IN_COVER.
    pub fn fix(&mut self, v: usize, value: i8) {
        debug_assert_eq!(self.s[v], UNDECIDED);
        self.s[v] = value;
        if value == IN_COVER {
            self.current_value += 1;
        }
        self.remaining_vertices -= 1;
        self.active.remove(v);
        self.matching.unmatch_vertex(v);
        self.restore_stack.push(v as isize);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn fold(
        &mut self,
        removed: Vec<usize>,
        same: Vec<usize>,
        opposite: Vec<usize>,
        new_neighbors: &[usize],
        add: usize,
    ) -> usize {
        for &v in &removed {
            self.matching.unmatch_vertex(v);
            self.active.remove(v);
        }
        let rep = self.mods.push_fold(
            &mut self.graph,
            &mut self.s,
            &mut self.current_value,
            &mut self.remaining_vertices,
            removed,
            same,
            opposite,
            new_neighbors,
            add,
        );
        self.grow_scratch();
        self.active.add(rep);
        self.restore_stack.push(-1);
        rep
    }

    #[allow(clippy::too_many_arguments)]
    pub fn alternative(
        &mut self,
        group_a: Vec<usize>,
        group_b: Vec<usize>,
        ext_a: &[usize],
        ext_b: &[usize],
        add: usize,
    ) -> (usize, usize) {
        for &v in group_a.iter().chain(group_b.iter()) {
            self.matching.unmatch_vertex(v);
            self.active.remove(v);
        }
        let (ra, rb) = self.mods.push_alternative(
            &mut self.graph,
            &mut self.s,
            &mut self.current_value,
            &mut self.remaining_vertices,
            group_a,
            group_b,
            ext_a,
            ext_b,
            add,
        );
        self.grow_scratch();
        self.active.add(ra);
        self.active.add(rb);
        self.restore_stack.push(-1);
        (ra, rb)
    }

    pub fn push_packing(&mut self, bound: usize, members: Vec<usize>) {
        self.packing.push(bound, members);
    }

    /// Undo everything pushed since `mark` (vertex fixes and
    /// folds/alternatives, LIFO, interleaved in the order they happened).
    pub fn restore_to(&mut self, mark: usize) {
        while self.restore_stack.len() > mark {
            match self.restore_stack.pop().unwrap() {
                -1 => {
                    if let Some(effect) = self.mods.pop(
                        &mut self.graph,
                        &mut self.s,
                        &mut self.current_value,
                        &mut self.remaining_vertices,
                    ) {
                        for v in effect.restored {
                            self.active.add(v);
                        }
                        for v in effect.dead {
                            self.active.remove(v);
                            self.matching.unmatch_vertex(v);
                        }
                    }
                }
                raw => {
                    let v = raw as usize;
                    if self.s[v] == IN_COVER {
                        self.current_value -= 1;
                    }
                    self.s[v] = UNDECIDED;
                    self.remaining_vertices += 1;
                    self.active.add(v);
                }
            }
        }
    }

    /// Run the solver to completion, returning the final status, the
    /// minimum cover size, the original-indexed assignment, and the
    /// accumulated statistics.
    pub fn solve(mut self) -> (Status, usize, Vec<i8>, Stats) {
        self.rec();
        if self.status == Status::Normal && self.optimal_value > self.n() {
            // No feasible leaf was ever reached (shouldn't happen on a
            // finite graph short of a timeout cutting the very first call
            // off, but keep the report honest either way).
            self.status = Status::Timeout;
        }
        (self.status, self.optimal_value, self.optimal_solution, self.stats)
    }

    fn accept_if_better(&mut self, total: usize, mut snapshot: Vec<i8>) {
        if total < self.optimal_value {
            self.optimal_value = total;
            self.mods.reverse(&mut snapshot);
            self.optimal_solution = snapshot;
        }
        self.stats.num_leftcuts += 1;
    }

    pub fn rec(&mut self) {
        if self.timed_out() {
            self.status = Status::Timeout;
            return;
        }

        let mark = self.checkpoint();
        let packing_mark = self.packing.len();
        let is_root = mark == 0;

        if !reductions::run(self, is_root) {
            self.restore_to(mark);
            self.packing.truncate(packing_mark);
            return;
        }

        if self.remaining_vertices == 0 {
            self.accept_if_better(self.current_value, self.s.clone());
            self.restore_to(mark);
            self.packing.truncate(packing_mark);
            return;
        }

        let lb = lowerbound::best(self);
        if is_root {
            self.stats.root_lb = lb;
        }
        if self.current_value + lb >= self.optimal_value {
            self.restore_to(mark);
            self.packing.truncate(packing_mark);
            return;
        }

        if let Some((extra, snapshot)) = component::decompose(self) {
            self.accept_if_better(self.current_value + extra, snapshot);
            self.restore_to(mark);
            self.packing.truncate(packing_mark);
            return;
        }

        branch::branch(self);

        self.restore_to(mark);
        self.packing.truncate(packing_mark);
        if self.timed_out() {
            self.status = Status::Timeout;
        }
    }
}

pub fn deadline_from(secs: Option<f64>) -> Option<Duration> {
    secs.map(Duration::from_secs_f64)
}
