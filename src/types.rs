use std::fmt;
use std::time::Duration;

// ============================================================================
// Assignment-vector constants and tuning knobs.
// ============================================================================

/// s[v] == UNDECIDED: v is still part of the residual graph.
pub const UNDECIDED: i8 = -1;
/// s[v] == IN_SET: v placed outside the cover (in the independent set).
pub const IN_SET: i8 = 0;
/// s[v] == IN_COVER: v placed inside the cover.
pub const IN_COVER: i8 = 1;
/// s[v] == FOLDED: v removed by a fold/alternative; resolved by Reverse().
pub const FOLDED: i8 = 2;

/// Residual-shrinkage ratio that triggers a component rescan even with a
/// single component, to keep sub-solvers data-local.
pub const SHRINK: f64 = 0.5;
/// Component respawn by shrinkage only applies to instances that started
/// at or above this many vertices.
pub const SHRINK_MIN_N: usize = 100;

// ============================================================================
// Status / exit codes
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Normal,
    Timeout,
    MemoryLimit,
    Exception,
}

impl Status {
    pub fn exit_code(self) -> i32 {
        match self {
            Status::Normal => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Normal => "Normal",
            Status::Timeout => "Timeout",
            Status::MemoryLimit => "MemoryLimit",
            Status::Exception => "Exception",
        };
        write!(f, "{}", s)
    }
}

// ============================================================================
// Error type
// ============================================================================

#[derive(Debug)]
pub enum VcError {
    Parse(String),
    Io(std::io::Error),
    Invariant(String),
}

impl fmt::Display for VcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VcError::Parse(msg) => write!(f, "parse error: {}", msg),
            VcError::Io(e) => write!(f, "I/O error: {}", e),
            VcError::Invariant(msg) => write!(f, "invariant violation: {}", msg),
        }
    }
}

impl std::error::Error for VcError {}

impl From<std::io::Error> for VcError {
    fn from(e: std::io::Error) -> Self {
        VcError::Io(e)
    }
}

// ============================================================================
// Branching rule
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchRule {
    Random,
    MinDegree,
    MaxDegree,
}

// ============================================================================
// Lower-bound type tags, recorded per call for statistics
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LbType {
    Trivial,
    Clique,
    Lp,
    Cycle,
}

impl fmt::Display for LbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LbType::Trivial => "trivial",
            LbType::Clique => "clique",
            LbType::Lp => "lp",
            LbType::Cycle => "cycle",
        };
        write!(f, "{}", s)
    }
}

// ============================================================================
// Run mode
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Run the full reduction suite at every recursive call.
    All,
    /// Run the full suite once at the root; afterwards only the cheap,
    /// always-safe reductions (deg1, fold2, packing) run during recursion.
    OnlyRoot,
}

// ============================================================================
// Configuration: a plain struct of enables/thresholds built once from CLI
// args and threaded by reference through the solver, rather than
// module-level statics.
// ============================================================================

#[derive(Clone, Debug)]
pub struct Config {
    // Reduction enables
    pub enable_deg1: bool,
    pub enable_dominance: bool,
    pub enable_fold2: bool,
    pub enable_lp: bool,
    pub enable_unconfined: bool,
    pub enable_twin: bool,
    pub enable_funnel: bool,
    pub enable_desk: bool,
    pub enable_packing: bool,

    // Lower bound enables
    pub enable_clique_lb: bool,
    pub enable_lp_lb: bool,
    pub enable_cycle_lb: bool,

    pub mode: RunMode,
    pub branch_rule: BranchRule,

    pub timeout: Option<Duration>,

    pub verbose: bool,
    pub want_solution: bool,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_deg1: true,
            enable_dominance: true,
            enable_fold2: true,
            enable_lp: true,
            enable_unconfined: true,
            enable_twin: true,
            enable_funnel: true,
            enable_desk: true,
            enable_packing: true,

            enable_clique_lb: true,
            enable_lp_lb: true,
            enable_cycle_lb: true,

            mode: RunMode::All,
            branch_rule: BranchRule::MaxDegree,

            timeout: None,

            verbose: false,
            want_solution: false,
            seed: 0x5eed,
        }
    }
}

impl Config {
    /// Reject configurations that enable the cycle bound without the LP
    /// reduction: the cycle bound reads out_flow[], which the LP reduction
    /// is what keeps meaningfully maintained.
    pub fn validate(&self) -> Result<(), VcError> {
        if self.enable_cycle_lb && !self.enable_lp {
            return Err(VcError::Invariant(
                "cycle lower bound requires the LP reduction to be enabled".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Per-reduction counters: count/calls/all_calls and accumulated time
// ============================================================================

#[derive(Clone, Copy, Debug, Default)]
pub struct ReductionCounters {
    /// Vertices removed/folded in calls that made progress.
    pub count: u64,
    /// Calls that made progress.
    pub calls: u64,
    /// Every call, whether or not it made progress.
    pub all_calls: u64,
    /// Accumulated wall-clock time in nanoseconds (rendered as ms).
    pub nanos: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReductionKind {
    #[default]
    Deg1,
    Dominance,
    Fold2,
    Lp,
    Unconfined,
    Twin,
    Funnel,
    Desk,
    Packing,
}

impl ReductionKind {
    pub const ALL: [ReductionKind; 9] = [
        ReductionKind::Deg1,
        ReductionKind::Dominance,
        ReductionKind::Fold2,
        ReductionKind::Lp,
        ReductionKind::Unconfined,
        ReductionKind::Twin,
        ReductionKind::Funnel,
        ReductionKind::Desk,
        ReductionKind::Packing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ReductionKind::Deg1 => "deg1",
            ReductionKind::Dominance => "dominance",
            ReductionKind::Fold2 => "fold2",
            ReductionKind::Lp => "lp",
            ReductionKind::Unconfined => "unconfined",
            ReductionKind::Twin => "twin",
            ReductionKind::Funnel => "funnel",
            ReductionKind::Desk => "desk",
            ReductionKind::Packing => "packing",
        }
    }
}

// ============================================================================
// Statistics; counters are merged back on sub-solver completion
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct Stats {
    pub num_branches: u64,
    pub num_leftcuts: u64,
    pub root_lb: usize,

    pub reductions: [ReductionCounters; 9],

    pub trivial_lb_count: u64,
    pub clique_lb_count: u64,
    pub lp_lb_count: u64,
    pub cycle_lb_count: u64,

    pub clique_lb_nanos: u64,
    pub cycle_lb_nanos: u64,
}

impl Stats {
    fn idx(kind: ReductionKind) -> usize {
        ReductionKind::ALL.iter().position(|&k| k == kind).unwrap()
    }

    pub fn reduction_mut(&mut self, kind: ReductionKind) -> &mut ReductionCounters {
        &mut self.reductions[Self::idx(kind)]
    }

    pub fn reduction(&self, kind: ReductionKind) -> ReductionCounters {
        self.reductions[Self::idx(kind)]
    }

    pub fn record_lb(&mut self, lb_type: LbType) {
        match lb_type {
            LbType::Trivial => self.trivial_lb_count += 1,
            LbType::Clique => self.clique_lb_count += 1,
            LbType::Lp => self.lp_lb_count += 1,
            LbType::Cycle => self.cycle_lb_count += 1,
        }
    }

    /// Fold a sub-solver's statistics into the parent's after component
    /// decomposition completes.
    pub fn merge(&mut self, other: &Stats) {
        self.num_branches += other.num_branches;
        self.num_leftcuts += other.num_leftcuts;
        for i in 0..self.reductions.len() {
            self.reductions[i].count += other.reductions[i].count;
            self.reductions[i].calls += other.reductions[i].calls;
            self.reductions[i].all_calls += other.reductions[i].all_calls;
            self.reductions[i].nanos += other.reductions[i].nanos;
        }
        self.trivial_lb_count += other.trivial_lb_count;
        self.clique_lb_count += other.clique_lb_count;
        self.lp_lb_count += other.lp_lb_count;
        self.cycle_lb_count += other.cycle_lb_count;
        self.clique_lb_nanos += other.clique_lb_nanos;
        self.cycle_lb_nanos += other.cycle_lb_nanos;
    }
}

// ============================================================================
// Final report
// ============================================================================

#[derive(Clone, Debug)]
pub struct Solution {
    pub status: Status,
    pub value: usize,
    pub runtime: Duration,
    pub root_lb: usize,
    pub stats: Stats,
    /// s[] restored to original-graph indexing; `None` entries correspond to
    /// vertices absent from the input (sparse external ids).
    pub assignment: Vec<Option<i8>>,
}
