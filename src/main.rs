use std::process;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};

use vc_br::parser::load_graph;
use vc_br::report;
use vc_br::solver::Solver;
use vc_br::types::{BranchRule, Config, RunMode, Solution};

#[derive(Clone, Copy, ValueEnum)]
enum BranchRuleArg {
    Random,
    Mindegree,
    Maxdegree,
}

impl From<BranchRuleArg> for BranchRule {
    fn from(a: BranchRuleArg) -> Self {
        match a {
            BranchRuleArg::Random => BranchRule::Random,
            BranchRuleArg::Mindegree => BranchRule::MinDegree,
            BranchRuleArg::Maxdegree => BranchRule::MaxDegree,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    All,
    OnlyRoot,
}

impl From<ModeArg> for RunMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::All => RunMode::All,
            ModeArg::OnlyRoot => RunMode::OnlyRoot,
        }
    }
}

#[derive(Parser)]
#[command(about = "Exact minimum vertex cover via branch-and-reduce")]
struct Cli {
    /// Graph file: SNAP-style edge list, or DIMACS ('p edge N M' / 'e u v')
    graph_file: String,

    /// Branching rule used once the reduction suite reaches a fixed point
    #[arg(long, value_enum, default_value_t = BranchRuleArg::Maxdegree)]
    branch_rule: BranchRuleArg,

    /// Reduction depth: full suite every call, or only at the root
    #[arg(long, value_enum, default_value_t = ModeArg::All)]
    mode: ModeArg,

    /// Wall-clock budget in seconds; the search stops at the best cover
    /// found so far and reports Timeout instead of Normal
    #[arg(long)]
    timeout: Option<f64>,

    /// Print the reduction/lower-bound statistics table
    #[arg(short, long)]
    verbose: bool,

    /// Print a one-character-per-vertex solution line after the stats
    #[arg(short, long)]
    solution: bool,

    /// Seed for the random-tie-break RNG (branch rule 'random', mirror search)
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,

    /// Disable the clique-cover lower bound
    #[arg(long)]
    no_clique_lb: bool,

    /// Disable the LP/Nemhauser-Trotter lower bound (and the cycle bound,
    /// which depends on it)
    #[arg(long)]
    no_lp_lb: bool,

    /// Disable the odd-cycle refinement of the LP lower bound
    #[arg(long)]
    no_cycle_lb: bool,

    /// Disable propagation of packing constraints derived while branching
    #[arg(long)]
    no_packing: bool,
}

fn build_config(cli: &Cli) -> Config {
    let config = Config {
        branch_rule: cli.branch_rule.into(),
        mode: cli.mode.into(),
        timeout: cli.timeout.map(Duration::from_secs_f64),
        verbose: cli.verbose,
        want_solution: cli.solution,
        seed: cli.seed,
        enable_clique_lb: !cli.no_clique_lb,
        enable_lp_lb: !cli.no_lp_lb,
        enable_cycle_lb: !cli.no_cycle_lb && !cli.no_lp_lb,
        enable_packing: !cli.no_packing,
        ..Config::default()
    };
    config
}

fn main() {
    let cli = Cli::parse();
    let config = build_config(&cli);

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let instance = load_graph(&cli.graph_file).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", cli.graph_file, e);
        process::exit(1);
    });

    let max_external_id = instance.vertex_id.iter().copied().max().unwrap_or(0);
    let n = instance.graph.n();

    let start = Instant::now();
    let solver = Solver::new(instance.graph, config.clone());
    let (status, value, assignment, stats) = solver.solve();
    let runtime = start.elapsed();

    let mut full_assignment = vec![None; max_external_id + 1];
    for (internal, &external) in instance.vertex_id.iter().enumerate().take(n) {
        full_assignment[external] = Some(assignment[internal]);
    }

    let solution = Solution {
        status,
        value,
        runtime,
        root_lb: stats.root_lb,
        stats,
        assignment: full_assignment,
    };

    report::print(&solution, config.verbose, config.want_solution);
    process::exit(solution.status.exit_code());
}
