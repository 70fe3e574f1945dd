use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vc_br::graph::Graph;
use vc_br::types::{Config, IN_COVER};
use vc_br::Solver;

fn solve(g: Graph) -> (usize, Vec<i8>) {
    let solver = Solver::new(g, Config::default());
    let (_, value, assignment, _) = solver.solve();
    (value, assignment)
}

fn is_valid_cover(g: &Graph, assignment: &[i8]) -> bool {
    for u in 0..g.n() {
        for &v in &g.adj[u] {
            if assignment[u] != IN_COVER && assignment[v] != IN_COVER {
                return false;
            }
        }
    }
    true
}

fn brute_force_min_cover(g: &Graph) -> usize {
    let n = g.n();
    assert!(n <= 20, "brute force is only for small graphs");
    let mut best = n;
    for mask in 0u32..(1u32 << n) {
        let size = mask.count_ones() as usize;
        if size >= best {
            continue;
        }
        let covers = (0..n).all(|u| {
            g.adj[u]
                .iter()
                .all(|&v| (mask >> u) & 1 == 1 || (mask >> v) & 1 == 1)
        });
        if covers {
            best = size;
        }
    }
    best
}

// ── small fixed instances ───────────────────────────────────────────────

#[test]
fn single_edge_needs_one_vertex() {
    let mut g = Graph::with_n(2);
    g.add_edge(0, 1);
    let (value, assignment) = solve(g.clone());
    assert_eq!(value, 1);
    assert!(is_valid_cover(&g, &assignment));
}

#[test]
fn triangle_needs_two_vertices() {
    let mut g = Graph::with_n(3);
    g.add_edge(0, 1);
    g.add_edge(1, 2);
    g.add_edge(2, 0);
    let (value, assignment) = solve(g.clone());
    assert_eq!(value, 2);
    assert!(is_valid_cover(&g, &assignment));
}

#[test]
fn path_of_four_needs_two_vertices() {
    // P4: 0-1-2-3. Optimal cover: {1, 2}.
    let mut g = Graph::with_n(4);
    g.add_edge(0, 1);
    g.add_edge(1, 2);
    g.add_edge(2, 3);
    let (value, assignment) = solve(g.clone());
    assert_eq!(value, 2);
    assert!(is_valid_cover(&g, &assignment));
}

#[test]
fn complete_bipartite_k33_needs_three_vertices() {
    let mut g = Graph::with_n(6);
    for u in 0..3 {
        for v in 3..6 {
            g.add_edge(u, v);
        }
    }
    let (value, assignment) = solve(g.clone());
    assert_eq!(value, 3);
    assert!(is_valid_cover(&g, &assignment));
}

#[test]
fn five_cycle_needs_three_vertices() {
    let mut g = Graph::with_n(5);
    for i in 0..5 {
        g.add_edge(i, (i + 1) % 5);
    }
    let (value, assignment) = solve(g.clone());
    assert_eq!(value, 3);
    assert!(is_valid_cover(&g, &assignment));
}

#[test]
fn petersen_graph_needs_six_vertices() {
    // Outer 5-cycle 0-4, inner 5-cycle (pentagram) 5-9, spokes i -- i+5.
    let mut g = Graph::with_n(10);
    for i in 0..5 {
        g.add_edge(i, (i + 1) % 5);
        g.add_edge(i, i + 5);
        g.add_edge(i + 5, (i + 2) % 5 + 5);
    }
    let (value, assignment) = solve(g.clone());
    assert_eq!(value, 6);
    assert!(is_valid_cover(&g, &assignment));
}

#[test]
fn disconnected_graph_sums_components() {
    // A triangle (cover 2) plus a disjoint edge (cover 1) plus an isolated
    // vertex (cover 0): 3 total, exercising component decomposition.
    let mut g = Graph::with_n(6);
    g.add_edge(0, 1);
    g.add_edge(1, 2);
    g.add_edge(2, 0);
    g.add_edge(3, 4);
    let (value, assignment) = solve(g.clone());
    assert_eq!(value, 3);
    assert!(is_valid_cover(&g, &assignment));
}

// ── randomized cross-check against brute force ──────────────────────────

fn random_graph(rng: &mut StdRng, n: usize, p: f64) -> Graph {
    let mut g = Graph::with_n(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen::<f64>() < p {
                g.add_edge(u, v);
            }
        }
    }
    g
}

#[test]
fn random_small_graphs_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for trial in 0..40 {
        let n = 4 + (trial % 9);
        let p = 0.15 + 0.6 * ((trial % 5) as f64 / 4.0);
        let g = random_graph(&mut rng, n, p);

        let expected = brute_force_min_cover(&g);
        let (value, assignment) = solve(g.clone());

        assert_eq!(value, expected, "mismatch on trial {} (n={}, p={})", trial, n, p);
        assert!(is_valid_cover(&g, &assignment), "invalid cover on trial {}", trial);
    }
}

#[test]
fn branch_rules_agree_on_random_graphs() {
    use vc_br::types::BranchRule;

    let mut rng = StdRng::seed_from_u64(0xc0ffee);
    for trial in 0..15 {
        let n = 5 + (trial % 7);
        let g = random_graph(&mut rng, n, 0.35);
        let expected = brute_force_min_cover(&g);

        for rule in [BranchRule::MinDegree, BranchRule::MaxDegree, BranchRule::Random] {
            let mut config = Config::default();
            config.branch_rule = rule;
            config.seed = trial as u64;
            let solver = Solver::new(g.clone(), config);
            let (_, value, assignment, _) = solver.solve();
            assert_eq!(value, expected, "rule {:?} mismatch on trial {}", rule, trial);
            assert!(is_valid_cover(&g, &assignment));
        }
    }
}
