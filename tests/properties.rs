//! Property tests over random graphs.

use proptest::prelude::*;
use rand::seq::SliceRandom;
use u_capclust::cluster::{score, Cluster, Clustering};
use u_capclust::graph::{Bounds, GraphModel};
use u_capclust::greedy::GreedyBuilder;
use u_capclust::local::LocalSearchRunner;
use u_capclust::perturb::SwapPerturbation;
use u_capclust::problem::ClusteringProblem;
use u_capclust::random::create_rng;
use u_capclust::sa::{SaConfig, SaRunner};

#[derive(Debug, Clone)]
struct Instance {
    graph: GraphModel,
    bounds: Bounds,
    k: usize,
}

fn instance() -> impl Strategy<Value = Instance> {
    (1usize..10, 1usize..4).prop_flat_map(|(n, k)| {
        (
            prop::collection::vec(0u64..20, n),
            prop::collection::vec((0..n, 0..n, 0u64..15), 0..(n * n)),
            0u64..25,
            0u64..60,
            Just(k),
        )
            .prop_map(|(weights, edges, lower, upper, k)| {
                let mut builder = GraphModel::builder();
                for (i, w) in weights.iter().enumerate() {
                    builder = builder.add_node(format!("n{i}"), *w);
                }
                for (a, b, w) in edges {
                    builder = builder.add_edge(format!("n{a}"), format!("n{b}"), w);
                }
                Instance {
                    graph: builder.build(),
                    bounds: Bounds { lower, upper },
                    k,
                }
            })
    })
}

proptest! {
    #[test]
    fn greedy_is_deterministic(inst in instance()) {
        let builder = GreedyBuilder::new(inst.k);
        prop_assert_eq!(
            builder.build(&inst.graph, inst.bounds),
            builder.build(&inst.graph, inst.bounds)
        );
    }

    #[test]
    fn greedy_conserves_weight_partially(inst in instance()) {
        let out = GreedyBuilder::new(inst.k).build(&inst.graph, inst.bounds);
        let assigned: u64 = inst.graph.cluster_weights(&out.clustering).iter().sum();
        let total = inst.graph.total_weight();

        prop_assert!(assigned <= total);
        prop_assert_eq!(out.clustering.assigned_count() + out.unassigned.len(), inst.graph.node_count());
        if out.is_complete() {
            prop_assert_eq!(assigned, total);
        } else if out.unassigned.iter().any(|id| inst.graph.node_weight(id) > 0) {
            prop_assert!(assigned < total);
        }
    }

    #[test]
    fn greedy_clusters_respect_bounds_unless_singleton(inst in instance()) {
        let out = GreedyBuilder::new(inst.k).build(&inst.graph, inst.bounds);
        for cluster in out.clustering.clusters() {
            let w = inst.graph.cluster_weight(cluster);
            prop_assert!(w <= inst.bounds.upper || cluster.is_empty());
            // Only the first node of a cluster may skip the lower bound.
            if cluster.len() > 1 {
                prop_assert!(w >= inst.bounds.lower);
            }
        }
    }

    #[test]
    fn perturbation_is_feasible_or_unchanged(inst in instance(), seed in any::<u64>()) {
        let op = SwapPerturbation::new(&inst.graph, inst.bounds);
        let mut rng = create_rng(seed);
        let mut current = GreedyBuilder::new(inst.k).build(&inst.graph, inst.bounds).clustering;

        for _ in 0..30 {
            let next = op.apply(&current, &mut rng);
            prop_assert!(next == current || inst.graph.is_feasible(&next, inst.bounds));
            prop_assert_eq!(next.assigned_count(), current.assigned_count());
            current = next;
        }
    }

    #[test]
    fn local_search_never_regresses(inst in instance(), seed in any::<u64>(), iters in 0usize..60) {
        let problem = ClusteringProblem::new(&inst.graph, inst.bounds);
        let initial = GreedyBuilder::new(inst.k).build(&inst.graph, inst.bounds).clustering;
        let initial_score = score(&inst.graph, &initial);

        let result = LocalSearchRunner::run_with_rng(&problem, initial, iters, &mut create_rng(seed));

        prop_assert!(result.best_score >= initial_score);
        prop_assert_eq!(result.best_score, score(&inst.graph, &result.best));
        prop_assert_eq!(result.score_history.len(), iters + 1);
        for w in result.score_history.windows(2) {
            prop_assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn annealing_best_is_monotonic(inst in instance(), seed in any::<u64>(), iters in 0usize..60) {
        let problem = ClusteringProblem::new(&inst.graph, inst.bounds);
        let initial = GreedyBuilder::new(inst.k).build(&inst.graph, inst.bounds).clustering;
        let initial_score = score(&inst.graph, &initial);
        let config = SaConfig::default().with_max_iterations(iters);

        let result = SaRunner::run_with_rng(&problem, initial, &config, &mut create_rng(seed));

        prop_assert!(result.best_score >= initial_score);
        prop_assert!(result.best_score >= result.final_score);
        prop_assert_eq!(result.best_score, score(&inst.graph, &result.best));
        for w in result.score_history.windows(2) {
            prop_assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn score_ignores_member_and_cluster_order(inst in instance(), seed in any::<u64>()) {
        let clustering = GreedyBuilder::new(inst.k).build(&inst.graph, inst.bounds).clustering;
        let base = score(&inst.graph, &clustering);

        let mut rng = create_rng(seed);
        let mut clusters: Vec<Cluster> = clustering
            .clusters()
            .iter()
            .map(|c| {
                let mut members = c.members().to_vec();
                members.shuffle(&mut rng);
                Cluster::from_members(members)
            })
            .collect();
        clusters.shuffle(&mut rng);

        prop_assert_eq!(score(&inst.graph, &Clustering::from_clusters(clusters)), base);
    }
}
