mod common;

use norad_lib::{
    build_distance_graph, filter_reachable, reconstruct_path, shortest_paths, Edge, Graph,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use common::{square_catalog, triangle_catalog, CatalogBuilder};

#[test]
fn triangle_routes_around_the_long_side() {
    let graph = filter_reachable(&build_distance_graph(triangle_catalog().stars()), 29);
    let paths = shortest_paths(&graph, 1);

    let c = paths.get(3).expect("C reachable");
    assert_eq!(c.distance, 56.0);
    assert_eq!(c.predecessor, 2);
    assert_eq!(paths.predecessor(2), Some(1));
    assert_eq!(paths.distance_to(2), Some(32.0));
    assert_eq!(reconstruct_path(&paths, 3, 1), Some(vec![1, 2, 3]));
}

#[test]
fn destination_is_not_an_entry_but_has_zero_distance() {
    let graph = build_distance_graph(triangle_catalog().stars());
    let paths = shortest_paths(&graph, 2);

    assert!(paths.get(2).is_none());
    assert_eq!(paths.distance_to(2), Some(0.0));
    assert_eq!(paths.len(), 2);
}

#[test]
fn path_to_self_is_single_star() {
    let graph = build_distance_graph(triangle_catalog().stars());
    for star in [1, 2, 3] {
        let paths = shortest_paths(&graph, star);
        assert_eq!(reconstruct_path(&paths, star, star), Some(vec![star]));
    }
}

#[test]
fn single_star_catalog_reaches_nothing() {
    let catalog = CatalogBuilder::new(1).star(7, "Solo", 0.0, 0.0).build();
    let graph = build_distance_graph(catalog.stars());
    let paths = shortest_paths(&graph, 7);

    assert!(paths.is_empty());
    assert_eq!(reconstruct_path(&paths, 7, 7), Some(vec![7]));
}

#[test]
fn disconnected_star_is_absent_and_unreachable() {
    let graph = Graph::from_edges([1, 2, 3], vec![Edge::new(1, 2, 4.0)]);
    let paths = shortest_paths(&graph, 1);

    assert!(paths.get(3).is_none());
    assert_eq!(paths.distance_to(3), None);
    assert_eq!(reconstruct_path(&paths, 3, 1), None);
}

#[test]
fn equal_cost_paths_prefer_lowest_identifier() {
    let graph = filter_reachable(&build_distance_graph(square_catalog().stars()), 5);
    assert_eq!(graph.edge_count(), 4, "diagonals are out of range");

    let from_north = shortest_paths(&graph, 1);
    assert_eq!(from_north.get(4).map(|e| e.distance), Some(16.0));
    assert_eq!(reconstruct_path(&from_north, 4, 1), Some(vec![1, 2, 4]));

    let from_south = shortest_paths(&graph, 4);
    assert_eq!(reconstruct_path(&from_south, 1, 4), Some(vec![4, 2, 1]));
}

#[test]
fn repeated_searches_are_identical() {
    let graph = build_distance_graph(square_catalog().stars());
    assert_eq!(shortest_paths(&graph, 3), shortest_paths(&graph, 3));
}

#[test]
fn zero_length_edges_are_traversed() {
    let graph = Graph::from_edges(
        [1, 2, 3],
        vec![Edge::new(1, 2, 0.0), Edge::new(2, 3, 5.0)],
    );
    let paths = shortest_paths(&graph, 1);
    assert_eq!(paths.distance_to(2), Some(0.0));
    assert_eq!(reconstruct_path(&paths, 3, 1), Some(vec![1, 2, 3]));
}

#[test]
fn distances_respect_the_triangle_inequality() {
    for seed in 0..8u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut builder = CatalogBuilder::new(1);
        for id in 1..=35 {
            builder = builder.star(
                id,
                &format!("S{id}"),
                rng.gen_range(0.0..5.0),
                rng.gen_range(0.0..5.0),
            );
        }
        let graph = filter_reachable(&build_distance_graph(builder.build().stars()), 8);
        let destination = rng.gen_range(1..=35);
        let paths = shortest_paths(&graph, destination);

        for (_, entry) in paths.reached() {
            assert!(entry.distance >= 0.0);
        }

        for edge in graph.edges() {
            let (Some(da), Some(db)) = (paths.distance_to(edge.a), paths.distance_to(edge.b))
            else {
                // An edge is either fully inside the reached component or fully outside it.
                assert_eq!(
                    paths.distance_to(edge.a).is_some(),
                    paths.distance_to(edge.b).is_some()
                );
                continue;
            };
            let slack = 1e-9;
            assert!(db <= da + edge.distance + slack, "seed {seed}: {edge:?}");
            assert!(da <= db + edge.distance + slack, "seed {seed}: {edge:?}");
        }

        for (star, entry) in paths.reached() {
            let path = reconstruct_path(&paths, star, destination).expect("reached star has a path");
            assert_eq!(path.first(), Some(&destination));
            assert_eq!(path.last(), Some(&star));

            let walked: f64 = path
                .windows(2)
                .map(|pair| graph.edge_between(pair[0], pair[1]).expect("path uses graph edges"))
                .sum();
            assert!((walked - entry.distance).abs() < 1e-9);
        }
    }
}
