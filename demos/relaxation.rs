//! Weighted CVT relaxation on a simple 2D dataset.
//!
//! Run with `RUST_LOG=debug` to see per-round displacement.

use tessel::{EmptyNodePolicy, Lloyd, relax};

fn main() {
    env_logger::init();

    // Three well-separated clusters of points with uneven weights.
    let points: Vec<[f64; 2]> = vec![
        // Cluster A (near origin)
        [0.0, 0.0],
        [0.1, 0.2],
        [0.2, 0.1],
        [-0.1, 0.1],
        // Cluster B (near (5, 5))
        [5.0, 5.0],
        [5.1, 4.9],
        [4.9, 5.1],
        [5.2, 5.2],
        // Cluster C (near (10, 0))
        [10.0, 0.0],
        [10.1, 0.1],
        [9.9, -0.1],
        [10.2, 0.2],
    ];
    let weights: Vec<f64> = vec![
        1.0, 1.0, 1.0, 1.0, // A
        4.0, 4.0, 4.0, 4.0, // B carries more weight
        1.0, 2.0, 1.0, 2.0, // C
    ];
    let seeds: Vec<[f64; 2]> = vec![[0.0, 0.0], [5.0, 5.0], [10.0, 0.0]];

    // --- Relaxation with the default policy ---
    let cvt = relax(&points, &weights, &seeds, 50).unwrap();
    println!("=== CVT (3 nodes, max 50 iterations) ===");
    println!("converged: {} in {} rounds", cvt.converged, cvt.rounds);
    for (i, label) in cvt.assignment.iter().enumerate() {
        println!(
            "  point {:2} ({:5.1}, {:5.1}) => node {}",
            i, points[i][0], points[i][1], label
        );
    }
    for (j, node) in cvt.nodes.iter().enumerate() {
        println!(
            "  node {} at ({:6.3}, {:6.3}), population {}, weight {:.1}",
            j, node[0], node[1], cvt.populations[j], cvt.node_weights[j]
        );
    }

    // --- A node seeded far outside the cloud stays put under Freeze ---
    let mut far_seeds = seeds.clone();
    far_seeds.push([1000.0, 1000.0]);
    let cvt = Lloyd::new(50)
        .with_empty_node_policy(EmptyNodePolicy::Freeze)
        .tessellate(&points, &weights, &far_seeds)
        .unwrap();
    println!("\n=== Frozen empty node ===");
    println!("converged: {} in {} rounds", cvt.converged, cvt.rounds);
    println!(
        "  node 3 at ({:.1}, {:.1}), population {}",
        cvt.nodes[3][0], cvt.nodes[3][1], cvt.populations[3]
    );

    // --- Partition fresh points onto the finished tessellation ---
    let probes: Vec<[f64; 2]> = vec![[1.0, 1.0], [6.0, 6.0], [9.0, 0.5]];
    let labels = cvt.partition(&probes).unwrap();
    println!("\n=== Partition of fresh points ===");
    for (p, label) in probes.iter().zip(&labels) {
        println!("  ({:4.1}, {:4.1}) => node {}", p[0], p[1], label);
    }
}
