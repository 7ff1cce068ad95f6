use proptest::prelude::*;
use tessel::relax;

proptest! {
    #[test]
    fn prop_assignment_is_total(
        data in prop::collection::vec(((-10.0f64..10.0, -10.0f64..10.0), 0.1f64..10.0), 1..20),
        k in 1usize..5
    ) {
        // Skip if k > n
        if k <= data.len() {
            let points: Vec<[f64; 2]> = data.iter().map(|((x, y), _)| [*x, *y]).collect();
            let weights: Vec<f64> = data.iter().map(|(_, w)| *w).collect();
            let seeds: Vec<[f64; 2]> = points[..k].to_vec();

            let cvt = relax(&points, &weights, &seeds, 16).unwrap();

            prop_assert_eq!(cvt.assignment.len(), points.len());
            for &a in &cvt.assignment {
                prop_assert!(a < k);
            }
            prop_assert_eq!(cvt.populations.iter().sum::<usize>(), points.len());
        }
    }

    #[test]
    fn prop_budget_is_respected(
        data in prop::collection::vec(((-10.0f64..10.0, -10.0f64..10.0), 0.1f64..10.0), 1..20),
        k in 1usize..5,
        max_iters in 0u64..4
    ) {
        if k <= data.len() {
            let points: Vec<[f64; 2]> = data.iter().map(|((x, y), _)| [*x, *y]).collect();
            let weights: Vec<f64> = data.iter().map(|(_, w)| *w).collect();
            let seeds: Vec<[f64; 2]> = points[..k].to_vec();

            let cvt = relax(&points, &weights, &seeds, max_iters).unwrap();

            prop_assert!(cvt.rounds <= max_iters + 1);
            if !cvt.converged {
                prop_assert_eq!(cvt.rounds, max_iters + 1);
            }
        }
    }

    #[test]
    fn prop_converged_runs_are_fixed_points(
        data in prop::collection::vec(((-10.0f64..10.0, -10.0f64..10.0), 0.1f64..10.0), 1..20),
        k in 1usize..5
    ) {
        if k <= data.len() {
            let points: Vec<[f64; 2]> = data.iter().map(|((x, y), _)| [*x, *y]).collect();
            let weights: Vec<f64> = data.iter().map(|(_, w)| *w).collect();
            let seeds: Vec<[f64; 2]> = points[..k].to_vec();

            let cvt = relax(&points, &weights, &seeds, 64).unwrap();
            if cvt.converged {
                let rerun = relax(&points, &weights, &cvt.nodes, 64).unwrap();
                prop_assert!(rerun.converged);
                prop_assert_eq!(rerun.rounds, 1);
                prop_assert_eq!(rerun.nodes, cvt.nodes);
                prop_assert_eq!(rerun.assignment, cvt.assignment);
            }
        }
    }
}
