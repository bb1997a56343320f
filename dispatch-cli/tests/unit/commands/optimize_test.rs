use super::*;
use crate::cli::{get_app, run_subcommand};
use crate::helpers::*;
use std::fs::read_to_string;

#[test]
fn can_optimize_routes_with_limits() {
    let out_file = tempfile::NamedTempFile::new().unwrap();
    let params = ["--max-generations", "2", "--population-size", "50", "--seed", "1"];
    let args = [create_data_args("optimize", out_file.path().to_str().unwrap()).as_slice(), &params[..]].concat();
    let matches = get_app().try_get_matches_from(args).unwrap();

    run_subcommand(matches).unwrap();

    let result = read_to_string(out_file.path()).unwrap();
    assert!(result.contains("Vehicle #1: nearest neighbor route 0 -> 1 -> 2 -> 4 -> 3 -> 0 is 24.90 miles long"));
    assert!(result.contains("Vehicle #2: nearest neighbor route 0 -> 5 -> 6 -> 7 -> 0 is 31.60 miles long"));
    assert!(result.contains("Vehicle #3: nearest neighbor route 0 -> 5 -> 9 -> 2 -> 0 is 20.60 miles long"));
    assert_eq!(result.lines().filter(|line| line.contains(": best route 0 -> ")).count(), 3);
    assert!(result.lines().last().unwrap().starts_with("Total: nearest neighbor routes are 77.10 miles long"));
}

#[test]
fn can_reject_invalid_generations() {
    let args = vec!["optimize", "-d", DISTANCES_PATH, "-a", ADDRESSES_PATH, "-s", SHIPMENTS_PATH, "-c", CONFIG_PATH];
    let matches = get_optimize_app().try_get_matches_from([args.as_slice(), &["-n", "many"][..]].concat()).unwrap();

    let err = run_optimize(&matches).unwrap_err();

    assert!(err.starts_with("cannot get integer value"));
}

#[test]
fn can_format_route() {
    assert_eq!(format_route(&[0, 3, 1, 0]), "0 -> 3 -> 1 -> 0");
    assert_eq!(format_route(&[]), "");
}

#[test]
fn can_sum_only_improved_routes_in_total() {
    let create_result = |vehicle, baseline_length, length, is_converged| RouteOptimization {
        vehicle,
        baseline: vec![],
        baseline_length,
        route: vec![],
        length,
        is_converged,
        generations: 1,
        reseeds: 0,
        interrupted: false,
    };

    let total = format_total(&[create_result(1, 10., 8., true), create_result(2, 5., 4., false)]);

    assert_eq!(total, "Total: nearest neighbor routes are 15.00 miles long, best feasible ones are 13.00 miles long");
}
