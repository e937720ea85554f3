//! End-to-end checks of the local search against exhaustive optima.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use labs_search::energy::{energy, energy_of_spins};
use labs_search::exhaustive::brute_force_best;
use labs_search::random::create_rng;
use labs_search::scorer::ScoreMode;
use labs_search::search::{Acceptance, LocalSearchRunner, SearchConfig};
use labs_search::{LabsError, Sequence};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn search_never_beats_exhaustive_optimum() {
    init_logging();
    for n in 3..=10 {
        let (optimum, _) = brute_force_best(n).unwrap();
        let config = SearchConfig::default()
            .with_length(n)
            .with_batch_size(32)
            .with_steps(30)
            .with_seed(n as u64);
        let result = LocalSearchRunner::run(&config).unwrap();
        assert!(
            result.best_energy >= optimum,
            "n={n}: search reported {} below optimum {optimum}",
            result.best_energy
        );
        assert_eq!(energy(&result.best), result.best_energy);
    }
}

#[test]
fn search_energy_is_monotone_across_configurations() {
    init_logging();
    let configs = [
        SearchConfig::default().with_seed(1),
        SearchConfig::default()
            .with_seed(2)
            .with_scoring(ScoreMode::Streaming),
        SearchConfig::default()
            .with_seed(3)
            .with_parallel(false)
            .with_acceptance(Acceptance::StrictImprovement),
    ];
    for config in configs.iter().map(|c| c.clone().with_length(50).with_steps(25)) {
        let result = LocalSearchRunner::run(&config).unwrap();
        for window in result.energy_history.windows(2) {
            assert!(window[1] <= window[0], "{config:?}: {window:?}");
        }
        assert!(result.best_energy <= result.initial_energy);
    }
}

#[test]
fn same_seed_same_result_across_execution_strategies() {
    let base = SearchConfig::default()
        .with_length(64)
        .with_batch_size(512)
        .with_steps(20)
        .with_seed(0);
    let reference = LocalSearchRunner::run(&base).unwrap();
    for config in [
        base.clone().with_parallel(false),
        base.clone().with_scoring(ScoreMode::Streaming),
        base.clone()
            .with_parallel(false)
            .with_scoring(ScoreMode::Streaming),
    ] {
        let result = LocalSearchRunner::run(&config).unwrap();
        assert_eq!(result.best, reference.best);
        assert_eq!(result.energy_history, reference.energy_history);
    }
}

#[test]
fn search_from_given_start_keeps_length() {
    let mut rng = create_rng(9);
    let start = Sequence::random(33, &mut rng).unwrap();
    let config = SearchConfig::default()
        .with_length(5)
        .with_batch_size(64)
        .with_steps(10)
        .with_seed(9);
    let result = LocalSearchRunner::run_from(start.clone(), &config).unwrap();
    assert_eq!(result.best.len(), 33);
    assert_eq!(result.initial_energy, energy(&start));
}

#[test]
fn search_from_given_start_ignores_zero_length() {
    let start = Sequence::new(vec![1, -1, 1, 1]).unwrap();
    let config = SearchConfig::default()
        .with_length(0)
        .with_steps(3)
        .with_seed(1);
    let result = LocalSearchRunner::run_from(start.clone(), &config).unwrap();
    assert_eq!(result.rounds, 3);
    assert_eq!(result.best.len(), 4);
    assert_eq!(result.initial_energy, energy(&start));
}

#[test]
fn cancelled_search_reports_initial_state() {
    let config = SearchConfig::default().with_seed(4);
    let cancel = Arc::new(AtomicBool::new(true));
    let result = LocalSearchRunner::run_with_cancel(None, &config, Some(cancel)).unwrap();
    assert!(result.cancelled);
    assert_eq!(result.energy_history, vec![result.initial_energy]);
}

#[test]
fn malformed_spins_are_reported_not_repaired() {
    let err = energy_of_spins(&[1, -1, 0, 1]).unwrap_err();
    assert_eq!(
        err,
        LabsError::InvalidSequence {
            position: 2,
            value: "0".into()
        }
    );
    assert!(Sequence::new(vec![1, 5]).is_err());
}

#[test]
fn concrete_energy_scenarios() {
    assert_eq!(energy_of_spins(&[1, 1, 1]).unwrap(), 5);
    assert_eq!(energy_of_spins(&[1, 1, -1, 1]).unwrap(), 2);
    assert_eq!(energy_of_spins(&[-1]).unwrap(), 0);
}
