use ropefall::scenario::fall_during_tyrolean;
use ropefall::{simulate, NoOpStepObserver, Recording, Settings, SimConfig};

fn tyrolean_run() -> Recording<f64> {
    let mut system = fall_during_tyrolean().unwrap();
    let settings = Settings::new(2.0, 0.005).unwrap();
    simulate(&settings, &SimConfig::new(), &mut system, &mut NoOpStepObserver).unwrap()
}

#[test]
fn repeated_runs_are_identical() {
    let results: Vec<_> = (0..5).map(|_| tyrolean_run()).collect();
    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}

#[test]
fn stepping_by_hand_matches_simulate() {
    let recorded = tyrolean_run();

    let mut system = fall_during_tyrolean().unwrap();
    let config = SimConfig::new();
    for snap in &recorded.snapshots {
        system.step(0.005, &config, &mut NoOpStepObserver);
        assert_eq!(&system.snapshot(), snap);
    }
}
