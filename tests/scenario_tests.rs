use float_cmp::approx_eq;
use ropefall::scenario::{climbing_rope_spring, fall_during_tyrolean, fall_from_anchor};
use ropefall::{simulate, Anchor, Mass, NoOpStepObserver, Recording, Rope, RopeSystem, Settings, SimConfig};

fn run(system: &mut RopeSystem<f64>) -> Recording<f64> {
    let settings = Settings::new(4.0, 0.005).unwrap();
    simulate(&settings, &SimConfig::new(), system, &mut NoOpStepObserver).unwrap()
}

fn lowest_point(rec: &Recording<f64>) -> f64 {
    rec.snapshots.iter().map(|s| s.masses[0].y).fold(f64::INFINITY, f64::min)
}

#[test]
fn symmetric_ropes_cancel_horizontally() {
    let mut system = RopeSystem::new();
    let person = system.add_mass(Mass::new("person", 10.0, 8.0, 80.0)).unwrap();
    let left = system.add_anchor(Anchor::new("left", 5.0, 8.0));
    let right = system.add_anchor(Anchor::new("right", 15.0, 8.0));
    system.add_rope(Rope::new(person, left, 5.5, climbing_rope_spring())).unwrap();
    system.add_rope(Rope::new(person, right, 5.5, climbing_rope_spring())).unwrap();

    let rec = run(&mut system);

    for snap in &rec.snapshots {
        assert!(approx_eq!(f64, snap.masses[0].x, 10.0, epsilon = 1e-12));
        assert_eq!(snap.ropes[0].tension, snap.ropes[1].tension);
    }
    assert!(approx_eq!(f64, system.mass(0).vel.x, 0.0, epsilon = 1e-12));

    // Ropes only go taut about 2.3 m below the anchors.
    assert!(lowest_point(&rec) < 5.7);
    assert!(rec.peak_tension(0).unwrap().1 > 0.0);
}

#[test]
fn tyrolean_fall_is_caught() {
    let mut system = fall_during_tyrolean().unwrap();
    let rec = run(&mut system);

    assert_eq!(rec.len(), 800);
    assert!(rec.snapshots.iter().all(|s| s.ropes.iter().all(|r| r.tension >= 0.0)));

    let low = lowest_point(&rec);
    assert!(low > 5.0 && low < 6.0, "lowest point {}", low);
    for rope in 0..2 {
        let (_, peak) = rec.peak_tension(rope).unwrap();
        assert!(peak > 5_000.0, "rope {} peak {}", rope, peak);
    }
}

#[test]
fn fall_from_anchor_starts_degenerate() {
    let mut system = fall_from_anchor().unwrap();
    let rec = run(&mut system);

    assert_eq!(rec.snapshots[0].ropes[0].tension, 0.0);
    assert!(rec.snapshots.iter().all(|s| s.masses[0].x == 10.0));

    // 6 m of rope plus its stretch at the catch.
    let low = lowest_point(&rec);
    assert!(low < 2.0 && low > 0.0, "lowest point {}", low);
    let (step, peak) = rec.peak_tension(0).unwrap();
    assert!(peak > 10_000.0);
    assert!(rec.time_at(step) > 1.0);
}

#[test]
fn anchors_never_move() {
    let mut system = fall_during_tyrolean().unwrap();
    let before = system.anchors.clone();
    let rec = run(&mut system);
    assert_eq!(system.anchors, before);

    let last = rec.snapshots.last().unwrap();
    assert_eq!((last.ropes[0].end_x, last.ropes[0].end_y), (5.0, 8.5));
    assert_eq!((last.ropes[1].end_x, last.ropes[1].end_y), (15.0, 8.0));
}
