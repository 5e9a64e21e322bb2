use super::*;
use crate::domain::config::SandpileConfig;

fn core(columns: u32, rows: u32) -> SandpileCore {
    SandpileCore::with_dimensions(columns, rows).unwrap()
}

#[test]
fn rejects_zero_dimensions_at_construction() {
    assert_eq!(
        SandpileCore::with_dimensions(0, 3).err(),
        Some(SandpileError::InvalidDimensions { columns: 0, rows: 3 })
    );
}

#[test]
fn four_centre_drops_feed_the_histogram() {
    let mut sim = core(5, 5);

    assert_eq!(sim.drop_at(2, 2).unwrap(), 0);
    assert_eq!(sim.drop_at(2, 2).unwrap(), 0);
    assert_eq!(sim.drop_at(2, 2).unwrap(), 0);
    assert_eq!(sim.count(2, 2), Some(3));

    assert_eq!(sim.drop_at(2, 2).unwrap(), 1);
    assert_eq!(sim.count(2, 2), Some(0));
    for (x, y) in [(1, 2), (3, 2), (2, 1), (2, 3)] {
        assert_eq!(sim.count(x, y), Some(1));
    }

    assert_eq!(sim.feed().to_vec(), vec![0, 0, 0, 1]);
    assert_eq!(sim.max_seen(), 25);
}

#[test]
fn out_of_bounds_drop_records_nothing() {
    let mut sim = core(4, 4);
    assert!(sim.drop_at(4, 0).is_err());
    assert!(sim.drop_at(0, -1).is_err());
    assert!(sim.feed().is_empty());
    assert_eq!(sim.total_grains(), 0);
    assert_eq!(sim.stats().total_drops(), 0);
}

#[test]
fn manual_drops_work_while_idle_and_running() {
    let mut sim = core(3, 3);
    assert!(!sim.is_running());
    sim.drop_at(1, 1).unwrap();
    sim.start();
    sim.drop_at(1, 1).unwrap();
    assert_eq!(sim.count(1, 1), Some(2));
    assert_eq!(sim.feed().len(), 2);
}

#[test]
fn reset_clears_grid_and_feed_but_keeps_driver_state() {
    let mut sim = core(5, 5);
    sim.start();
    for _ in 0..50 {
        sim.drop_at(2, 2).unwrap();
    }
    assert!(sim.max_seen() >= 25);

    sim.reset();
    let counts_once = sim.grid().counts().to_vec();
    sim.reset();

    assert!(sim.is_running());
    assert_eq!(sim.grid().counts(), counts_once.as_slice());
    assert_eq!(sim.total_grains(), 0);
    assert!(sim.feed().is_empty());
    assert_eq!(sim.max_seen(), 25);
}

#[test]
fn advance_runs_due_ticks_on_the_policy_target() {
    let mut sim = core(5, 5);
    sim.set_policy(TargetPolicy::FixedCorner);
    sim.set_interval_preset(IntervalPreset::Fast); // 100ms

    // Idle: the clock does nothing.
    assert_eq!(sim.advance(1_000.0).unwrap(), 0);

    assert!(sim.start());
    assert_eq!(sim.advance(250.0).unwrap(), 2);
    assert_eq!(sim.count(0, 0), Some(2));
    assert_eq!(sim.feed().len(), 2);

    sim.stop();
    assert_eq!(sim.advance(1_000.0).unwrap(), 0);
}

#[test]
fn policy_change_applies_to_next_tick() {
    let mut sim = core(5, 5);
    sim.set_policy(TargetPolicy::FixedCenter);
    sim.tick().unwrap();
    sim.set_policy(TargetPolicy::FixedCorner);
    sim.tick().unwrap();
    assert_eq!(sim.count(2, 2), Some(1));
    assert_eq!(sim.count(0, 0), Some(1));
}

#[test]
fn replay_is_deterministic() {
    let run = || {
        let mut sim = core(8, 6);
        sim.set_seed(99);
        sim.set_policy(TargetPolicy::Random);
        let events: Vec<u32> = (0..1_500).map(|_| sim.tick().unwrap()).collect();
        (events, sim.grid().counts().to_vec())
    };
    let (events_a, grid_a) = run();
    let (events_b, grid_b) = run();
    assert_eq!(events_a, events_b);
    assert_eq!(grid_a, grid_b);
    assert!(events_a.iter().any(|&e| e > 0));
}

#[test]
fn random_ticks_keep_the_grid_stable_and_accounted() {
    let mut sim = core(10, 10);
    let mut expected = 0u64;
    for _ in 0..3_000 {
        let before = sim.total_grains();
        sim.tick().unwrap();
        let stats = sim.stats();
        expected = before + 1 - stats.last_grains_lost();
        assert_eq!(sim.total_grains(), expected);
        assert!(sim.grid().is_stable(4));
    }
    assert_eq!(sim.total_grains(), expected);
    assert_eq!(sim.feed().len(), 260);
    assert_eq!(sim.stats().total_drops(), 3_000);
}

#[test]
fn stats_track_largest_avalanche() {
    let mut sim = core(5, 5);
    sim.enable_perf_metrics(true);
    for _ in 0..4 {
        sim.drop_at(2, 2).unwrap();
    }
    let stats = sim.stats();
    assert_eq!(stats.total_drops(), 4);
    assert_eq!(stats.total_events(), 1);
    assert_eq!(stats.largest_avalanche(), 1);
    assert!(stats.last_drop_ms() >= 0.0);
}

#[test]
fn cascade_limit_is_reported_as_fault() {
    let config = SandpileConfig {
        cascade_limit: Some(3),
        ..SandpileConfig::with_dimensions(7, 7)
    };
    let mut sim = SandpileCore::new(config).unwrap();
    let mut fault = None;
    for _ in 0..500 {
        if let Err(e) = sim.drop_at(3, 3) {
            fault = Some(e);
            break;
        }
    }
    assert_eq!(fault, Some(SandpileError::CascadeLimit { limit: 3 }));
    assert_eq!(sim.stats().cascade_faults(), 1);
}

#[test]
fn colors_follow_counts_mod_four() {
    let mut sim = core(3, 1);
    sim.drop_at(1, 0).unwrap();
    sim.drop_at(2, 0).unwrap();
    sim.drop_at(2, 0).unwrap();
    sim.refresh_colors();

    let palette = sim.config().palette().unwrap();
    assert_eq!(
        sim.colors(),
        &[palette.color_of(0), palette.color_of(1), palette.color_of(2)]
    );
    assert_eq!(sim.colors_len(), 3);
}

#[test]
fn histogram_is_scaled_to_max_seen() {
    let mut sim = core(5, 5);
    for _ in 0..4 {
        sim.drop_at(2, 2).unwrap();
    }
    assert_eq!(sim.histogram(50.0), vec![0.0, 0.0, 0.0, 2.0]);
}

#[test]
fn large_grid_honours_explicit_cascade_limit() {
    let config = SandpileConfig {
        cascade_limit: Some(50),
        ..SandpileConfig::with_dimensions(300, 300)
    };
    let mut sim = SandpileCore::new(config).unwrap();
    assert_eq!(sim.toppler.limit(), 50);
    sim.grid.counts.fill(3);

    let err = sim.drop_at(150, 150).unwrap_err();
    assert_eq!(err, SandpileError::CascadeLimit { limit: 50 });
    assert_eq!(sim.stats().cascade_faults(), 1);
    assert!(sim.feed().is_empty());
    assert!(sim.grid().is_stable(sim.toppler.threshold()));
}
