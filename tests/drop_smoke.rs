use sandpile_engine::{IntervalPreset, Sandpile, TargetPolicy};

#[test]
fn drop_smoke_through_facade() {
    let mut pile = Sandpile::new(11, 11).unwrap();
    pile.enable_perf_metrics(true);
    pile.on_policy_change(TargetPolicy::FixedCenter);
    pile.on_interval_preset(IntervalPreset::Ultra);

    assert!(pile.on_start());
    assert!(!pile.on_start());
    let mut ticks = 0;
    for _ in 0..200 {
        ticks += pile.advance(16.0).unwrap();
    }
    assert_eq!(ticks, 200);
    assert!(pile.on_stop());

    assert_eq!(pile.feed_len(), 200);
    assert!(pile.get_stats().largest_avalanche() > 0);
    assert!(pile.get_stats().last_drop_ms() >= 0.0);
    for y in 0..11 {
        for x in 0..11 {
            assert!(pile.count(x, y).unwrap() < 4);
        }
    }

    pile.refresh_colors();
    assert_eq!(pile.colors_len(), 121);
    assert_eq!(pile.colors_len_bytes(), 121 * 4);
    assert_eq!(pile.counts_len(), 121);
    assert_eq!(pile.count(11, 0), None);
    assert_eq!(pile.count(0, 11), None);
}

#[test]
fn manual_drop_and_reset_through_facade() {
    let mut pile = Sandpile::new(5, 5).unwrap();
    let x = pile.clamp_x(7);
    let y = pile.clamp_y(-2);
    assert_eq!((x, y), (4, 0));

    for _ in 0..4 {
        pile.on_manual_drop(x as i32, y as i32).unwrap();
    }
    assert_eq!(pile.feed_values(), vec![0, 0, 0, 1]);
    // Corner topple keeps 2 of its 4 grains on the grid.
    assert_eq!(pile.total_grains(), 2.0);

    pile.on_reset();
    pile.on_reset();
    assert_eq!(pile.total_grains(), 0.0);
    assert_eq!(pile.feed_len(), 0);
    assert_eq!(pile.max_seen(), 25);
}
