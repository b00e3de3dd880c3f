use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone, Utc};
use nifty_pulse::{DashboardEngine, EngineOptions, TimeFrame};

fn ist(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    FixedOffset::east_opt(19_800)
        .unwrap()
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .unwrap()
        .with_timezone(&Utc)
}

fn engine(demo: bool, time_frame: TimeFrame, start: DateTime<Utc>) -> DashboardEngine {
    DashboardEngine::new(
        EngineOptions {
            demo,
            time_frame,
            seed: Some(2024),
        },
        start,
    )
}

#[test]
fn full_trading_day_keeps_windows_bounded() {
    // Monday 2024-01-08, a few minutes before the open through a few after the close
    let start = ist(2024, 1, 8, 9, 10, 0);
    let mut e = engine(false, TimeFrame::S30, start);
    let mut opened = 0;
    let mut closed = 0;

    for s in 1..=(6 * 3600 + 30 * 60) {
        let now = start + TimeDelta::seconds(s);
        let report = e.tick(now);
        if report.session_changed {
            if e.session().is_open {
                opened += 1;
            } else {
                closed += 1;
            }
        }
        assert!(e.index_series().len() <= 30);
        assert!(e.probability_series().len() <= 30);
        let p = e.probability_series().last_value().unwrap();
        assert!((0.0..=100.0).contains(&p));
    }

    assert_eq!((opened, closed), (1, 1));
    assert!(!e.session().is_open);
    let perf = e.performance();
    assert!((perf.today_profit - (perf.current_value - perf.initial_capital)).abs() < 1e-6);
    assert!(perf.trades_count > 0);
}

#[test]
fn weekend_without_demo_only_the_clock_moves() {
    let start = ist(2024, 1, 7, 12, 0, 0); // Sunday
    let mut e = engine(false, TimeFrame::M1, start);
    let before = e.snapshot();

    for s in 1..=120 {
        e.tick(start + TimeDelta::seconds(s));
    }
    let after = e.snapshot();

    assert_eq!(after.index, before.index);
    assert_eq!(after.performance.trades_count, 0);
    assert_eq!(after.index_len, 60);
    assert!(after.session.countdown_secs.unwrap() < before.session.countdown_secs.unwrap());
    assert_eq!(after.session.countdown_text.as_deref(), Some("21h 13m 0s"));
}

fn spacings(e: &DashboardEngine) -> Vec<i64> {
    let mut gaps: Vec<i64> = [e.index_series(), e.probability_series()]
        .into_iter()
        .flat_map(|series| {
            let stamps: Vec<i64> = series.iter().map(|p| p.timestamp_ms).collect();
            stamps.windows(2).map(|w| w[1] - w[0]).collect::<Vec<_>>()
        })
        .collect();
    gaps.sort_unstable();
    gaps.dedup();
    gaps
}

#[test]
fn demo_switch_mid_weekend() {
    let start = ist(2024, 1, 6, 15, 0, 0); // Saturday
    let mut e = engine(false, TimeFrame::S10, start);
    e.tick(start + TimeDelta::seconds(1));
    assert_eq!(
        e.index_series().last().map(|p| p.timestamp_ms),
        Some(start.timestamp_millis())
    );

    e.set_demo(true);
    for s in 2..=10 {
        e.tick(start + TimeDelta::seconds(s));
    }
    let moving = e.snapshot();
    assert!(moving.demo);
    assert_eq!(moving.index_len, 10);
    // rebuilt at +2s, then eight one-second steps
    assert_eq!(
        e.index_series().first().map(|p| p.timestamp_ms),
        Some((start + TimeDelta::seconds(1)).timestamp_millis())
    );
    assert_eq!(
        e.index_series().last().map(|p| p.timestamp_ms),
        Some((start + TimeDelta::seconds(10)).timestamp_millis())
    );
    assert_eq!(spacings(&e), vec![1_000]);

    e.set_demo(false);
    let paused = e.snapshot();
    for s in 11..=20 {
        e.tick(start + TimeDelta::seconds(s));
    }
    assert_eq!(e.snapshot().index, paused.index);
}

#[test]
fn spacing_holds_across_gate_changes() {
    // Friday afternoon into Monday morning, demo flipped on and off over the weekend
    let friday = ist(2024, 1, 5, 15, 25, 0);
    let mut e = engine(false, TimeFrame::M1, friday);
    let mut now = friday;

    let run = |e: &mut DashboardEngine, now: &mut DateTime<Utc>, secs: i64| {
        for _ in 0..secs {
            *now += TimeDelta::seconds(1);
            e.tick(*now);
            assert_eq!(spacings(e), vec![1_000], "at {now}");
        }
    };

    run(&mut e, &mut now, 600);
    assert!(!e.session().is_open);

    now = ist(2024, 1, 6, 10, 0, 0);
    e.set_demo(true);
    run(&mut e, &mut now, 90);
    e.set_demo(false);
    run(&mut e, &mut now, 30);

    now = ist(2024, 1, 8, 9, 14, 0);
    run(&mut e, &mut now, 120);
    assert!(e.session().is_open);
    assert_eq!(
        e.index_series().last().map(|p| p.timestamp_ms),
        Some(now.timestamp_millis())
    );
}

#[test]
fn switching_frames_resets_windows_each_time() {
    let start = ist(2024, 1, 9, 11, 0, 0);
    let mut e = engine(false, TimeFrame::M1, start);
    let mut t = start;
    for tf in [TimeFrame::S10, TimeFrame::H1, TimeFrame::D1, TimeFrame::M1] {
        t += TimeDelta::seconds(3);
        e.set_time_frame(tf, t);
        assert_eq!(e.time_frame(), tf);
        assert_eq!(e.index_series().len(), tf.point_count());
        assert_eq!(e.probability_series().len(), tf.point_count());
        assert_eq!(
            e.index_series().last().map(|p| p.timestamp_ms),
            Some(t.timestamp_millis())
        );
    }
}

#[test]
fn snapshot_serializes_for_the_cli() {
    let start = ist(2024, 1, 8, 10, 0, 0);
    let mut e = engine(false, TimeFrame::M5, start);
    e.tick(start);

    let json = serde_json::to_value(e.snapshot()).unwrap();
    assert_eq!(json["time_frame"], "5m");
    assert_eq!(json["session"]["is_open"], true);
    assert!(json["session"]["countdown_secs"].is_null());
    assert_eq!(json["clock"], "10:00:00");
    assert_eq!(json["index_len"], 60);
    let direction = json["prediction"]["direction"].as_str().unwrap();
    assert!(direction == "UP" || direction == "DOWN");
}
