use client_core::config::SchedulerConfig;
use client_core::{FnSystem, Tier, TieredScheduler};
use proptest::prelude::*;

#[derive(Default)]
struct Counters {
    critical_runs: u64,
    cosmetic_runs: u64,
    critical_time: f32,
    cosmetic_time: f32,
    cosmetic_ticks: Vec<u64>,
}

fn scheduler(period: u32) -> TieredScheduler<Counters> {
    let config = SchedulerConfig {
        cosmetic_period: period,
        max_frame_dt: 0.25,
    };
    let mut scheduler = TieredScheduler::new(&config).unwrap();
    scheduler
        .add_system(
            Tier::Critical,
            FnSystem::new("critical", |s: &mut Counters, dt: f32| {
                s.critical_runs += 1;
                s.critical_time += dt;
            }),
        )
        .add_system(
            Tier::Cosmetic,
            FnSystem::new("cosmetic", |s: &mut Counters, dt: f32| {
                s.cosmetic_runs += 1;
                s.cosmetic_time += dt;
            }),
        );
    scheduler
}

/// Host deltas: mostly valid, occasionally garbage
fn frame_delta() -> impl Strategy<Value = f32> {
    prop_oneof![
        8 => 0.0f32..0.5,
        1 => Just(f32::NAN),
        1 => -1.0f32..-0.001,
    ]
}

proptest! {
    #[test]
    fn critical_runs_once_per_processed_frame(
        period in 1u32..6,
        deltas in prop::collection::vec(frame_delta(), 0..64),
    ) {
        let mut scheduler = scheduler(period);
        let mut state = Counters::default();
        let mut processed = 0u64;

        for dt in deltas {
            let before = scheduler.tick();
            match scheduler.run_frame(&mut state, dt) {
                Ok(report) => {
                    processed += 1;
                    prop_assert_eq!(report.tick, before + 1);
                }
                Err(_) => prop_assert_eq!(scheduler.tick(), before),
            }
        }

        prop_assert_eq!(scheduler.tick(), processed);
        prop_assert_eq!(state.critical_runs, processed);
    }

    #[test]
    fn cosmetic_runs_exactly_on_period_ticks(
        period in 1u32..6,
        frames in 1usize..64,
        dt in 0.0f32..0.1,
    ) {
        let mut scheduler = scheduler(period);
        let mut state = Counters::default();

        for _ in 0..frames {
            let report = scheduler.run_frame(&mut state, dt).unwrap();
            let due = report.tick % u64::from(period) == 0;
            prop_assert_eq!(report.ran_cosmetic(), due);
            if due {
                state.cosmetic_ticks.push(report.tick);
            }
        }

        prop_assert_eq!(state.cosmetic_runs, frames as u64 / u64::from(period));
        prop_assert_eq!(state.cosmetic_ticks.len() as u64, state.cosmetic_runs);
    }

    #[test]
    fn cosmetic_time_matches_critical_time(
        period in 1u32..6,
        deltas in prop::collection::vec(0.0f32..0.5, 1..64),
    ) {
        let mut scheduler = scheduler(period);
        let mut state = Counters::default();

        for dt in deltas {
            let report = scheduler.run_frame(&mut state, dt).unwrap();
            prop_assert!(report.dt <= 0.25);
            prop_assert_eq!(report.clamped, dt > 0.25);
        }

        let accounted = state.cosmetic_time + scheduler.pending_cosmetic_dt();
        prop_assert!((accounted - state.critical_time).abs() < 1e-3);
    }

    #[test]
    fn frozen_frames_tick_with_zero_delta(
        period in 1u32..6,
        deltas in prop::collection::vec(0.0f32..0.5, 1..32),
    ) {
        let mut scheduler = scheduler(period);
        let mut state = Counters::default();
        scheduler.set_frozen(true);

        for (i, dt) in deltas.iter().enumerate() {
            let report = scheduler.run_frame(&mut state, *dt).unwrap();
            prop_assert!(report.frozen);
            prop_assert!(!report.clamped);
            prop_assert_eq!(report.dt, 0.0);
            prop_assert_eq!(report.tick, i as u64 + 1);
        }

        prop_assert_eq!(state.critical_runs, deltas.len() as u64);
        prop_assert_eq!(state.critical_time, 0.0);
        prop_assert_eq!(state.cosmetic_time, 0.0);
    }
}
