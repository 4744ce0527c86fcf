//! Integration tests driving full work/break cycles through the public API.

use tomata_core::{
    Directive, DisplaySurface, IntervalKind, PendingAction, RecordingDisplay, SessionConfig,
    SessionScheduler,
};

fn minute_config(target: u32) -> SessionConfig {
    SessionConfig {
        work_min: 1,
        short_break_min: 1,
        long_break_min: 1,
        default_target: target,
    }
}

/// Fire pending work until the scheduler is quiescent, mirroring a host
/// that never intervenes.
fn run_to_quiescence(scheduler: &mut SessionScheduler, display: &mut RecordingDisplay) {
    let mut fired = 0;
    while scheduler.pending().is_some() {
        let directives = scheduler.fire_pending();
        display.apply_all(&directives);
        fired += 1;
        assert!(fired < 100_000, "cycle did not reach the target");
    }
}

#[test]
fn default_target_session_completes_four_pomodoros() {
    let mut scheduler = SessionScheduler::new(minute_config(4));
    let mut display = RecordingDisplay::new();
    display.apply_all(&scheduler.start());
    run_to_quiescence(&mut scheduler, &mut display);

    assert_eq!(scheduler.completed(), 4);
    // 4 work intervals and 3 breaks in between.
    assert_eq!(scheduler.repetition_count(), 7);
    assert!(display
        .alerts()
        .contains(&"Congratulations! You completed 4 Pomodoros!"));
    assert!(display
        .applied
        .contains(&Directive::SetCheckmarks { count: 4 }));
}

#[test]
fn eight_pomodoro_session_takes_one_long_break() {
    let mut scheduler = SessionScheduler::new(minute_config(8));
    let mut display = RecordingDisplay::new();
    display.apply_all(&scheduler.start());
    run_to_quiescence(&mut scheduler, &mut display);

    assert_eq!(scheduler.completed(), 8);
    assert_eq!(scheduler.repetition_count(), 15);
    let long_breaks = display
        .applied
        .iter()
        .filter(|d| {
            matches!(
                d,
                Directive::SetIntervalLabel {
                    kind: IntervalKind::LongBreak
                }
            )
        })
        .count();
    assert_eq!(long_breaks, 1);
}

#[test]
fn progress_directives_step_through_every_pomodoro() {
    let mut scheduler = SessionScheduler::new(minute_config(3));
    let mut display = RecordingDisplay::new();
    display.apply_all(&scheduler.start());
    run_to_quiescence(&mut scheduler, &mut display);

    let progress: Vec<(u32, u32)> = display
        .applied
        .iter()
        .filter_map(|d| match d {
            Directive::SetProgress { value, maximum } => Some((*value, *maximum)),
            _ => None,
        })
        .collect();
    assert_eq!(progress, vec![(0, 3), (1, 3), (2, 3), (3, 3)]);
}

#[test]
fn reset_mid_cycle_allows_a_fresh_target() {
    let mut scheduler = SessionScheduler::new(minute_config(4));
    scheduler.set_target_input("2");
    scheduler.start();
    let mut display = RecordingDisplay::new();
    run_to_quiescence(&mut scheduler, &mut display);
    assert_eq!(scheduler.completed(), 2);

    scheduler.reset();
    scheduler.set_target_input("1");
    scheduler.start();
    assert_eq!(scheduler.target(), Some(1));
    assert_eq!(scheduler.repetition_count(), 1);
    assert_eq!(scheduler.completed(), 0);
}

#[test]
fn stop_between_intervals_keeps_the_sequence_position() {
    let mut scheduler = SessionScheduler::new(minute_config(2));
    let mut display = RecordingDisplay::new();
    display.apply_all(&scheduler.start());

    // Run the first work interval out, then stop during the auto-start gap.
    while scheduler.pending() == Some(PendingAction::Tick) {
        let directives = scheduler.fire_pending();
        display.apply_all(&directives);
    }
    assert_eq!(scheduler.pending(), Some(PendingAction::AutoStart));
    scheduler.stop();
    assert_eq!(scheduler.pending(), None);

    // A manual start picks up where the sequence left off.
    scheduler.start();
    assert_eq!(scheduler.interval_kind(), Some(IntervalKind::ShortBreak));
    assert_eq!(scheduler.completed(), 1);
}
