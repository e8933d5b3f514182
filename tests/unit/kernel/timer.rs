use super::*;

#[test]
fn test_tasks_fire_at_deadline_in_order() {
    let t0 = Instant::now();
    let mut timers = TimerQueue::new();
    timers.schedule(t0, Duration::from_millis(100), "undo");
    timers.schedule(t0, Duration::from_millis(40), "remeasure-1");
    timers.schedule(t0, Duration::from_millis(40), "remeasure-2");

    assert!(timers.take_due(t0 + Duration::from_millis(39)).is_empty());
    assert_eq!(
        timers.take_due(t0 + Duration::from_millis(40)),
        vec!["remeasure-1", "remeasure-2"]
    );
    assert_eq!(timers.len(), 1);
    assert_eq!(timers.next_deadline(), Some(t0 + Duration::from_millis(100)));
    assert_eq!(timers.take_due(t0 + Duration::from_secs(1)), vec!["undo"]);
    assert!(timers.is_empty());
}

#[test]
fn test_cancel_single_and_all() {
    let t0 = Instant::now();
    let mut timers = TimerQueue::new();
    let a = timers.schedule(t0, Duration::from_millis(10), 1);
    let b = timers.schedule(t0, Duration::from_millis(10), 2);

    assert_eq!(timers.cancel(a), Some(1));
    assert_eq!(timers.cancel(a), None);
    assert!(!timers.is_pending(a));
    assert!(timers.is_pending(b));

    timers.schedule(t0, Duration::from_millis(20), 3);
    assert_eq!(timers.cancel_all(), 2);
    assert!(timers.take_due(t0 + Duration::from_secs(1)).is_empty());
    assert_eq!(timers.next_deadline(), None);
}
