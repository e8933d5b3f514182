use super::*;

#[test]
fn test_happy_path() {
    let state = Lifecycle::default();
    assert_eq!(state, Lifecycle::Detached);

    let state = state.next(LifecycleEvent::Mount).unwrap();
    assert_eq!(state, Lifecycle::Attaching);
    assert!(state.is_mounted());

    let state = state.next(LifecycleEvent::WidgetReady).unwrap();
    assert_eq!(state, Lifecycle::Attached);

    let state = state.next(LifecycleEvent::Unmount).unwrap();
    assert_eq!(state, Lifecycle::Detached);
    assert!(!state.is_mounted());
}

#[test]
fn test_invalid_transitions_are_rejected() {
    assert_eq!(Lifecycle::Detached.next(LifecycleEvent::WidgetReady), None);
    assert_eq!(Lifecycle::Detached.next(LifecycleEvent::Unmount), None);
    assert_eq!(Lifecycle::Attaching.next(LifecycleEvent::Mount), None);
    assert_eq!(Lifecycle::Attached.next(LifecycleEvent::Mount), None);
    assert_eq!(Lifecycle::Attached.next(LifecycleEvent::WidgetReady), None);
}

#[test]
fn test_unmount_before_ready() {
    assert_eq!(
        Lifecycle::Attaching.next(LifecycleEvent::Unmount),
        Some(Lifecycle::Detached)
    );
}
