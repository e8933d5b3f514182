use super::*;
use crate::kernel::services::ports::ClickSubscription;
use std::rc::Rc;

#[test]
fn test_listener_ids_are_unique() {
    let registry = ClickListenerRegistry::new();
    let a = registry.add_click_listener();
    let b = registry.add_click_listener();
    assert_ne!(a, b);
    assert_eq!(registry.active_count(), 2);

    registry.remove_click_listener(a);
    assert!(!registry.is_active(a));
    assert!(registry.is_active(b));
}

#[test]
fn test_subscription_released_on_drop() {
    let registry = Rc::new(ClickListenerRegistry::new());
    let subscription = ClickSubscription::acquire(registry.clone());
    assert!(registry.is_active(subscription.id()));

    drop(subscription);
    assert_eq!(registry.active_count(), 0);
}

#[test]
fn test_subscription_released_on_unwind() {
    let registry = Rc::new(ClickListenerRegistry::new());
    let source = registry.clone();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        let _subscription = ClickSubscription::acquire(source);
        panic!("host blew up");
    }));
    assert!(result.is_err());
    assert_eq!(registry.active_count(), 0);
}
