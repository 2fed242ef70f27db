use super::*;

#[test]
fn default_is_idle() {
    let task: Loadable<u32> = Loadable::default();
    assert_eq!(task, Loadable::Idle);
    assert!(!task.is_pending());
    assert!(task.value().is_none());
    assert!(task.error().is_none());
}

#[test]
fn fulfilled_exposes_its_value() {
    let task = Loadable::Fulfilled(7);
    assert!(task.is_fulfilled());
    assert_eq!(task.value(), Some(&7));
}

#[test]
fn rejected_exposes_its_message() {
    let task: Loadable<u32> = Loadable::Rejected("boom".into());
    assert_eq!(task.error(), Some("boom"));
}

#[test]
fn clear_error_only_clears_rejections() {
    let mut task: Loadable<u32> = Loadable::Rejected("boom".into());
    task.clear_error();
    assert_eq!(task, Loadable::Idle);

    let mut task = Loadable::Fulfilled(3);
    task.clear_error();
    assert_eq!(task, Loadable::Fulfilled(3));
}
