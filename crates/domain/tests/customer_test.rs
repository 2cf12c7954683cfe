use chrono::{Duration, TimeZone, Utc};
use crm_jobs_domain::customer::{Customer, InactivityPolicy, DEFAULT_INACTIVITY_DAYS};
use crm_jobs_domain::order::reminder_window_start;
use crm_jobs_domain::timestamp::MAX_WINDOW_DAYS;
use crm_jobs_domain::DomainError;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_customer_new() {
    let customer = Customer::new("Alice", "alice@example.com");

    assert!(customer.id.is_none());
    assert_eq!(&*customer.name, "Alice");
    assert_eq!(&*customer.email, "alice@example.com");
    assert!(customer.phone.is_none());
}

#[test]
fn test_default_policy_is_one_year() {
    let policy = InactivityPolicy::default();

    assert_eq!(policy.window_days, DEFAULT_INACTIVITY_DAYS);
    assert_eq!(policy.cutoff(now()).unwrap(), now() - Duration::days(365));
}

#[test]
fn test_customer_without_orders_is_inactive() {
    let policy = InactivityPolicy::default();

    assert!(policy.is_inactive(Vec::new(), now()).unwrap());
}

#[test]
fn test_customer_with_only_old_orders_is_inactive() {
    let policy = InactivityPolicy::default();
    let dates = vec![now() - Duration::days(400), now() - Duration::days(366)];

    assert!(policy.is_inactive(dates, now()).unwrap());
}

#[test]
fn test_customer_with_recent_order_is_active() {
    let policy = InactivityPolicy::default();
    let dates = vec![now() - Duration::days(800), now()];

    assert!(!policy.is_inactive(dates, now()).unwrap());
}

#[test]
fn test_order_exactly_at_cutoff_keeps_customer() {
    let policy = InactivityPolicy::new(30);
    let dates = vec![policy.cutoff(now()).unwrap()];

    assert!(!policy.is_inactive(dates, now()).unwrap());
}

#[test]
fn test_order_one_second_before_cutoff_is_inactive() {
    let policy = InactivityPolicy::new(30);
    let dates = vec![policy.cutoff(now()).unwrap() - Duration::seconds(1)];

    assert!(policy.is_inactive(dates, now()).unwrap());
}

#[test]
fn test_longest_accepted_window_has_a_cutoff() {
    let policy = InactivityPolicy::new(MAX_WINDOW_DAYS);

    let cutoff = policy.cutoff(now()).unwrap();

    assert_eq!(cutoff, now() - Duration::days(i64::from(MAX_WINDOW_DAYS)));
}

#[test]
fn test_out_of_range_window_is_an_error_not_a_panic() {
    let policy = InactivityPolicy::new(100_000_000);

    assert!(matches!(policy.cutoff(now()), Err(DomainError::ConfigError(_))));
    assert!(matches!(
        policy.is_inactive(Vec::new(), now()),
        Err(DomainError::ConfigError(_))
    ));
}

#[test]
fn test_reminder_window_start() {
    assert_eq!(
        reminder_window_start(now(), 7).unwrap(),
        now() - Duration::days(7)
    );
    assert!(matches!(
        reminder_window_start(now(), u32::MAX),
        Err(DomainError::ConfigError(_))
    ));
}
