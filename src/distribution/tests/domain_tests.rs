//! Domain-focused tests for employee and task behaviour.

use crate::distribution::domain::{
    DistributionDomainError, Employee, FullName, ParseSortDirectionError, ParseTaskStatusError,
    SortDirection, Task, TaskId, TaskStatus,
};
use chrono::{Duration, Utc};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn full_name_trims_and_preserves_case() {
    let fio = FullName::new("  Ivanov Ivan Ivanovich ").expect("valid full name");
    assert_eq!(fio.as_str(), "Ivanov Ivan Ivanovich");
}

#[rstest]
fn full_name_rejects_empty_input() {
    let result = FullName::new("   ");
    assert_eq!(result, Err(DistributionDomainError::EmptyFullName));
}

#[rstest]
fn full_name_rejects_overlong_input() {
    let overlong = "x".repeat(256);
    let result = FullName::new(overlong.clone());
    assert_eq!(
        result,
        Err(DistributionDomainError::FullNameTooLong(overlong))
    );
}

#[rstest]
#[case(TaskStatus::New, "new")]
#[case(TaskStatus::InProgress, "in_progress")]
#[case(TaskStatus::Done, "done")]
fn task_status_round_trips_through_storage_form(
    #[case] status: TaskStatus,
    #[case] stored: &str,
) {
    assert_eq!(status.as_str(), stored);
    assert_eq!(TaskStatus::try_from(stored), Ok(status));
}

#[rstest]
fn task_status_rejects_unknown_value() {
    let result = TaskStatus::try_from("archived");
    assert_eq!(result, Err(ParseTaskStatusError("archived".to_owned())));
}

#[rstest]
#[case("ASC", SortDirection::Asc)]
#[case("desc", SortDirection::Desc)]
#[case("  Asc ", SortDirection::Asc)]
fn sort_direction_parses_case_insensitively(
    #[case] input: &str,
    #[case] expected: SortDirection,
) {
    assert_eq!(SortDirection::try_from(input), Ok(expected));
}

#[rstest]
fn sort_direction_rejects_unknown_value() {
    let result = SortDirection::try_from("sideways");
    assert_eq!(result, Err(ParseSortDirectionError("sideways".to_owned())));
}

#[rstest]
fn sort_direction_serializes_to_wire_form() {
    let serialized = serde_json::to_string(&SortDirection::Desc).expect("serializable");
    assert_eq!(serialized, "\"DESC\"");
}

#[rstest]
fn task_new_trims_description_and_stamps_timestamps(clock: DefaultClock) {
    let task = Task::new("  prepare onboarding docs  ", TaskStatus::New, &clock)
        .expect("valid task");

    assert_eq!(task.description(), "prepare onboarding docs");
    assert_eq!(task.status(), TaskStatus::New);
    assert_eq!(task.created_at(), task.updated_at());
}

#[rstest]
fn task_new_rejects_empty_description(clock: DefaultClock) {
    let result = Task::new("   ", TaskStatus::New, &clock);
    assert_eq!(
        result.err(),
        Some(DistributionDomainError::EmptyDescription)
    );
}

#[rstest]
fn task_status_serializes_snake_case() {
    let serialized = serde_json::to_string(&TaskStatus::InProgress).expect("serializable");
    assert_eq!(serialized, "\"in_progress\"");
}

#[rstest]
fn employee_change_task_status_touches_only_the_target(clock: DefaultClock) {
    let fio = FullName::new("Petrov Petr").expect("valid full name");
    let mut employee = Employee::new(fio);
    let first = Task::new("triage inbox", TaskStatus::New, &clock).expect("valid task");
    let second = Task::new("write report", TaskStatus::New, &clock).expect("valid task");
    let first_id = first.id();
    let second_id = second.id();
    employee.add_task(first);
    employee.add_task(second);

    let changed_at = clock.utc() + Duration::seconds(5);
    employee
        .change_task_status(first_id, TaskStatus::Done, changed_at)
        .expect("status change should succeed");

    let changed = employee.task(first_id).expect("first task present");
    assert_eq!(changed.status(), TaskStatus::Done);
    assert_eq!(changed.updated_at(), changed_at);

    let untouched = employee.task(second_id).expect("second task present");
    assert_eq!(untouched.status(), TaskStatus::New);
}

#[rstest]
fn employee_rejects_status_change_for_unassigned_task(clock: DefaultClock) {
    let fio = FullName::new("Petrov Petr").expect("valid full name");
    let mut employee = Employee::new(fio);
    let foreign_task_id = TaskId::new();

    let result = employee.change_task_status(foreign_task_id, TaskStatus::Done, Utc::now());

    assert_eq!(
        result,
        Err(DistributionDomainError::TaskNotAssigned(foreign_task_id))
    );
}
