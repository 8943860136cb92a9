use std::collections::BTreeSet;

use chrono::NaiveDate;
use derive_more::Deref;
use uuid::Uuid;

use crate::Exercise;

/// Access to the ordered workout log.
///
/// Records are ordered newest first. The log is append-only: accepted
/// records are never updated or deleted, and their relative order never
/// changes.
pub trait WorkoutRepository {
    fn workouts(&self) -> &[Workout];
    fn add_workout(
        &mut self,
        date: NaiveDate,
        exercises: Vec<Exercise>,
    ) -> Result<Workout, StoreError>;

    /// All distinct exercise names across the log, lower-cased.
    ///
    /// Recomputed on every call from the current records.
    #[must_use]
    fn exercise_names(&self) -> BTreeSet<String> {
        self.workouts()
            .iter()
            .flat_map(Workout::exercise_names)
            .collect()
    }

    /// Name completions for a partially typed exercise name.
    ///
    /// Empty or whitespace-only input yields no suggestions. Otherwise all
    /// distinct names containing the input case-insensitively, in sorted
    /// order.
    #[must_use]
    fn name_suggestions(&self, input: &str) -> Vec<String> {
        let pattern = input.trim().to_lowercase();

        if pattern.is_empty() {
            return Vec::new();
        }

        self.exercise_names()
            .into_iter()
            .filter(|name| name.contains(&pattern))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub date: NaiveDate,
    pub exercises: Vec<Exercise>,
}

impl Workout {
    /// This record's exercise names, lower-cased.
    #[must_use]
    pub fn exercise_names(&self) -> BTreeSet<String> {
        self.exercises
            .iter()
            .map(|exercise| exercise.name.to_lowercase())
            .collect()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("Workout must contain at least one exercise with sets")]
    EmptyWorkout,
}

/// Parses a date in the form `M/D/YYYY`.
///
/// Strict calendar parsing: month 13 or day 40 is rejected instead of
/// being wrapped into a neighboring date.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(value.trim(), "%m/%d/%Y").map_err(|_| DateError::Malformed)
}

/// Formats a date as `M/D/YYYY`, without zero padding.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Formats a date as `M/D`, the chart axis label form.
#[must_use]
pub fn chart_label(date: NaiveDate) -> String {
    date.format("%-m/%-d").to_string()
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DateError {
    #[error("Date must be a valid calendar date in the form M/D/YYYY")]
    Malformed,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Name, Reps, Set, Weight};

    use super::*;

    static WORKOUTS: std::sync::LazyLock<Vec<Workout>> = std::sync::LazyLock::new(|| {
        vec![
            workout(1, (2025, 9, 14), &[("Bench Press", "45"), ("Pull Ups", "bodyweight")]),
            workout(2, (2025, 9, 12), &[("bench press", "40"), ("Squat", "60")]),
            workout(3, (2025, 9, 13), &[("Shoulder Press", "25")]),
        ]
    });

    struct TestRepository {
        workouts: Vec<Workout>,
    }

    impl WorkoutRepository for TestRepository {
        fn workouts(&self) -> &[Workout] {
            &self.workouts
        }

        fn add_workout(
            &mut self,
            date: NaiveDate,
            exercises: Vec<Exercise>,
        ) -> Result<Workout, StoreError> {
            let workout = Workout {
                id: WorkoutID::nil(),
                date,
                exercises,
            };
            self.workouts.insert(0, workout.clone());
            Ok(workout)
        }
    }

    fn workout(id: u128, date: (i32, u32, u32), exercises: &[(&str, &str)]) -> Workout {
        Workout {
            id: id.into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            exercises: exercises
                .iter()
                .map(|(name, weight)| Exercise {
                    name: Name::new(name).unwrap(),
                    sets: vec![Set {
                        reps: Reps::new(8).unwrap(),
                        weight: Weight::try_from(*weight).unwrap(),
                        rir: None,
                    }],
                })
                .collect(),
        }
    }

    #[test]
    fn test_workout_exercise_names() {
        let workout = workout(
            1,
            (2025, 9, 12),
            &[("Bench Press", "40"), ("bench press", "42.5"), ("Squat", "60")],
        );
        assert_eq!(
            workout.exercise_names(),
            BTreeSet::from(["bench press".to_string(), "squat".to_string()])
        );
    }

    #[test]
    fn test_repository_exercise_names() {
        let repository = TestRepository {
            workouts: WORKOUTS.clone(),
        };
        let expected = BTreeSet::from([
            "bench press".to_string(),
            "pull ups".to_string(),
            "shoulder press".to_string(),
            "squat".to_string(),
        ]);
        assert_eq!(repository.exercise_names(), expected);
        assert_eq!(repository.exercise_names(), expected);
    }

    #[rstest]
    #[case::empty("", &[])]
    #[case::whitespace("   ", &[])]
    #[case::substring("press", &["bench press", "shoulder press"])]
    #[case::mixed_case_prefix("Pre", &["bench press", "shoulder press"])]
    #[case::padded(" squat ", &["squat"])]
    #[case::no_match("deadlift", &[])]
    fn test_repository_name_suggestions(#[case] input: &str, #[case] expected: &[&str]) {
        let repository = TestRepository {
            workouts: WORKOUTS.clone(),
        };
        assert_eq!(repository.name_suggestions(input), expected);
    }

    #[test]
    fn test_workout_id_nil() {
        assert!(WorkoutID::nil().is_nil());
        assert_eq!(WorkoutID::nil(), WorkoutID::default());
    }

    #[rstest]
    #[case("9/12/2025", Ok(NaiveDate::from_ymd_opt(2025, 9, 12).unwrap()))]
    #[case("09/03/2025", Ok(NaiveDate::from_ymd_opt(2025, 9, 3).unwrap()))]
    #[case(" 12/31/2025 ", Ok(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()))]
    #[case("13/40/2025", Err(DateError::Malformed))]
    #[case("2/30/2025", Err(DateError::Malformed))]
    #[case("9/12", Err(DateError::Malformed))]
    #[case("2025-09-12", Err(DateError::Malformed))]
    #[case("", Err(DateError::Malformed))]
    fn test_parse_date(#[case] value: &str, #[case] expected: Result<NaiveDate, DateError>) {
        assert_eq!(parse_date(value), expected);
    }

    #[rstest]
    #[case((2025, 9, 12), "9/12/2025")]
    #[case((2025, 12, 3), "12/3/2025")]
    fn test_format_date(#[case] date: (i32, u32, u32), #[case] expected: &str) {
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap()),
            expected
        );
    }

    #[rstest]
    #[case((2025, 9, 12), "9/12")]
    #[case((2025, 12, 3), "12/3")]
    fn test_chart_label(#[case] date: (i32, u32, u32), #[case] expected: &str) {
        assert_eq!(
            chart_label(NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap()),
            expected
        );
    }
}
