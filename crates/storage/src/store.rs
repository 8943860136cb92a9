use chrono::NaiveDate;
use liftlog_domain::{Exercise, StoreError, Workout, WorkoutRepository};
use log::{debug, error};
use uuid::Uuid;

use crate::seed;

/// In-memory workout log, newest first.
///
/// The log lives for the process lifetime and is append-only. Appending
/// requires exclusive access; a concurrent host wraps the store in its
/// own lock.
#[derive(Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    #[must_use]
    pub fn new(workouts: Vec<Workout>) -> Self {
        Self { workouts }
    }

    /// The store seeded with the built-in sample workouts.
    #[must_use]
    pub fn with_sample_data() -> Self {
        let workouts = seed::sample_workouts();
        debug!("seeding workout store with {} sample workouts", workouts.len());
        Self::new(workouts)
    }
}

impl WorkoutRepository for WorkoutStore {
    fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Accepts a new record, assigns it a fresh id and prepends it.
    ///
    /// The only validation is the defensive floor: a candidate without a
    /// single non-empty exercise is rejected. Field validity is the
    /// capture layer's contract.
    fn add_workout(
        &mut self,
        date: NaiveDate,
        exercises: Vec<Exercise>,
    ) -> Result<Workout, StoreError> {
        if exercises.iter().all(|exercise| exercise.sets.is_empty()) {
            let err = StoreError::EmptyWorkout;
            error!("failed to add workout: {err}");
            return Err(err);
        }

        let workout = Workout {
            id: Uuid::new_v4().into(),
            date,
            exercises,
        };
        self.workouts.insert(0, workout.clone());

        Ok(workout)
    }
}
