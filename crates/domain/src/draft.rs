use crate::{Exercise, Name, Reps, Rir, Set, Weight};

/// Raw state of one set row in the capture form. Every field holds the
/// text exactly as typed; empty means not filled in.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SetDraft {
    pub reps: String,
    pub weight: String,
    pub rir: String,
}

impl SetDraft {
    /// Parses the row into a set.
    ///
    /// Reps and weight must both be present and valid. A malformed rir is
    /// ignored rather than discarding the row: it is an optional
    /// annotation, not part of the load.
    #[must_use]
    pub fn parse(&self) -> Option<Set> {
        let reps = Reps::try_from(self.reps.as_str()).ok()?;
        let weight = Weight::try_from(self.weight.as_str()).ok()?;

        Some(Set {
            reps,
            weight,
            rir: Rir::try_from(self.rir.as_str()).ok(),
        })
    }
}

/// Raw state of one exercise block in the capture form.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExerciseDraft {
    pub name: String,
    pub sets: Vec<SetDraft>,
}

impl ExerciseDraft {
    /// Parses the block into an exercise, dropping incomplete set rows.
    ///
    /// `None` unless the name is valid and at least one set survives.
    /// Surviving sets keep their order.
    #[must_use]
    pub fn parse(&self) -> Option<Exercise> {
        let name = Name::new(&self.name).ok()?;
        let sets = self
            .sets
            .iter()
            .filter_map(SetDraft::parse)
            .collect::<Vec<_>>();

        if sets.is_empty() {
            return None;
        }

        Some(Exercise { name, sets })
    }
}

/// Cleans the capture form state into exercises ready to be stored.
///
/// Incomplete rows and blocks are dropped silently; the form always
/// offers trailing blank rows, so their presence is expected. The error
/// is reserved for a form with nothing storable at all.
pub fn clean_exercises(drafts: &[ExerciseDraft]) -> Result<Vec<Exercise>, DraftError> {
    let exercises = drafts
        .iter()
        .filter_map(ExerciseDraft::parse)
        .collect::<Vec<_>>();

    if exercises.is_empty() {
        return Err(DraftError::NoValidExercises);
    }

    Ok(exercises)
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DraftError {
    #[error("Workout must contain at least one exercise with valid sets")]
    NoValidExercises,
}
