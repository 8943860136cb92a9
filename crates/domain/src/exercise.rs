use crate::{Name, Set};

/// One exercise occurrence within a workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: Name,
    pub sets: Vec<Set>,
}

impl Exercise {
    /// Heaviest numeric weight lifted across this occurrence's sets.
    ///
    /// `None` when no set carries a numeric weight (bodyweight-only work).
    /// Such occurrences contribute nothing to weight analysis instead of
    /// counting as zero.
    #[must_use]
    pub fn max_weight(&self) -> Option<f32> {
        self.sets
            .iter()
            .filter_map(|set| set.weight.kg())
            .reduce(f32::max)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Reps, Weight};

    use super::*;

    fn exercise(weights: &[&str]) -> Exercise {
        Exercise {
            name: Name::new("Bench Press").unwrap(),
            sets: weights
                .iter()
                .map(|weight| Set {
                    reps: Reps::new(8).unwrap(),
                    weight: Weight::try_from(*weight).unwrap(),
                    rir: None,
                })
                .collect(),
        }
    }

    #[rstest]
    #[case::ascending(&["40", "42.5"], Some(42.5))]
    #[case::descending(&["50", "45", "40"], Some(50.0))]
    #[case::bodyweight_and_numeric(&["bodyweight", "60"], Some(60.0))]
    #[case::bodyweight_only(&["bodyweight"], None)]
    #[case::no_sets(&[], None)]
    fn test_exercise_max_weight(#[case] weights: &[&str], #[case] expected: Option<f32>) {
        assert_eq!(exercise(weights).max_weight(), expected);
    }
}
