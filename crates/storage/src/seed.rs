use chrono::NaiveDate;
use liftlog_domain::{Exercise, Name, Reps, Rir, Set, Weight, Workout};

/// Built-in sample data: one week of workouts, 9/12/2025 through
/// 9/18/2025, newest first.
#[must_use]
pub fn sample_workouts() -> Vec<Workout> {
    vec![
        workout(
            1,
            (2025, 9, 18),
            &[
                ("Bench Press", &[(5, "55", Some(1.0)), (5, "50", None)]),
                ("Barbell Row", &[(8, "60", Some(2.0))]),
                (
                    "Pull Ups",
                    &[(10, "bodyweight", None), (8, "bodyweight", Some(1.0))],
                ),
            ],
        ),
        workout(
            2,
            (2025, 9, 17),
            &[
                ("Bench Press", &[(5, "52.5", Some(1.5)), (5, "47.5", None)]),
                ("Squat", &[(5, "80", Some(2.0)), (5, "80", Some(1.5))]),
            ],
        ),
        workout(
            3,
            (2025, 9, 16),
            &[
                ("Bench Press", &[(6, "50", Some(2.0))]),
                ("Deadlift", &[(5, "100", Some(2.0)), (3, "105", Some(1.0))]),
                ("Shoulder Press", &[(8, "30", None)]),
            ],
        ),
        workout(
            4,
            (2025, 9, 15),
            &[
                ("Bench Press", &[(6, "47.5", Some(2.0)), (8, "42.5", None)]),
                ("Pull Ups", &[(8, "bodyweight", None)]),
            ],
        ),
        workout(
            5,
            (2025, 9, 14),
            &[
                ("Bench Press", &[(8, "45", Some(2.5))]),
                ("Squat", &[(5, "75", Some(2.0))]),
                ("Barbell Row", &[(8, "55", None)]),
            ],
        ),
        workout(
            6,
            (2025, 9, 13),
            &[
                ("Bench Press", &[(8, "42.5", Some(3.0)), (8, "40", None)]),
                ("Deadlift", &[(5, "95", Some(2.5))]),
                ("Shoulder Press", &[(8, "27.5", Some(2.0))]),
            ],
        ),
        workout(
            7,
            (2025, 9, 12),
            &[
                (
                    "Bench Press",
                    &[(8, "40", Some(3.0)), (8, "40", Some(2.0)), (8, "40", Some(2.0))],
                ),
                ("Squat", &[(5, "70", Some(2.5))]),
                ("Pull Ups", &[(6, "bodyweight", None)]),
            ],
        ),
    ]
}

type SampleSet = (u32, &'static str, Option<f32>);

fn workout(id: u128, date: (i32, u32, u32), exercises: &[(&str, &[SampleSet])]) -> Workout {
    Workout {
        id: id.into(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        exercises: exercises
            .iter()
            .map(|(name, sets)| exercise(name, sets))
            .collect(),
    }
}

fn exercise(name: &str, sets: &[SampleSet]) -> Exercise {
    Exercise {
        name: Name::new(name).unwrap(),
        sets: sets
            .iter()
            .map(|(reps, weight, rir)| Set {
                reps: Reps::new(*reps).unwrap(),
                weight: Weight::try_from(*weight).unwrap(),
                rir: rir.map(|value| Rir::new(value).unwrap()),
            })
            .collect(),
    }
}
