use chrono::{Duration, Local, NaiveDate};

use crate::{Workout, chart_label};

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Interval {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl Interval {
    /// Smallest interval containing all given dates. `None` when there are
    /// no dates.
    #[must_use]
    pub fn covering(dates: impl IntoIterator<Item = NaiveDate>) -> Option<Self> {
        let mut dates = dates.into_iter();
        let start = dates.next()?;
        let (first, last) = dates.fold((start, start), |(first, last), date| {
            (first.min(date), last.max(date))
        });

        Some(Interval { first, last })
    }

    /// Trailing window of `days` days ending today.
    #[must_use]
    pub fn last_days(days: u32) -> Self {
        let today = Local::now().date_naive();

        Interval {
            first: today - Duration::days(i64::from(days)),
            last: today,
        }
    }

    /// Whether the date lies within the interval. Both ends are inclusive.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.first..=self.last).contains(&date)
    }
}

impl From<std::ops::RangeInclusive<NaiveDate>> for Interval {
    fn from(value: std::ops::RangeInclusive<NaiveDate>) -> Self {
        Interval {
            first: *value.start(),
            last: *value.end(),
        }
    }
}

/// Search input of the progress view: a free-text exercise name pattern
/// and the date interval to analyze.
pub struct ProgressQuery {
    pub name: String,
    pub interval: Interval,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct WeightProgress {
    pub points: Vec<(NaiveDate, f32)>,
    pub summary: ProgressSummary,
}

impl WeightProgress {
    /// Chart axis labels, one `M/D` label per point.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|(date, _)| chart_label(*date))
            .collect()
    }

    /// Chart values, one weight per point.
    #[must_use]
    pub fn weights(&self) -> Vec<f32> {
        self.points.iter().map(|(_, weight)| *weight).collect()
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct ProgressSummary {
    pub count: usize,
    pub first: f32,
    pub last: f32,
    pub delta: f32,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum QueryError {
    #[error("Exercise name must not be empty")]
    EmptyName,
}

/// Computes the weight progression for one exercise over an interval.
///
/// Workouts dated within the inclusive interval contribute one point per
/// exercise occurrence whose name contains the trimmed pattern
/// case-insensitively: the occurrence's heaviest numeric weight.
/// Occurrences without a numeric weight are dropped, never counted as
/// zero. Points are ordered by date; points of equal date keep the order
/// in which their records appear in `workouts`.
///
/// Returns `Err` for an empty pattern and `Ok(None)` when no points
/// remain. An empty result is a regular outcome, not a failure: the
/// caller distinguishes invalid input, nothing to show, and a populated
/// chart.
pub fn weight_progress(
    workouts: &[Workout],
    query: &ProgressQuery,
) -> Result<Option<WeightProgress>, QueryError> {
    let pattern = query.name.trim();

    if pattern.is_empty() {
        return Err(QueryError::EmptyName);
    }

    let mut points = Vec::new();

    for workout in workouts {
        if !query.interval.contains(workout.date) {
            continue;
        }

        for exercise in &workout.exercises {
            if !exercise.name.matches(pattern) {
                continue;
            }

            if let Some(weight) = exercise.max_weight() {
                points.push((workout.date, weight));
            }
        }
    }

    points.sort_by_key(|(date, _)| *date);

    if points.is_empty() {
        return Ok(None);
    }

    let summary = summarize(&points);

    Ok(Some(WeightProgress { points, summary }))
}

fn summarize(points: &[(NaiveDate, f32)]) -> ProgressSummary {
    let first = points.first().map_or(0.0, |(_, weight)| *weight);
    let last = points.last().map_or(0.0, |(_, weight)| *weight);

    ProgressSummary {
        count: points.len(),
        first,
        last,
        delta: ((last - first) * 10.0).round() / 10.0,
    }
}
