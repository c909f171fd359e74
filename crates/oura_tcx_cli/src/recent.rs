//! Ordering and truncation of the fetched workout history.

use chrono::{DateTime, FixedOffset};
use oura_client::Workout;

use crate::error::ExportError;

/// At most this many workouts are offered for selection.
pub const MAX_CHOICES: usize = 5;

/// Order workouts by start time, newest first, and keep the `MAX_CHOICES`
/// most recent.
///
/// A malformed start timestamp on any workout fails the whole batch.
/// Workouts with identical start times keep the order the API emitted.
/// An empty input is a normal empty output, not an error.
pub fn recent_workouts(workouts: Vec<Workout>) -> Result<Vec<Workout>, ExportError> {
    let mut keyed: Vec<(DateTime<FixedOffset>, Workout)> = Vec::with_capacity(workouts.len());
    for workout in workouts {
        let start = DateTime::parse_from_rfc3339(&workout.start_datetime).map_err(|_| {
            ExportError::MalformedTimestamp {
                id: workout.id.clone(),
                field: "start",
                value: workout.start_datetime.clone(),
            }
        })?;
        keyed.push((start, workout));
    }

    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.truncate(MAX_CHOICES);
    Ok(keyed.into_iter().map(|(_, workout)| workout).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout(id: &str, start: &str) -> Workout {
        Workout {
            id: id.into(),
            activity: "running".into(),
            start_datetime: start.into(),
            end_datetime: "2024-06-01T09:00:00+00:00".into(),
            calories: 100.0,
            distance: None,
        }
    }

    #[test]
    fn sorts_newest_first() {
        let input = vec![
            workout("old", "2024-05-01T08:00:00+00:00"),
            workout("new", "2024-06-01T08:00:00+00:00"),
            workout("mid", "2024-05-15T08:00:00+00:00"),
        ];
        let out = recent_workouts(input).expect("sorted");
        let ids: Vec<&str> = out.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }

    #[test]
    fn equal_timestamps_keep_source_order() {
        let input = vec![
            workout("first", "2024-06-01T08:00:00+00:00"),
            workout("second", "2024-06-01T08:00:00+00:00"),
            workout("third", "2024-06-01T08:00:00+00:00"),
        ];
        let out = recent_workouts(input).expect("sorted");
        let ids: Vec<&str> = out.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn truncates_to_five_most_recent() {
        let input: Vec<Workout> = (1..=7)
            .map(|day| {
                workout(
                    &format!("w{day}"),
                    &format!("2024-06-{day:02}T08:00:00+00:00"),
                )
            })
            .collect();
        let out = recent_workouts(input).expect("sorted");
        let ids: Vec<&str> = out.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["w7", "w6", "w5", "w4", "w3"]);
    }

    #[test]
    fn fewer_than_five_returns_all() {
        let input = vec![
            workout("a", "2024-06-01T08:00:00+00:00"),
            workout("b", "2024-06-02T08:00:00+00:00"),
        ];
        assert_eq!(recent_workouts(input).expect("sorted").len(), 2);
    }

    #[test]
    fn empty_input_is_a_normal_empty_output() {
        assert!(recent_workouts(Vec::new()).expect("empty").is_empty());
    }

    #[test]
    fn malformed_start_fails_the_whole_batch() {
        let input = vec![
            workout("good", "2024-06-01T08:00:00+00:00"),
            workout("bad", "last tuesday"),
        ];
        let err = recent_workouts(input).unwrap_err();
        match err {
            ExportError::MalformedTimestamp { id, field, .. } => {
                assert_eq!(id, "bad");
                assert_eq!(field, "start");
            }
            other => panic!("expected MalformedTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn offset_timestamps_order_by_instant_not_by_text() {
        // 08:00+02:00 is 06:00Z, so the 07:00Z workout is more recent.
        let input = vec![
            workout("offset", "2024-06-01T08:00:00+02:00"),
            workout("utc", "2024-06-01T07:00:00+00:00"),
        ];
        let out = recent_workouts(input).expect("sorted");
        let ids: Vec<&str> = out.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["utc", "offset"]);
    }
}
