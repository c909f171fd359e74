//! TCX (Training Center XML) document assembly.
//!
//! [`build_tcx`] is a pure function of the workout and its heart-rate
//! samples: identical inputs produce byte-identical output.

use chrono::{DateTime, FixedOffset};
use oura_client::{HeartRateSample, Workout};

use crate::error::ExportError;
use crate::xml::Element;

const TCX_NAMESPACE: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2 http://www.garmin.com/xmlschemas/TrainingCenterDatabasev2.xsd";

// Workout-independent source descriptions required by consuming platforms.
const CREATOR_NAME: &str = "Oura Ring";
const AUTHOR_NAME: &str = "oura-tcx-export";

/// File name for an exported workout.
pub fn export_file_name(workout: &Workout) -> String {
    format!("oura-workout-{}.tcx", workout.id)
}

/// Build the full TCX document for one workout and its aligned samples.
///
/// Every sample becomes exactly one `Trackpoint`, in input order. A sample
/// missing its timestamp or bpm renders the corresponding field as an
/// empty text node rather than failing the export.
pub fn build_tcx(workout: &Workout, samples: &[HeartRateSample]) -> Result<String, ExportError> {
    let total_time = duration_seconds(workout)?;

    let mut track = Element::new("Track");
    for sample in samples {
        track.push(
            Element::new("Trackpoint")
                .child(Element::new("Time").text(time_text(sample.timestamp.as_deref())))
                .child(
                    Element::new("HeartRateBpm")
                        .child(Element::new("Value").text(bpm_text(sample.bpm))),
                ),
        );
    }

    let lap = Element::new("Lap")
        .attr("StartTime", workout.start_datetime.clone())
        .child(Element::new("TotalTimeSeconds").text(total_time.to_string()))
        .child(Element::new("DistanceMeters").text(distance_text(workout.distance)))
        .child(Element::new("Calories").text(rounded_text(workout.calories)))
        .child(Element::new("Intensity").text("Active"))
        .child(Element::new("TriggerMethod").text("Manual"))
        .child(track);

    let activity = Element::new("Activity")
        .attr("Sport", "Other")
        .child(Element::new("Id").text(workout.start_datetime.clone()))
        .child(lap)
        .child(
            Element::new("Creator")
                .attr("xsi:type", "Device_t")
                .child(Element::new("Name").text(CREATOR_NAME)),
        );

    let document = Element::new("TrainingCenterDatabase")
        .attr("xmlns", TCX_NAMESPACE)
        .attr("xmlns:xsi", XSI_NAMESPACE)
        .attr("xsi:schemaLocation", SCHEMA_LOCATION)
        .child(Element::new("Activities").child(activity))
        .child(
            Element::new("Author")
                .attr("xsi:type", "Application_t")
                .child(Element::new("Name").text(AUTHOR_NAME)),
        );

    Ok(document.to_document()?)
}

/// Whole seconds between start and end, rounded to the nearest second.
/// A negative or zero result passes through unchanged.
fn duration_seconds(workout: &Workout) -> Result<i64, ExportError> {
    let start = parse_timestamp(workout, "start", &workout.start_datetime)?;
    let end = parse_timestamp(workout, "end", &workout.end_datetime)?;
    let millis = (end - start).num_milliseconds();
    Ok((millis as f64 / 1000.0).round() as i64)
}

fn parse_timestamp(
    workout: &Workout,
    field: &'static str,
    value: &str,
) -> Result<DateTime<FixedOffset>, ExportError> {
    DateTime::parse_from_rfc3339(value).map_err(|_| ExportError::MalformedTimestamp {
        id: workout.id.clone(),
        field,
        value: value.to_string(),
    })
}

/// Nearest-integer text for calorie and duration values.
fn rounded_text(value: f64) -> String {
    (value.round() as i64).to_string()
}

/// `DistanceMeters` text; the API omits distance for many activity types.
fn distance_text(distance: Option<f64>) -> String {
    match distance {
        Some(meters) => meters.to_string(),
        None => "0".to_string(),
    }
}

fn bpm_text(bpm: Option<i64>) -> String {
    bpm.map(|b| b.to_string()).unwrap_or_default()
}

fn time_text(timestamp: Option<&str>) -> String {
    timestamp.unwrap_or_default().to_string()
}
