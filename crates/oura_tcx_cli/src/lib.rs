//! One-shot export of an Oura workout, with its heart-rate series, to a
//! TCX file.
//!
//! The run is strictly sequential: fetch the workout history, narrow it
//! to the most recent entries, let the operator pick one, fetch the
//! matching heart-rate window, build the document, write the file. The
//! document is fully assembled in memory before the single write, so a
//! failed run never leaves a partial file behind.

pub mod error;
pub mod prompt;
pub mod recent;
pub mod tcx;
pub mod xml;

use std::path::Path;

use oura_client::OuraClient;

use crate::error::{ExportError, RunOutcome};
use crate::prompt::Prompter;

/// Execute one export run against `client`, writing into `output_dir`.
pub async fn run<C>(
    client: &C,
    prompter: &mut dyn Prompter,
    output_dir: &Path,
) -> Result<RunOutcome, ExportError>
where
    C: OuraClient + ?Sized,
{
    tracing::info!("fetching recent workouts");
    let workouts = client.get_workouts().await?;
    let choices = recent::recent_workouts(workouts)?;
    if choices.is_empty() {
        return Ok(RunOutcome::NothingToExport);
    }

    let Some(workout) = prompter.select_workout(&choices).await? else {
        return Ok(RunOutcome::Cancelled);
    };

    tracing::info!(activity = %workout.activity, "fetching heart rate data");
    let samples = client
        .get_heartrate(&workout.start_datetime, &workout.end_datetime)
        .await?;

    let document = tcx::build_tcx(&workout, &samples)?;
    let path = output_dir.join(tcx::export_file_name(&workout));
    tokio::fs::write(&path, &document).await?;

    Ok(RunOutcome::Exported {
        path,
        sample_count: samples.len(),
    })
}
