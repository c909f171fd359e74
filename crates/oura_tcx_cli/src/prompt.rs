//! Interactive collaborators: token entry and workout selection.
//!
//! Both prompts read lines from stdin; EOF (or `q` at the selection) is
//! the cancellation signal and ends the run cleanly.

use async_trait::async_trait;
use chrono::DateTime;
use oura_client::Workout;
use secrecy::SecretString;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};

/// Label shown for one selectable workout: activity, start time, short id.
pub fn workout_label(workout: &Workout) -> String {
    let started = DateTime::parse_from_rfc3339(&workout.start_datetime)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| workout.start_datetime.clone());
    let short_id: String = workout.id.chars().take(8).collect();
    format!(
        "{} - {} (ID: {}...)",
        workout.activity.to_uppercase(),
        started,
        short_id
    )
}

#[async_trait]
pub trait Prompter: Send {
    /// Ask the operator for their access token; `None` means cancelled.
    async fn read_token(&mut self) -> std::io::Result<Option<SecretString>>;

    /// Offer the workouts for selection and return the chosen record;
    /// `None` means cancelled.
    async fn select_workout(&mut self, workouts: &[Workout])
    -> std::io::Result<Option<Workout>>;
}

/// Prompter over the process stdin/stdout.
pub struct StdinPrompter {
    reader: BufReader<Stdin>,
}

impl StdinPrompter {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
        }
    }

    async fn read_trimmed_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl Default for StdinPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn ask(message: &str) -> std::io::Result<()> {
    use std::io::Write;
    let mut out = std::io::stdout();
    write!(out, "{message}")?;
    out.flush()
}

#[async_trait]
impl Prompter for StdinPrompter {
    async fn read_token(&mut self) -> std::io::Result<Option<SecretString>> {
        ask("Enter your Oura personal access token: ")?;
        match self.read_trimmed_line().await? {
            Some(token) if !token.is_empty() => Ok(Some(SecretString::new(token.into()))),
            _ => Ok(None),
        }
    }

    async fn select_workout(
        &mut self,
        workouts: &[Workout],
    ) -> std::io::Result<Option<Workout>> {
        println!("Select a workout to export:");
        for (index, workout) in workouts.iter().enumerate() {
            println!("  {}) {}", index + 1, workout_label(workout));
        }
        loop {
            ask(&format!("Choice [1-{}] (q to quit): ", workouts.len()))?;
            let Some(input) = self.read_trimmed_line().await? else {
                return Ok(None);
            };
            if input.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match input.parse::<usize>() {
                Ok(choice) if (1..=workouts.len()).contains(&choice) => {
                    return Ok(Some(workouts[choice - 1].clone()));
                }
                _ => println!("Enter a number between 1 and {}.", workouts.len()),
            }
        }
    }
}
