use oura_client::{OuraClient, config::Config, http_client::ReqwestOuraClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::from_env();
    let token = cfg.token.ok_or("OURA_TOKEN is not set")?;
    let client = ReqwestOuraClient::new(&cfg.base_url, token);

    let workouts = client
        .get_workouts()
        .await
        .map_err(|e| format!("failed to fetch workouts: {}", e))?;

    if workouts.is_empty() {
        println!("No workouts returned (check credentials)");
        return Ok(());
    }

    println!("Workouts ({}):", workouts.len());
    for w in workouts {
        println!("- {} — {} ({})", w.id, w.activity, w.start_datetime);
    }

    Ok(())
}
