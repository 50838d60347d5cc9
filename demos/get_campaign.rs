use cloudsms_demos::{client_from_env, required_env};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = client_from_env()?;
    let campaign_id = required_env("CLOUDSMS_CAMPAIGN_ID")?;

    let envelope = client.get_campaign(campaign_id).await;
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}
