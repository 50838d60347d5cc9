use cloudsms::{ContactListId, SendCampaign};
use cloudsms_demos::{client_from_env, required_env};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = client_from_env()?;

    let lists = required_env("CLOUDSMS_CONTACT_LISTS")?;
    let message = std::env::var("CLOUDSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the cloudsms campaign demo.".to_owned());

    let ids = lists
        .split(',')
        .map(str::trim)
        .filter(|it| !it.is_empty())
        .map(|it| match it.parse::<i64>() {
            Ok(number) => ContactListId::from(number),
            Err(_) => ContactListId::from(it),
        })
        .collect::<Vec<_>>();

    let envelope = client.send_campaign(SendCampaign::new(ids, message)).await;
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}
