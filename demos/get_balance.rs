use cloudsms::Envelope;
use cloudsms_demos::client_from_env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = client_from_env()?;

    match client.get_balance().await {
        Envelope::Success { data } => println!("remaining balance: {data}"),
        Envelope::Error { message } => eprintln!("balance lookup failed: {message}"),
    }

    Ok(())
}
