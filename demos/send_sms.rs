use cloudsms::{Recipient, SendSms};
use cloudsms_demos::{client_from_env, required_env};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = client_from_env()?;

    // Comma-separated list sends one message to every number.
    let phones = required_env("CLOUDSMS_PHONE")?;
    let message = std::env::var("CLOUDSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the cloudsms demo.".to_owned());

    let mut numbers = phones
        .split(',')
        .map(|it| it.trim().to_owned())
        .filter(|it| !it.is_empty())
        .collect::<Vec<_>>();
    let recipient = match numbers.len() {
        1 => Recipient::One(numbers.swap_remove(0)),
        _ => Recipient::Many(numbers),
    };
    let mut request = SendSms::new(recipient, message);

    if let Ok(minutes) = std::env::var("CLOUDSMS_DELAY_MINUTES") {
        let minutes: i64 = minutes.parse()?;
        let at = chrono::Local::now() + chrono::Duration::minutes(minutes);
        request = request.schedule_time(at);
    }

    let envelope = client.send_sms(request).await;
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}
