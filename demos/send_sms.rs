use std::io;

use twilio_sms::{SendOutcome, SmsSender};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let phone = std::env::var("DEMO_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DEMO_TO environment variable is required",
        )
    })?;
    let message = std::env::var("DEMO_MESSAGE")
        .unwrap_or_else(|_| "Hello from the twilio-sms demo.".to_owned());

    // Credentials come from TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN and TWILIO_PHONE_NUMBER.
    match SmsSender::new().send(&phone, &message, None).await {
        SendOutcome::Success { sid } => println!("sent: {sid}"),
        SendOutcome::Failure { error } => {
            return Err(io::Error::other(error).into());
        }
    }

    Ok(())
}
