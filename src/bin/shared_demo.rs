use serde::Deserialize;
use starter_api::shared::{
    ApiResponse, MockUser, SystemClock, generate_greeting, generate_mock_user, is_valid_email,
};

/// Server payload of `GET /api/shared/all`. Declared locally on purpose:
/// this binary consumes the wire format, the same way any other client
/// would.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AllTestData {
    greeting: String,
    user: MockUser,
    email_validation: EmailValidationChecks,
}

#[derive(Debug, Deserialize)]
struct EmailValidationChecks {
    valid: bool,
    invalid: bool,
}

/// Demo client for the shared utilities.
///
/// Runs every shared function locally, then fetches the backend's
/// `/api/shared/all` aggregate and prints both so the outputs can be
/// compared side by side. A missing backend is reported, not fatal: the
/// local half of the demo still runs.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let clock = SystemClock;
    let name = "Demo User";
    let user_id = 1;
    let email = "test@example.com";

    println!("Shared utilities, called in-process:");
    println!("  greeting:   {}", generate_greeting(name, &clock));

    let user = generate_mock_user(user_id, &clock);
    println!("  mock user:  {}", serde_json::to_string_pretty(&user)?);
    println!("  {} valid: {}", email, is_valid_email(email));
    println!("  invalid-email valid: {}", is_valid_email("invalid-email"));

    let base_url =
        std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let url = format!("{}/api/shared/all", base_url);

    println!();
    println!("Same utilities, served by GET {}:", url);

    match fetch_all(&url).await {
        Ok(response) => {
            println!("  success:  {}", response.success);
            println!("  message:  {}", response.message);
            if let Some(data) = response.data {
                println!("  greeting: {}", data.inner.greeting);
                println!(
                    "  user:     {}",
                    serde_json::to_string_pretty(&data.inner.user)?
                );
                println!(
                    "  emailValidation: valid={} invalid={}",
                    data.inner.email_validation.valid, data.inner.email_validation.invalid
                );
                println!("  timestamp: {}", data.timestamp);
            }
        }
        Err(err) => {
            eprintln!("  failed to fetch API data: {}", err);
            eprintln!("  is the backend running at {}?", base_url);
        }
    }

    Ok(())
}

async fn fetch_all(url: &str) -> Result<ApiResponse<AllTestData>, reqwest::Error> {
    reqwest::get(url).await?.json().await
}
