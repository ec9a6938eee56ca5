use anyhow::{bail, Context, Result};
use ats_backend::domain::model::{LoginResponse, RegisterResponse};
use reqwest::StatusCode;
use serde_json::json;

/// 對執行中的伺服器跑一輪註冊/登入流程
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:3000".to_string());
    let client = reqwest::Client::new();

    let suffix = chrono::Utc::now().timestamp_millis();
    let username = format!("smoke_{}", suffix);
    let email = format!("smoke_{}@example.com", suffix);

    println!("🚀 Testing auth endpoints at {}", base_url);

    let register_body = json!({
        "username": username,
        "email": email,
        "password": "smoke-password",
        "fullName": "Smoke Test",
        "userType": "recruiter"
    });

    let response = client
        .post(format!("{}/api/auth/register", base_url))
        .json(&register_body)
        .send()
        .await
        .context("register request failed")?;
    let status = response.status();
    if status != StatusCode::CREATED {
        bail!("register returned {}: {}", status, response.text().await?);
    }
    let registered: RegisterResponse = response.json().await?;
    println!("✅ Registered {} as {}", username, registered.user_id);

    let response = client
        .post(format!("{}/api/auth/register", base_url))
        .json(&register_body)
        .send()
        .await?;
    if response.status() != StatusCode::BAD_REQUEST {
        bail!("duplicate register returned {}", response.status());
    }
    println!("✅ Duplicate registration rejected");

    let response = client
        .post(format!("{}/api/auth/login", base_url))
        .json(&json!({ "username": username, "password": "smoke-password" }))
        .send()
        .await?;
    let status = response.status();
    if status != StatusCode::OK {
        bail!("login returned {}: {}", status, response.text().await?);
    }
    let login: LoginResponse = response.json().await?;
    if login.user.id != registered.user_id {
        bail!("login returned user {} but registered {}", login.user.id, registered.user_id);
    }
    println!("✅ Logged in as {} ({})", login.user.username, login.user.user_type);

    let response = client
        .post(format!("{}/api/auth/login", base_url))
        .json(&json!({ "username": username, "password": "wrong" }))
        .send()
        .await?;
    if response.status() != StatusCode::UNAUTHORIZED {
        bail!("bad password login returned {}", response.status());
    }
    println!("✅ Wrong password rejected");

    println!("\n🎉 Smoke test passed");
    Ok(())
}
