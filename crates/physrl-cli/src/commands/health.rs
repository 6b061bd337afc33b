//! Backend health check

use anyhow::Result;
use physrl_client::DiscretizeClient;

pub async fn run(client: &DiscretizeClient) -> Result<()> {
    println!("Backend: {}", client.base_url());

    let health = client.check_health().await?;
    println!("Status: {}", health.status);
    println!("Message: {}", health.message);

    Ok(())
}
