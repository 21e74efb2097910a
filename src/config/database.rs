use bson::doc;
use mongodb::Client;
use tracing::debug;

/// Connects to the deployment at `uri` and verifies it is reachable.
///
/// The driver connects lazily, so without the ping a bad URI or unreachable
/// host would only surface at the first real operation.
pub async fn connect(uri: &str) -> mongodb::error::Result<Client> {
    let client = Client::with_uri_str(uri).await?;
    client.database("admin").run_command(doc! { "ping": 1 }).await?;
    debug!("connected to MongoDB deployment");

    Ok(client)
}
