use anyhow::Result;
use deckguard_config::Config;
use deckguard_security::Redactor;
use deckguard_server::OutlineServer;

pub async fn handle(config: &Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    // Rules are validated once here, never per request
    let rules = config.rule_set()?;
    tracing::info!(rules = rules.len(), "Loaded redaction rules");

    println!("Starting outline server on {}:{}", host, port);
    OutlineServer::serve(Redactor::new(rules), &host, port).await?;

    Ok(())
}
