use anyhow::{bail, Result};
use parthenon_client::NetworkSession;
use parthenon_types::network::LATENCY_UNKNOWN;
use std::sync::Arc;

pub async fn run_status(session: &Arc<NetworkSession>) -> Result<()> {
    // Best-effort: a dead node still yields the cached snapshot.
    session.connect(None).await;
    let status = session.refresh_status().await;

    println!("Network:   {} ({})", status.network_name, status.network);
    println!("Endpoint:  {}", session.transport().endpoint());
    println!("Connected: {}", status.connected);
    println!("Height:    {}", status.block_height);
    println!("Peers:     {}", status.peer_count);
    if status.latency_ms == LATENCY_UNKNOWN {
        println!("Latency:   unknown");
    } else {
        println!("Latency:   {} ms", status.latency_ms);
    }
    if !status.node_version.is_empty() {
        println!("Version:   {}", status.node_version);
    }
    Ok(())
}

pub async fn run_connect(session: &Arc<NetworkSession>) -> Result<()> {
    if session.connect(None).await {
        println!(
            "Connected to {} (height {})",
            session.transport().endpoint(),
            session.block_height()
        );
        Ok(())
    } else {
        bail!("failed to connect to {}", session.transport().endpoint())
    }
}
