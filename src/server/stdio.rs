use std::sync::Arc;

use tokio::io::{self, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::info;

use super::rpc;
use crate::handlers::ToolRegistry;

/// Newline-delimited JSON-RPC over stdin/stdout. Logging stays on stderr.
pub async fn serve_stdio(registry: Arc<ToolRegistry>) -> io::Result<()> {
    info!(tools = registry.len(), "mcp server listening on stdio");
    run(&registry, io::stdin(), io::stdout()).await
}

pub async fn run<R, W>(registry: &ToolRegistry, reader: R, mut writer: W) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(response) = rpc::handle_message(registry, line).await {
            let mut out = serde_json::to_vec(&response)?;
            out.push(b'\n');
            writer.write_all(&out).await?;
            writer.flush().await?;
        }
    }
    info!("stdin closed, stopping");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Credentials, ResolvedToolSet};
    use crate::services::BinanceClient;
    use crate::types::ToolName;
    use serde_json::Value;

    fn registry() -> ToolRegistry {
        let credentials = Credentials {
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            base_url: None,
            testnet: true,
            proxy_url: None,
        };
        let client = BinanceClient::connect(&credentials).unwrap();
        let tools: ResolvedToolSet = [ToolName::GetSymbolTicker].into_iter().collect();
        ToolRegistry::new(Arc::new(client), &tools)
    }

    #[tokio::test]
    async fn answers_requests_line_by_line() {
        let input = concat!(
            "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n",
            "\n",
            "{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n",
            "{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"tools/list\"}\n",
        );
        let mut output = Vec::new();
        run(&registry(), input.as_bytes(), &mut output).await.unwrap();

        let replies: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0]["id"], 1);
        assert_eq!(replies[1]["result"]["tools"][0]["name"], "get_symbol_ticker");
    }
}
