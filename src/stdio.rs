use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::protocol::{JsonRpcError, JsonRpcResponse};
use crate::server::McpServer;

/// Drive `server` with newline-delimited JSON-RPC over an async reader/writer.
///
/// Requests are read and answered strictly one at a time; each response is
/// written as a single line and flushed before the next request is read.
/// At most `max_message_bytes + 1` bytes of a line are buffered; the rest of
/// an oversized line is discarded unread. Returns when the reader reaches EOF.
pub async fn serve<R, W>(server: &McpServer, mut reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let max_bytes = server.config().max_message_bytes;
    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
    let mut raw = Vec::new();

    loop {
        raw.clear();
        let n = (&mut reader).take(limit).read_until(b'\n', &mut raw).await?;
        if n == 0 {
            break;
        }

        if n > max_bytes {
            if raw.last() != Some(&b'\n') {
                discard_line(&mut reader).await?;
            }
            tracing::warn!(limit = max_bytes, "message too large");
            write_line(&mut writer, &parse_error_line()).await?;
            continue;
        }

        let trimmed = match std::str::from_utf8(&raw) {
            Ok(s) => s.trim(),
            Err(_) => {
                tracing::warn!("message is not valid UTF-8");
                write_line(&mut writer, &parse_error_line()).await?;
                continue;
            }
        };

        if trimmed.is_empty() {
            continue;
        }

        let out = server.handle_request(trimmed);
        write_line(&mut writer, &out).await?;
    }

    Ok(())
}

/// Skip input up to and including the next newline, or to EOF.
async fn discard_line<R>(reader: &mut R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let (consumed, found) = {
            let buf = reader.fill_buf().await?;
            if buf.is_empty() {
                return Ok(());
            }
            match buf.iter().position(|&b| b == b'\n') {
                Some(i) => (i + 1, true),
                None => (buf.len(), false),
            }
        };
        reader.consume(consumed);
        if found {
            return Ok(());
        }
    }
}

fn parse_error_line() -> String {
    JsonRpcResponse::error(None, JsonRpcError::parse_error()).to_json_string()
}

async fn write_line<W>(writer: &mut W, line: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}
