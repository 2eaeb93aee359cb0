use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::{parse_partial_head, parse_request_head, ParseError, RequestHead};
use crate::routing::Dispatcher;

pub struct Connection<'a> {
    stream: TcpStream,
    buffer: Vec<u8>,
    dispatcher: Dispatcher<'a>,
}

impl<'a> Connection<'a> {
    pub fn new(stream: TcpStream, dispatcher: Dispatcher<'a>) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(4096),
            dispatcher,
        }
    }

    /// Serves exactly one request on this connection, then closes it.
    ///
    /// Reads the request head, hands the target to the dispatcher, and lets
    /// the stream close on drop. Closing on every exit path is guaranteed by
    /// ownership of the stream.
    pub async fn serve(mut self) -> anyhow::Result<()> {
        let head = match self.read_head().await? {
            Some(head) => head,
            None => {
                // Client connected and went away without a request line
                return Ok(());
            }
        };

        tracing::info!(method = %head.method, target = %head.target, "Request");

        self.dispatcher
            .dispatch(&head.target, &mut self.stream)
            .await
    }

    async fn read_head(&mut self) -> anyhow::Result<Option<RequestHead>> {
        loop {
            // Try parsing whatever we already have
            match parse_request_head(&self.buffer) {
                Ok((head, consumed)) => {
                    self.buffer.drain(..consumed);
                    return Ok(Some(head));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            // Read more data
            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }

                // Stream ended without the head terminator; fall back to the
                // bare request line if one arrived
                return match parse_partial_head(&self.buffer) {
                    Ok(head) => Ok(Some(head)),
                    Err(e) => Err(anyhow::anyhow!("HTTP parse error: {:?}", e)),
                };
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}
