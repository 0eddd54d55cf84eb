//! Reference feeds: collaborators that hand the core one ACMI text line at
//! a time, reading either a saved recording or a live Tacview stream.
//!

use std::collections::VecDeque;
use std::io::{BufReader, Read};
use std::path::Path;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader as AsyncBufReader};
use tokio::net::TcpStream;
use tracing::{debug, trace};

use crate::error::SourcesError;

/// Lines from a recording or a live stream, one at a time.
///
#[allow(async_fn_in_trait)]
pub trait ReferenceFeed {
    /// Next logical line, already stripped of its newline, or `None` at
    /// end of stream.
    async fn next_line(&mut self) -> Result<Option<String>, SourcesError>;
}

/// A `.acmi` (plain text) or `.zip.acmi` (zip-wrapped) recording read fully
/// into memory up front — recordings are small enough for this project's
/// purposes, and it keeps the feed itself free of lifetime-tied readers.
///
#[derive(Debug)]
pub struct FileFeed {
    lines: VecDeque<String>,
}

impl FileFeed {
    #[tracing::instrument]
    pub fn open(path: impl AsRef<Path> + std::fmt::Debug) -> Result<Self, SourcesError> {
        let path = path.as_ref();
        let is_zip = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(".zip.acmi") || n.ends_with(".zip"))
            .unwrap_or(false);

        let text = if is_zip {
            Self::read_zip_member(path)?
        } else {
            std::fs::read_to_string(path)?
        };

        debug!(lines = text.lines().count(), "recording loaded");
        Ok(FileFeed {
            lines: text.lines().map(str::to_string).collect(),
        })
    }

    fn read_zip_member(path: &Path) -> Result<String, SourcesError> {
        let file = std::fs::File::open(path)?;
        let mut archive = zip::ZipArchive::new(BufReader::new(file))?;

        let member_index = (0..archive.len())
            .find(|&i| {
                archive
                    .by_index(i)
                    .map(|f| f.name().ends_with(".acmi"))
                    .unwrap_or(false)
            })
            .ok_or_else(|| SourcesError::NoAcmiMember(path.display().to_string()))?;

        let mut member = archive.by_index(member_index)?;
        let mut text = String::new();
        member.read_to_string(&mut text)?;
        Ok(text)
    }
}

impl ReferenceFeed for FileFeed {
    async fn next_line(&mut self) -> Result<Option<String>, SourcesError> {
        Ok(self.lines.pop_front())
    }
}

/// Tacview's real-time telemetry protocol: a handshake over a plain TCP
/// socket, followed by a stream of newline-terminated ACMI lines.
///
#[derive(Debug)]
pub struct TcpFeed {
    stream: AsyncBufReader<TcpStream>,
}

impl TcpFeed {
    /// Connect to `addr` and perform the client handshake under `client_name`.
    #[tracing::instrument]
    pub async fn connect(addr: &str, client_name: &str) -> Result<Self, SourcesError> {
        let mut stream = TcpStream::connect(addr).await?;

        let handshake = format!("XtraLib.Stream.0\nTacview.RealTimeTelemetry.0\n{client_name}\n\0");
        stream.write_all(handshake.as_bytes()).await?;

        let mut reader = AsyncBufReader::new(stream);
        let mut server_handshake = Vec::new();
        reader.read_until(0, &mut server_handshake).await?;
        trace!(bytes = server_handshake.len(), "handshake complete");

        Ok(TcpFeed { stream: reader })
    }
}

impl ReferenceFeed for TcpFeed {
    async fn next_line(&mut self) -> Result<Option<String>, SourcesError> {
        let mut line = String::new();
        let n = self.stream.read_line(&mut line).await?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
