use std::path::PathBuf;

use futures_util::StreamExt;
use tokio::io::AsyncReadExt;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::cancel::CancelToken;
use crate::error::FetchError;

/// Chunk size for local file reads.
const FILE_CHUNK_SIZE: usize = 64 * 1024;

/// Where an uploaded mesh comes from.
#[derive(Debug, Clone)]
pub enum MeshSource {
    File(PathBuf),
    Url(String),
}

/// A progress notification: bytes received so far, and the total when the
/// source advertises one (Content-Length, file metadata).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub bytes_loaded: u64,
    pub bytes_total: Option<u64>,
}

/// Fetch the full byte buffer of a mesh file.
///
/// Progress notifications are delivered best-effort: a slow consumer drops
/// ticks rather than stalling the transfer. `bytes_loaded` is monotonically
/// non-decreasing across the notifications that do arrive.
///
/// # Errors
///
/// [`FetchError::Cancelled`] if the token fires mid-transfer; otherwise the
/// underlying network or io error.
pub async fn fetch(
    source: &MeshSource,
    progress: &mpsc::Sender<Progress>,
    cancel: &CancelToken,
) -> Result<Vec<u8>, FetchError> {
    match source {
        MeshSource::File(path) => fetch_file(path, progress, cancel).await,
        MeshSource::Url(url) => fetch_url(url, progress, cancel).await,
    }
}

async fn fetch_file(
    path: &PathBuf,
    progress: &mpsc::Sender<Progress>,
    cancel: &CancelToken,
) -> Result<Vec<u8>, FetchError> {
    let mut file = tokio::fs::File::open(path).await?;
    let total = file.metadata().await.ok().map(|m| m.len());

    debug!(path = %path.display(), ?total, "reading mesh file");

    let mut buf = Vec::with_capacity(total.unwrap_or(0) as usize);
    let mut chunk = vec![0u8; FILE_CHUNK_SIZE];

    loop {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }
        let n = file.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        report(progress, buf.len() as u64, total);
    }

    Ok(buf)
}

async fn fetch_url(
    url: &str,
    progress: &mpsc::Sender<Progress>,
    cancel: &CancelToken,
) -> Result<Vec<u8>, FetchError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        warn!(url, status = status.as_u16(), "mesh download rejected");
        return Err(FetchError::Http {
            status: status.as_u16(),
        });
    }

    let total = response.content_length();
    debug!(url, ?total, "downloading mesh");

    let mut buf = Vec::with_capacity(total.unwrap_or(0) as usize);
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }
        let chunk = chunk?;
        buf.extend_from_slice(&chunk);
        report(progress, buf.len() as u64, total);
    }

    Ok(buf)
}

/// Best-effort progress delivery. Dropped ticks are fine; the final byte
/// buffer is returned to the caller, not sent on this channel.
fn report(progress: &mpsc::Sender<Progress>, bytes_loaded: u64, bytes_total: Option<u64>) {
    let _ = progress.try_send(Progress {
        bytes_loaded,
        bytes_total,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn file_fetch_returns_full_contents() {
        let payload: Vec<u8> = (0..200_000).map(|i| (i % 251) as u8).collect();
        let file = write_temp(&payload);

        let (tx, mut rx) = mpsc::channel(256);
        let source = MeshSource::File(file.path().to_path_buf());
        let bytes = fetch(&source, &tx, &CancelToken::new()).await.unwrap();
        assert_eq!(bytes, payload);

        // Progress is monotonic and totals are the file length.
        let mut last = 0u64;
        while let Ok(p) = rx.try_recv() {
            assert!(p.bytes_loaded >= last);
            assert_eq!(p.bytes_total, Some(payload.len() as u64));
            last = p.bytes_loaded;
        }
        assert_eq!(last, payload.len() as u64);
    }

    #[tokio::test]
    async fn cancelled_token_aborts_file_fetch() {
        let payload = vec![7u8; 300_000];
        let file = write_temp(&payload);

        let (tx, _rx) = mpsc::channel(256);
        let cancel = CancelToken::new();
        cancel.cancel();

        let source = MeshSource::File(file.path().to_path_buf());
        let result = fetch(&source, &tx, &cancel).await;
        assert!(matches!(result, Err(FetchError::Cancelled)));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let (tx, _rx) = mpsc::channel(4);
        let source = MeshSource::File(PathBuf::from("no/such/mesh.stl"));
        let result = fetch(&source, &tx, &CancelToken::new()).await;
        assert!(matches!(result, Err(FetchError::Io(_))));
    }
}
