//! Launcher download and extraction
//!
//! ## Module Organization
//!
//! - `fetch` - HTTP fetch into a self-deleting temporary file
//! - `extract` - `.tar.gz` extraction with top-level stripping and traversal checks

mod fetch;
mod extract;

use std::io::BufReader;
use std::path::Path;

use log::info;

use crate::error::InstallerError;

pub use fetch::{DownloadedArchive, Fetcher};
pub use extract::{ExtractSummary, extract_tar_gz};

/// Download the archive at `url` and extract it into `dest`
///
/// The download is staged in `temp_dir` and removed once extraction finishes
/// or fails.
pub async fn download_and_extract(
    fetcher: &Fetcher,
    url: &str,
    temp_dir: &Path,
    dest: &Path,
) -> Result<ExtractSummary, InstallerError> {
    let archive = fetcher.fetch(url, temp_dir).await?;
    if archive.is_empty() {
        return Err(InstallerError::InvalidArchive(format!("empty download from {url}")));
    }

    info!("Extracting {} bytes into {}", archive.len(), dest.display());
    let dest = dest.to_path_buf();
    tokio::task::spawn_blocking(move || {
        let file = archive.open()?;
        extract_tar_gz(BufReader::new(file), &dest)
    })
    .await
    .map_err(|e| InstallerError::InvalidArchive(format!("extraction task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_body_is_invalid_archive() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/Minecraft.tar.gz")
            .with_status(200)
            .with_body("")
            .create_async()
            .await;
        let downloads = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();

        let fetcher = Fetcher::new().unwrap();
        let url = format!("{}/Minecraft.tar.gz", server.url());
        let err = download_and_extract(&fetcher, &url, downloads.path(), dest.path())
            .await
            .unwrap_err();

        match err {
            InstallerError::InvalidArchive(reason) => assert!(reason.contains("empty download")),
            other => panic!("expected InvalidArchive, got {other:?}"),
        }
        assert_eq!(std::fs::read_dir(downloads.path()).unwrap().count(), 0);
        assert_eq!(std::fs::read_dir(dest.path()).unwrap().count(), 0);
    }
}
