//! Launcher download into a scoped temporary file

use std::fs::File;
use std::path::Path;

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

use crate::error::InstallerError;

const USER_AGENT: &str = concat!("mc-installer/", env!("CARGO_PKG_VERSION"));

/// A fully downloaded archive on disk
///
/// The backing file is deleted when this value is dropped, whether or not the
/// archive was extracted successfully.
#[derive(Debug)]
pub struct DownloadedArchive {
    file: NamedTempFile,
    bytes: u64,
}

impl DownloadedArchive {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Bytes written to disk
    pub fn len(&self) -> u64 {
        self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes == 0
    }

    /// Fresh read handle positioned at the start of the archive
    pub fn open(&self) -> Result<File, InstallerError> {
        self.file
            .reopen()
            .map_err(|e| InstallerError::file_write(self.file.path(), e))
    }
}

/// HTTP client for the launcher tarball
///
/// No request timeout is set: a stalled server blocks the run until the user
/// interrupts it.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, InstallerError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| InstallerError::download("<client>", e))?;
        Ok(Self { client })
    }

    /// Download `url` into a uniquely named file under `temp_dir`
    ///
    /// The temporary file is only created once the server has answered with a
    /// success status, so a failed request leaves nothing behind.
    pub async fn fetch(&self, url: &str, temp_dir: &Path) -> Result<DownloadedArchive, InstallerError> {
        info!("Downloading {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| InstallerError::download(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InstallerError::download(url, format!("HTTP {status}")));
        }

        let file = tempfile::Builder::new()
            .prefix("minecraft-launcher-")
            .suffix(".tar.gz")
            .tempfile_in(temp_dir)
            .map_err(|e| InstallerError::file_write(temp_dir, e))?;
        info!("Saving download to: {}", file.path().display());

        let progress = download_progress_bar(response.content_length());

        let writer = file
            .reopen()
            .map_err(|e| InstallerError::file_write(file.path(), e))?;
        let mut writer = tokio::fs::File::from_std(writer);
        let mut stream = response.bytes_stream();
        let mut downloaded: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| InstallerError::download(url, e))?;
            writer
                .write_all(&chunk)
                .await
                .map_err(|e| InstallerError::file_write(file.path(), e))?;
            downloaded += chunk.len() as u64;
            progress.set_position(downloaded);
        }

        writer
            .flush()
            .await
            .map_err(|e| InstallerError::file_write(file.path(), e))?;
        progress.finish_and_clear();

        info!("Downloaded {downloaded} bytes");

        Ok(DownloadedArchive {
            file,
            bytes: downloaded,
        })
    }
}

/// Byte progress bar on stderr; indicatif hides it when stderr is not a terminal
fn download_progress_bar(total: Option<u64>) -> ProgressBar {
    let bar = match total {
        Some(total) => ProgressBar::new(total),
        None => ProgressBar::no_length(),
    };

    if let Ok(style) =
        ProgressStyle::default_bar().template("   [{bar:50.green/blue}] {bytes}/{total_bytes}  {msg}")
    {
        bar.set_style(style.progress_chars("█▓░"));
    }
    bar.set_message("📥 Minecraft launcher");
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn entries(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[tokio::test]
    async fn saves_body_to_temp_file_and_removes_it_on_drop() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/Minecraft.tar.gz")
            .with_status(200)
            .with_body(b"archive-bytes")
            .create_async()
            .await;
        let tmp = tempfile::tempdir().unwrap();

        let fetcher = Fetcher::new().unwrap();
        let url = format!("{}/Minecraft.tar.gz", server.url());
        let archive = fetcher.fetch(&url, tmp.path()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(archive.len(), 13);
        assert_eq!(fs::read(archive.path()).unwrap(), b"archive-bytes");
        assert!(archive.path().starts_with(tmp.path()));
        assert_eq!(entries(tmp.path()), 1);

        drop(archive);
        assert_eq!(entries(tmp.path()), 0);
    }

    #[tokio::test]
    async fn not_found_is_download_failed_without_temp_file() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/Minecraft.tar.gz")
            .with_status(404)
            .create_async()
            .await;
        let tmp = tempfile::tempdir().unwrap();

        let fetcher = Fetcher::new().unwrap();
        let url = format!("{}/Minecraft.tar.gz", server.url());
        let err = fetcher.fetch(&url, tmp.path()).await.unwrap_err();

        match err {
            InstallerError::DownloadFailed { url: failed, reason } => {
                assert_eq!(failed, url);
                assert!(reason.contains("404"), "reason: {reason}");
            }
            other => panic!("expected DownloadFailed, got {other:?}"),
        }
        assert_eq!(entries(tmp.path()), 0);
    }
}
