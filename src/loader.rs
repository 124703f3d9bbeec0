//! Dataset loaders.
//!
//! [`DatasetLoader`] is the seam between the analysis pipeline and wherever the
//! table comes from. The pipeline treats any loader error as "dataset
//! unavailable" and stops before producing output.
//!
//! # Implementations
//!
//! - [`SampleDatasetLoader`]: downloads `<base_url>/<name>.csv`, caching it under
//!   the data home so later runs work offline.
//! - [`CsvFileLoader`]: reads a local CSV file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info};

use crate::config::DatasetConfig;
use crate::dataset::TipsDataset;
use crate::error::{Result, TipsError};

/// Something that can produce the tips table.
pub trait DatasetLoader {
    /// Dataset name, used in log and error messages.
    fn name(&self) -> &str;

    /// Load the full table.
    fn load(&self) -> Result<TipsDataset>;
}

/// Loader for the public sample dataset repository
#[derive(Debug, Clone)]
pub struct SampleDatasetLoader {
    name: String,
    base_url: String,
    data_home: PathBuf,
    cache: bool,
    timeout: Option<Duration>,
}

impl SampleDatasetLoader {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>, data_home: PathBuf) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            data_home,
            cache: true,
            timeout: None,
        }
    }

    pub fn from_config(config: &DatasetConfig) -> Self {
        Self::new(&config.name, &config.base_url, config.resolve_data_home())
            .with_cache(config.cache)
            .with_timeout(config.timeout_secs.map(Duration::from_secs))
    }

    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Remote location of the CSV file.
    pub fn url(&self) -> String {
        format!("{}/{}.csv", self.base_url.trim_end_matches('/'), self.name)
    }

    /// Local cache location of the CSV file.
    pub fn cache_path(&self) -> PathBuf {
        self.data_home.join(format!("{}.csv", self.name))
    }

    fn download(&self) -> Result<Vec<u8>> {
        let url = self.url();
        info!(%url, "downloading dataset");

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let response = client.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TipsError::unavailable(
                &self.name,
                format!("HTTP {} from {}", status, url),
            ));
        }

        let body = response.bytes()?;
        debug!(bytes = body.len(), "download complete");
        Ok(body.to_vec())
    }

    /// Write a downloaded body into the cache. The file only appears once it
    /// is complete.
    fn store(&self, body: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.data_home)?;
        let path = self.cache_path();
        let partial = path.with_extension("csv.part");
        fs::write(&partial, body)?;
        if let Err(e) = fs::rename(&partial, &path) {
            let _ = fs::remove_file(&partial);
            return Err(e.into());
        }
        Ok(path)
    }
}

impl DatasetLoader for SampleDatasetLoader {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<TipsDataset> {
        let path = self.cache_path();
        if self.cache && path.exists() {
            debug!(path = %path.display(), "using cached dataset");
            return TipsDataset::from_csv_path(&path);
        }

        // Parse first so a bad body never reaches the cache.
        let body = self.download()?;
        let dataset = TipsDataset::from_csv_reader(body.as_slice())?;
        if self.cache {
            let path = self.store(&body)?;
            info!(path = %path.display(), "cached dataset");
        }
        Ok(dataset)
    }
}

/// Loader reading a CSV file from disk
#[derive(Debug, Clone)]
pub struct CsvFileLoader {
    path: PathBuf,
    name: String,
}

impl CsvFileLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("dataset")
            .to_string();
        Self { path, name }
    }
}

impl DatasetLoader for CsvFileLoader {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<TipsDataset> {
        debug!(path = %self.path.display(), "reading local dataset");
        TipsDataset::from_csv_path(&self.path)
    }
}

/// Pick the loader described by the configuration.
pub fn loader_from_config(config: &DatasetConfig) -> Box<dyn DatasetLoader> {
    match &config.local_csv {
        Some(path) => Box::new(CsvFileLoader::new(path)),
        None => Box::new(SampleDatasetLoader::from_config(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
total_bill,tip,sex,smoker,day,time,size
16.99,1.01,Female,No,Sun,Dinner,2
21.01,3.5,Male,No,Sat,Dinner,3
";

    /// Answer a single HTTP request on a local port; returns the base URL.
    fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_url_and_cache_path() {
        let loader = SampleDatasetLoader::new("tips", "https://example.org/data/", "/cache".into());
        assert_eq!(loader.url(), "https://example.org/data/tips.csv");
        assert_eq!(loader.cache_path(), PathBuf::from("/cache/tips.csv"));
    }

    #[test]
    fn test_cached_file_is_used_without_network() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tips.csv"), SAMPLE).unwrap();

        // Unroutable base URL: the cached copy must be read instead.
        let loader =
            SampleDatasetLoader::new("tips", "http://127.0.0.1:9", dir.path().to_path_buf());
        let ds = loader.load().unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(loader.name(), "tips");
    }

    #[test]
    fn test_download_failure_is_an_error() {
        let dir = TempDir::new().unwrap();
        let loader = SampleDatasetLoader::new("tips", "http://127.0.0.1:9", dir.path().join("c"))
            .with_timeout(Some(Duration::from_secs(2)));
        assert!(loader.load().is_err());
        assert!(!loader.cache_path().exists());
    }

    #[test]
    fn test_http_error_status_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let data_home = dir.path().join("cache");
        let base_url = serve_once("404 Not Found", "Not Found");
        let loader = SampleDatasetLoader::new("tips", base_url, data_home.clone());

        let err = loader.load().unwrap_err();
        assert!(matches!(err, TipsError::DatasetUnavailable { .. }));
        let message = err.to_string();
        assert!(message.contains("404"), "{message}");
        assert!(message.contains(&loader.url()), "{message}");
        assert!(!data_home.exists());
    }

    #[test]
    fn test_download_creates_cache() {
        let dir = TempDir::new().unwrap();
        let data_home = dir.path().join("seaborn-data");
        let base_url = serve_once("200 OK", SAMPLE);
        let loader = SampleDatasetLoader::new("tips", base_url, data_home.clone());

        let ds = loader.load().unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[1].total_bill, 21.01);
        assert_eq!(fs::read_to_string(loader.cache_path()).unwrap(), SAMPLE);
        assert!(!data_home.join("tips.csv.part").exists());

        // The server has gone; the second load comes from the cache.
        assert_eq!(loader.load().unwrap(), ds);
    }

    #[test]
    fn test_uncached_download_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let data_home = dir.path().join("cache");
        let base_url = serve_once("200 OK", SAMPLE);
        let loader =
            SampleDatasetLoader::new("tips", base_url, data_home.clone()).with_cache(false);

        assert_eq!(loader.load().unwrap().len(), 2);
        assert!(!data_home.exists());
    }

    #[test]
    fn test_non_csv_body_is_not_cached() {
        let dir = TempDir::new().unwrap();
        let data_home = dir.path().join("cache");
        let base_url = serve_once("200 OK", "<html><body>Moved</body></html>");
        let loader = SampleDatasetLoader::new("tips", base_url, data_home.clone());

        let err = loader.load().unwrap_err();
        assert!(matches!(err, TipsError::InvalidColumn { .. }), "{err}");
        assert!(!loader.cache_path().exists());
        assert!(!data_home.join("tips.csv.part").exists());
    }

    #[test]
    fn test_from_config_applies_cache_and_timeout() {
        let config = DatasetConfig {
            data_home: Some(PathBuf::from("/tmp/tips-cache")),
            cache: false,
            timeout_secs: Some(5),
            ..DatasetConfig::default()
        };
        let loader = SampleDatasetLoader::from_config(&config);
        assert!(!loader.cache);
        assert_eq!(loader.timeout, Some(Duration::from_secs(5)));
        assert_eq!(loader.cache_path(), PathBuf::from("/tmp/tips-cache/tips.csv"));
    }

    #[test]
    fn test_csv_file_loader() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bills.csv");
        fs::write(&path, SAMPLE).unwrap();

        let loader = CsvFileLoader::new(&path);
        assert_eq!(loader.name(), "bills");
        assert_eq!(loader.load().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_csv_file() {
        let loader = CsvFileLoader::new("/nonexistent/tips.csv");
        assert!(matches!(loader.load(), Err(TipsError::Io(_))));
    }

    #[test]
    fn test_loader_from_config_prefers_local_csv() {
        let config = DatasetConfig {
            local_csv: Some(PathBuf::from("local.csv")),
            ..DatasetConfig::default()
        };
        assert_eq!(loader_from_config(&config).name(), "local");
        assert_eq!(loader_from_config(&DatasetConfig::default()).name(), "tips");
    }
}
