// Shared helpers for the unit tests. Compiled only under cfg(test).

use crate::checker::{LinkProbe, ProbeError};

pub mod fixtures {
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Creates an empty scratch directory unique to one test
    pub fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("link-sieve-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Writes a model-output file with an echoed prompt in front of the answer
    pub fn write_model_output(dir: &Path, file_name: &str, answer: &str) -> PathBuf {
        let path = dir.join(file_name);
        let content = format!(
            "Prompt:\nReturn JSON like {{\"data_sources\": [{{\"link\": \"http://prompt.example\"}}]}}\n\nAI Returned Links:\n{}\n",
            answer
        );
        fs::write(&path, content).unwrap();
        path
    }
}

/// Probe that answers from a fixed table and records every URL asked for.
/// Unknown URLs answer 200.
#[derive(Default)]
pub struct StubProbe {
    responses: std::collections::HashMap<String, Result<u16, ProbeError>>,
    calls: std::sync::Mutex<Vec<String>>,
}

impl StubProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), Ok(status));
        self
    }

    pub fn with_error(mut self, url: &str, error: ProbeError) -> Self {
        self.responses.insert(url.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LinkProbe for StubProbe {
    async fn head_status(&self, url: &str) -> Result<u16, ProbeError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses.get(url).cloned().unwrap_or(Ok(200))
    }
}

/// Collects log lines, formatted like the real logger (`LEVEL - message`).
///
/// Lines are kept per thread, so parallel tests don't see each other's
/// output. `#[tokio::test]` runs on the test's own thread.
pub mod captured_logs {
    use log::{LevelFilter, Log, Metadata, Record};
    use std::cell::RefCell;
    use std::sync::Once;

    thread_local! {
        static LINES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    struct CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            let line = format!("{} - {}", record.level(), record.args());
            LINES.with(|lines| lines.borrow_mut().push(line));
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INSTALL: Once = Once::new();

    /// Installs the capturing logger (once per process) and clears this thread's lines
    pub fn start() {
        INSTALL.call_once(|| {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(LevelFilter::Trace);
        });
        LINES.with(|lines| lines.borrow_mut().clear());
    }

    pub fn lines() -> Vec<String> {
        LINES.with(|lines| lines.borrow().clone())
    }

    /// Lines containing every one of `needles`
    pub fn matching(needles: &[&str]) -> Vec<String> {
        lines()
            .into_iter()
            .filter(|line| needles.iter().all(|needle| line.contains(needle)))
            .collect()
    }
}
