use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationLog {
    pub id: String,
    pub timestamp: String,
    pub model: String,
    pub destination: String,
    pub starting_point: String,
    pub days: u32,
    pub elapsed_ms: u64,
    pub is_grounded: bool,
    pub num_sources: u32,
    pub num_search_queries: u32,
    pub num_flights: u32,
    pub num_accommodations: u32,
    pub num_activities: u32,
    pub num_transport: u32,
    pub num_days_planned: u32,
    pub structured: bool,
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl GenerationLog {
    pub fn total_tokens(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }

    pub fn summary(&self) -> String {
        format!(
            "Latency: {:.1}s | Grounded: {} | Sources: {} | Searches: {} | Options: {} | Tokens used by LLM: {}",
            self.elapsed_ms as f64 / 1000.0,
            if self.is_grounded { "yes" } else { "no" },
            self.num_sources,
            self.num_search_queries,
            self.num_flights + self.num_accommodations + self.num_activities + self.num_transport,
            self.total_tokens(),
        )
    }
}

/// Appends one JSON line per generation to `generations.jsonl`.
#[derive(Debug, Clone)]
pub struct GenerationLogger {
    dir: PathBuf,
}

impl GenerationLogger {
    pub fn new(dir: &str) -> Result<Self> {
        let dir = PathBuf::from(dir);
        fs::create_dir_all(&dir).context("Failed to create logs directory")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join("generations.jsonl")
    }

    pub fn write(&self, log: &GenerationLog) -> Result<()> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path())
            .context("Failed to open log file")?;

        let json = serde_json::to_string(log).context("Failed to serialize generation log")?;
        writeln!(file, "{}", json).context("Failed to write log")?;

        Ok(())
    }
}
