//! Process command implementation
//!
//! This module implements the `process` command: seed work items into an
//! in-memory store and run the batch processing operation over them.

use crate::config::load_config;
use crate::domain::errors::DocketError;
use crate::domain::item::WorkItem;
use crate::service::ItemService;
use crate::store::{ItemStore, MemoryItemStore};
use clap::Args;
use std::fs;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Arguments for the process command
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// JSON file with work items to seed before processing
    #[arg(short, long)]
    pub input: Option<String>,

    /// Override the worker pool size
    #[arg(long)]
    pub pool_size: Option<usize>,
}

impl ProcessArgs {
    /// Execute the process command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting process command");

        let mut config = load_config(config_path)?;

        if let Some(pool_size) = self.pool_size {
            tracing::info!(pool_size, "Overriding worker pool size from CLI");
            config.processing.worker_pool_size = pool_size;
        }

        let store: Arc<dyn ItemStore> = Arc::new(MemoryItemStore::new());
        let service = ItemService::new(Arc::clone(&store), &config.processing, shutdown_signal)?;

        let (seeded, skipped) = match &self.input {
            Some(path) => self.seed_items(&service, path).await?,
            None => (0, 0),
        };

        println!("📋 Seeded {seeded} work item(s) ({skipped} skipped)");

        let start_time = Instant::now();
        match service.process_all().await {
            Ok(items) => {
                let duration = start_time.elapsed();
                println!("✅ Processing completed in {:.2}s", duration.as_secs_f64());
                println!();
                println!("Processed items (accumulated):");
                for item in &items {
                    match item.id {
                        Some(id) => println!("  {:>6}  {:<12} {}", id, item.status, item.name),
                        None => println!("  {:>6}  {:<12} {}", "-", item.status, item.name),
                    }
                }
                println!();
                println!("Total accumulated: {}", service.processed_count());
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Batch processing failed");
                println!("❌ Batch processing failed");
                println!("   Error: {e}");
                println!("   Re-run the command to retry items still in NEW status");
                Ok(1)
            }
        }
    }

    /// Seed work items from a JSON file
    ///
    /// Entries that fail e-mail validation are logged and skipped; any other
    /// error aborts the command.
    async fn seed_items(&self, service: &ItemService, path: &str) -> anyhow::Result<(usize, usize)> {
        let contents = fs::read_to_string(path)?;
        let entries: Vec<WorkItem> = serde_json::from_str(&contents)?;

        tracing::info!(path = %path, count = entries.len(), "Seeding work items");

        let mut seeded = 0;
        let mut skipped = 0;
        for entry in entries {
            match service.create(entry).await {
                Ok(_) => seeded += 1,
                Err(DocketError::Validation(reason)) => {
                    tracing::warn!(reason = %reason, "Skipping invalid work item");
                    skipped += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok((seeded, skipped))
    }
}
