use std::thread;
use std::time::{Duration, SystemTime};

use anyhow::Result;
use tracing::info;

use readlag_client::{ConnectOptions, DatabaseId, MemoryConnector, MemoryDatabase};
use readlag_observe::{LogConfig, init_logging};
use readlag_probe::{EXACT_STALENESS, StaleReadTask, TABLE};

const TASKS: u32 = 8;
const KEY: &str = "row-42";

fn main() -> Result<()> {
    init_logging(&LogConfig::default())?;
    info!("logging initialized");

    // Seed a database whose row is already behind the staleness horizon,
    // so the stale reads can see it.
    let database = MemoryDatabase::new();
    let committed = SystemTime::now() - (EXACT_STALENESS + Duration::from_secs(60));
    database.insert_at(TABLE, KEY, committed);

    let id = DatabaseId::new("demo-project", "instance-1", "db1");
    let connector = MemoryConnector::new();
    connector.register(id.clone(), database);
    let options = ConnectOptions {
        endpoint: "memory://local".to_string(),
        database: id,
    };
    info!(database = %options.database, "database seeded");

    // One task per thread, every task resolving its own handle from the
    // same connector.
    let mut handles = Vec::new();
    for task_id in 0..TASKS {
        let task = StaleReadTask::connect(KEY, &connector, &options, task_id)?;
        handles.push(thread::spawn(move || task.execute()));
    }

    let mut elapsed_ms = Vec::new();
    for (task_id, handle) in handles.into_iter().enumerate() {
        let outcome = handle.join().expect("task thread panicked");
        info!(
            task_id,
            elapsed_ms = outcome.elapsed_ms(),
            success = outcome.is_success(),
            "task finished"
        );
        elapsed_ms.push(outcome.elapsed_ms());
    }

    let min = elapsed_ms.iter().copied().min().unwrap_or(0);
    let max = elapsed_ms.iter().copied().max().unwrap_or(0);
    info!(tasks = TASKS, min_ms = min, max_ms = max, "bench finished");

    Ok(())
}
