use std::sync::Arc;

use tokio::sync::Barrier;

use super::*;

#[tokio::test]
async fn test_record_assigns_sequence_positions() {
    let log = StatementLog::new();

    assert_eq!(log.record(EntryPoint::Insert, "INSERT 1", None).await, 0);
    assert_eq!(
        log.record(EntryPoint::Update, "UPDATE 1", Some("Employee Update"))
            .await,
        1
    );

    let full = log.full_log().await;
    assert_eq!(full.len(), 2);
    assert_eq!(full[0].content, "INSERT 1");
    assert_eq!(full[1].name.as_deref(), Some("Employee Update"));
    assert_eq!(full[1].sequence, 1);
}

#[tokio::test]
async fn test_no_checkpoint_means_since_beginning() {
    let log = StatementLog::new();
    log.record(EntryPoint::Insert, "sql", None).await;

    assert_eq!(log.log_since_checkpoint().await.len(), 1);
    assert!(log.contains_since_checkpoint(EntryPoint::Insert).await);
}

#[tokio::test]
async fn test_checkpoint_scopes_log() {
    let log = StatementLog::new();
    log.record(EntryPoint::Insert, "sql", None).await;

    log.checkpoint().await;
    assert!(log.log_since_checkpoint().await.is_empty());
    assert!(!log.contains_since_checkpoint(EntryPoint::Insert).await);

    log.record(EntryPoint::Insert, "sql", None).await;
    let since = log.log_since_checkpoint().await;
    assert_eq!(since.len(), 1);
    assert_eq!(since[0].sequence, 1);
    assert!(log.contains_since_checkpoint(EntryPoint::Insert).await);

    log.checkpoint().await;
    assert!(log.log_since_checkpoint().await.is_empty());

    // History survives checkpoints.
    assert_eq!(log.len().await, 2);
}

#[tokio::test]
async fn test_since_checkpoint_preserves_order() {
    let log = StatementLog::new();
    log.record(EntryPoint::SelectAll, "SELECT", None).await;
    log.checkpoint().await;
    log.record(EntryPoint::Update, "UPDATE", None).await;
    log.record(EntryPoint::Delete, "DELETE", None).await;

    let entry_points: Vec<_> = log
        .log_since_checkpoint()
        .await
        .iter()
        .map(|s| s.entry_point)
        .collect();
    assert_eq!(entry_points, vec![EntryPoint::Update, EntryPoint::Delete]);
}

#[tokio::test]
async fn test_reset_clears_history_and_checkpoint() {
    let log = StatementLog::new();
    log.record(EntryPoint::Insert, "sql", None).await;
    log.checkpoint().await;
    log.reset().await;

    assert!(log.is_empty().await);
    log.record(EntryPoint::Execute, "sql", None).await;
    assert_eq!(log.log_since_checkpoint().await.len(), 1);
}

#[test]
fn test_statement_equality_ignores_content() {
    let logged = Statement {
        entry_point: EntryPoint::Insert,
        content: "INSERT INTO employees".to_string(),
        name: Some("Employee Create".to_string()),
        sequence: 41,
        recorded_at: Utc::now(),
    };

    assert_eq!(logged, Statement::new(EntryPoint::Insert));
    assert_ne!(logged, Statement::new(EntryPoint::Update));
}

#[test]
fn test_entry_point_names() {
    let names: Vec<_> = EntryPoint::all().iter().map(|e| e.to_string()).collect();
    assert_eq!(
        names,
        vec![
            "insert",
            "update",
            "delete",
            "select_all",
            "select_value",
            "select_rows",
            "execute",
            "other"
        ]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_records_split_cleanly_by_checkpoint() {
    const WRITERS: usize = 4;
    let log = Arc::new(StatementLog::new());
    // Writers pause twice: once before the checkpoint is allowed to run and
    // once before their final batch, so the checkpoint races only with the
    // middle batch and lands strictly inside the log.
    let started = Arc::new(Barrier::new(WRITERS + 1));
    let checkpointed = Arc::new(Barrier::new(WRITERS + 1));

    let writers: Vec<_> = (0..WRITERS)
        .map(|_| {
            let log = Arc::clone(&log);
            let started = Arc::clone(&started);
            let checkpointed = Arc::clone(&checkpointed);
            tokio::spawn(async move {
                for _ in 0..100 {
                    log.record(EntryPoint::Insert, "sql", None).await;
                }
                started.wait().await;
                for _ in 0..50 {
                    log.record(EntryPoint::Update, "sql", None).await;
                }
                checkpointed.wait().await;
                for _ in 0..100 {
                    log.record(EntryPoint::Delete, "sql", None).await;
                }
            })
        })
        .collect();

    started.wait().await;
    let marker = log.checkpoint().await;
    checkpointed.wait().await;

    for writer in writers {
        writer.await.unwrap();
    }

    let full = log.full_log().await;
    let since = log.log_since_checkpoint().await;
    assert_eq!(full.len(), 1000);
    assert!((400..=600).contains(&marker), "marker {} outside middle batch", marker);
    assert_eq!(marker + since.len(), full.len());

    let sequences: Vec<u64> = full.iter().map(|s| s.sequence).collect();
    assert_eq!(sequences, (0..1000).collect::<Vec<_>>());
    assert!(since.iter().all(|s| s.sequence as usize >= marker));
    assert!(full[..marker].iter().all(|s| s.entry_point != EntryPoint::Delete));
    assert!(since.iter().all(|s| s.entry_point != EntryPoint::Insert));
}
