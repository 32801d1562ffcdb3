use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use tabular_preview::PreviewError;
use tabular_preview::execution::PreviewSession;
use tabular_preview::ingestion::PreviewOptions;
use tabular_preview::types::{ParseResult, SourceFile};

fn quiet_session() -> PreviewSession {
    PreviewSession::new(PreviewOptions {
        observer: None,
        ..Default::default()
    })
}

#[test]
fn late_completion_of_superseded_file_is_discarded() {
    let session = Arc::new(quiet_session());

    let first = session.select(SourceFile::new("first.csv", "name\nfirst\n"));
    let second = session.select(SourceFile::new("second.csv", "name\nsecond\n"));

    // Parse both on worker threads, then complete the newer one first.
    let (tx, rx) = mpsc::channel();
    let mut handles = Vec::new();
    for ticket in [first, second] {
        let tx = tx.clone();
        handles.push(thread::spawn(move || {
            let result = ticket.parse();
            tx.send((ticket, result)).unwrap();
        }));
    }
    drop(tx);
    for h in handles {
        h.join().unwrap();
    }

    let mut done: Vec<_> = rx.iter().collect();
    done.sort_by_key(|(t, _)| std::cmp::Reverse(t.generation()));

    let applied: Vec<bool> = done
        .iter()
        .map(|(ticket, result)| session.complete(ticket, result.clone()))
        .collect();
    assert_eq!(applied, vec![true, false]);
    assert_eq!(session.preview().rows[0].get("name"), Some("second"));
    assert_eq!(session.selected().unwrap().name, "second.csv");
}

#[test]
fn reselecting_clears_previous_preview() {
    let session = quiet_session();
    session.select_and_parse(SourceFile::new("a.csv", "x\n1\n"));
    assert_eq!(session.preview().rows.len(), 1);

    let _pending = session.select(SourceFile::new("b.csv", "y\n2\n"));
    assert_eq!(session.preview(), ParseResult::empty());
}

#[test]
fn confirm_forwards_original_file_unchanged() {
    let session = quiet_session();
    let original = SourceFile::new("slots.csv", "dateExam,h_debut\n13/05/2025,08:30:00\n");
    session.select_and_parse(original.clone());

    let upload = session.confirm().unwrap();
    assert_eq!(*upload, original);

    // Confirming resets the session.
    assert!(matches!(session.confirm(), Err(PreviewError::NoFileSelected)));
}
