#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::segmenter::GlossaryEntry;
    use crate::store::{AttemptRecord, HistoryStore, TermStore};

    fn entry(term: &str, definition: &str) -> GlossaryEntry {
        GlossaryEntry {
            term: term.to_string(),
            definition: definition.to_string(),
        }
    }

    fn attempt(term: &str, time: &str, correct: bool) -> AttemptRecord {
        AttemptRecord {
            term: term.to_string(),
            time: time.to_string(),
            correct,
        }
    }

    #[test]
    fn test_term_table_round_trip() {
        let dir = tempdir().unwrap();
        let store = TermStore::new(dir.path().join("output.csv"));

        let entries = vec![
            entry("memory", "The retention of information (Ch. 1)"),
            entry("encoding", "Getting information into memory (Ch. 5)"),
        ];
        store.save(&entries).unwrap();

        assert_eq!(store.load().unwrap(), entries);
    }

    #[test]
    fn test_term_table_is_semicolon_delimited() {
        let dir = tempdir().unwrap();
        let store = TermStore::new(dir.path().join("output.csv"));

        store
            .save(&[entry("memory", "The retention of information (Ch. 1)")])
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Term;Definition"));
        assert_eq!(
            lines.next(),
            Some("memory;The retention of information (Ch. 1)")
        );
    }

    #[test]
    fn test_missing_term_table_is_error() {
        let dir = tempdir().unwrap();
        let store = TermStore::new(dir.path().join("missing.csv"));

        assert!(store.load().is_err());
    }

    #[test]
    fn test_missing_history_is_empty() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.csv"));

        assert_eq!(store.load().unwrap(), vec![]);
    }

    #[test]
    fn test_history_round_trip() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.csv"));

        let records = vec![
            attempt("memory", "2024-03-01 10:15:00", true),
            attempt("encoding", "2024-03-01 10:16:30", false),
        ];
        store.save(&records).unwrap();

        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn test_history_serializes_booleans_as_literals() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.csv"));

        store
            .save(&[
                attempt("memory", "2024-03-01 10:15:00", true),
                attempt("memory", "2024-03-01 10:16:30", false),
            ])
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Term,Time,Correct"));
        assert_eq!(lines.next(), Some("memory,2024-03-01 10:15:00,True"));
        assert_eq!(lines.next(), Some("memory,2024-03-01 10:16:30,False"));
    }

    #[test]
    fn test_history_parses_booleans_case_insensitively() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.csv");
        fs::write(
            &path,
            "Term,Time,Correct\nmemory,2024-03-01 10:15:00,true\nmemory,2024-03-01 10:16:30,FALSE\n",
        )
        .unwrap();

        let records = HistoryStore::new(&path).load().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].correct);
        assert!(!records[1].correct);
    }

    #[test]
    fn test_append_grows_the_store() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.csv"));

        store
            .append(attempt("memory", "2024-03-01 10:15:00", true))
            .unwrap();
        store
            .append(attempt("memory", "2024-03-01 10:16:30", false))
            .unwrap();

        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].time, "2024-03-01 10:15:00");
        assert_eq!(records[1].time, "2024-03-01 10:16:30");
    }

    #[test]
    fn test_now_uses_expected_timestamp_shape() {
        let record = AttemptRecord::now("memory", true);

        // "YYYY-MM-DD HH:MM:SS"
        assert_eq!(record.time.len(), 19);
        assert_eq!(&record.time[4..5], "-");
        assert_eq!(&record.time[10..11], " ");
        assert_eq!(&record.time[13..14], ":");
    }
}
