use porcelain::{ChangeArea, ParseError, RepositoryStatus, StatusParser, INITIAL_COMMIT};

mod common;
use common::fixtures::FULL_STATUS;

#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn test_full_status_report() {
        let report = StatusParser::default().parse(FULL_STATUS);

        assert!(report.last_error().is_none());
        assert_eq!(
            report.status,
            RepositoryStatus {
                branch_name: "master".to_string(),
                commit_id: "51c9c58e2175b768137c1e38865f394c76a7d49d".to_string(),
                upstream_name: "origin/master".to_string(),
                ahead_count: 1,
                behind_count: 10,
                untracked_count: 5,
                unmerged_count: 1,
                staged_changes: ChangeArea {
                    renamed: 1,
                    ..Default::default()
                },
                unstaged_changes: ChangeArea {
                    modified: 3,
                    deleted: 1,
                    ..Default::default()
                },
            }
        );

        let status = &report.status;
        assert!(status.is_unmerged(false));
        assert!(status.is_modified());
        assert!(status.is_dirty());
        assert!(!status.is_clean());
    }

    #[test]
    fn test_independent_parses_do_not_share_state() {
        let parser = StatusParser::default();
        let full = parser.parse(FULL_STATUS);
        let small = parser.parse("# branch.head dev\n? one");
        let full_again = parser.parse(FULL_STATUS);

        assert_eq!(full, full_again);
        assert_eq!(small.status.branch_name, "dev");
        assert_eq!(small.status.untracked_count, 1);
        assert_eq!(small.status.ahead_count, 0);
        assert!(small.status.upstream_name.is_empty());
    }

    #[test]
    fn test_parsers_are_usable_from_many_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| StatusParser::default().parse(FULL_STATUS).status))
            .collect();

        let expected = StatusParser::default().parse(FULL_STATUS).status;
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_corrupted_lines_degrade_gracefully() {
        let mut corrupted = String::from(FULL_STATUS);
        corrupted.push_str("# branch.ab +1 -ten\n1 X\n9 future record type\n");

        let report = StatusParser::default().parse(&corrupted);
        assert_eq!(report.errors.len(), 2);
        assert!(matches!(
            report.last_error(),
            Some(ParseError::MalformedEntry { .. })
        ));
        // Counts from the valid lines survive untouched
        assert_eq!(report.status.ahead_count, 1);
        assert_eq!(report.status.behind_count, 10);
        assert_eq!(report.status.untracked_count, 5);
        assert_eq!(report.status.unstaged_changes.modified, 3);
    }

    #[test]
    fn test_unborn_repository() {
        let report = StatusParser::new("main").parse("# branch.oid (initial)\n# branch.head main\n");
        assert!(report.status.is_initial());
        assert_eq!(report.status.commit_id, INITIAL_COMMIT);
        assert_eq!(report.status.branch_name, "main");
    }
}
