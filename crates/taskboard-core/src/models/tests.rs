#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use jiff::Timestamp;

    use crate::models::{BoardFilter, BoardSummary, Column, Columns, FilterUpdate, Project, Task};

    fn create_test_task(id: &str, role: &str, title: &str, status: Column) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{title} in detail"),
            role: role.to_string(),
            status,
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    fn create_test_columns() -> Columns {
        Columns {
            todo: vec![
                create_test_task("backend-0", "Backend", "Set up DB", Column::Todo),
                create_test_task("backend-1", "Backend", "Add auth", Column::Todo),
            ],
            in_progress: vec![create_test_task(
                "frontend-0",
                "Frontend",
                "Build login form",
                Column::InProgress,
            )],
            code_review: vec![],
            done: vec![create_test_task(
                "qa-0",
                "QA",
                "Write smoke tests",
                Column::Done,
            )],
        }
    }

    #[test]
    fn test_column_order_is_fixed() {
        assert_eq!(
            Column::ALL,
            [
                Column::Todo,
                Column::InProgress,
                Column::CodeReview,
                Column::Done
            ]
        );
        assert_eq!(Column::first(), Column::Todo);
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), i);
        }
    }

    #[test]
    fn test_column_from_str_spellings() {
        assert_eq!(Column::from_str("todo"), Ok(Column::Todo));
        assert_eq!(Column::from_str("inProgress"), Ok(Column::InProgress));
        assert_eq!(Column::from_str("in_progress"), Ok(Column::InProgress));
        assert_eq!(Column::from_str("in-progress"), Ok(Column::InProgress));
        assert_eq!(Column::from_str("codeReview"), Ok(Column::CodeReview));
        assert_eq!(Column::from_str("review"), Ok(Column::CodeReview));
        assert_eq!(Column::from_str(" DONE "), Ok(Column::Done));
        assert!(Column::from_str("backlog").is_err());
    }

    #[test]
    fn test_column_round_trips_canonical_identifier() {
        for column in Column::ALL {
            assert_eq!(Column::from_str(column.as_str()), Ok(column));
        }
    }

    #[test]
    fn test_column_serializes_camel_case() {
        let json = serde_json::to_string(&Column::CodeReview).unwrap();
        assert_eq!(json, "\"codeReview\"");
        let parsed: Column = serde_json::from_str("\"inProgress\"").unwrap();
        assert_eq!(parsed, Column::InProgress);
    }

    #[test]
    fn test_columns_locate_scans_every_column() {
        let columns = create_test_columns();

        let (column, task) = columns.locate("qa-0").unwrap();
        assert_eq!(column, Column::Done);
        assert_eq!(task.title, "Write smoke tests");

        assert!(columns.locate("missing").is_none());
        assert_eq!(columns.position_in(Column::Todo, "backend-1"), Some(1));
        assert_eq!(columns.position_in(Column::Done, "backend-1"), None);
    }

    #[test]
    fn test_columns_flatten_uses_board_order() {
        let columns = create_test_columns();
        let ids: Vec<&str> = columns.flatten().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["backend-0", "backend-1", "frontend-0", "qa-0"]);
        assert_eq!(columns.len(), 4);
        assert!(!columns.is_empty());
        assert!(Columns::default().is_empty());
    }

    #[test]
    fn test_columns_serialize_with_column_identifiers() {
        let value = serde_json::to_value(create_test_columns()).unwrap();
        assert!(value.get("todo").is_some());
        assert!(value.get("inProgress").is_some());
        assert!(value.get("codeReview").is_some());
        assert!(value.get("done").is_some());
        assert_eq!(value["todo"][0]["createdAt"], "2022-01-01T00:00:00Z");
    }

    #[test]
    fn test_filter_matches_search_case_insensitively() {
        let task = create_test_task("backend-1", "Backend", "Add auth", Column::Todo);

        let filter = BoardFilter {
            search: "AUTH".to_string(),
            roles: vec![],
        };
        assert!(filter.matches(&task));

        let filter = BoardFilter {
            search: "backend".to_string(),
            roles: vec![],
        };
        assert!(filter.matches(&task), "role text is searchable");

        let filter = BoardFilter {
            search: "kafka".to_string(),
            roles: vec![],
        };
        assert!(!filter.matches(&task));
    }

    #[test]
    fn test_filter_role_subset() {
        let task = create_test_task("backend-1", "Backend", "Add auth", Column::Todo);

        let filter = BoardFilter {
            search: String::new(),
            roles: vec!["Frontend".to_string()],
        };
        assert!(!filter.matches(&task));

        let filter = BoardFilter {
            search: String::new(),
            roles: vec!["Frontend".to_string(), "Backend".to_string()],
        };
        assert!(filter.matches(&task));
        assert!(BoardFilter::default().is_empty());
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_filter_merge_is_shallow() {
        let mut filter = BoardFilter {
            search: "auth".to_string(),
            roles: vec!["Backend".to_string()],
        };

        filter.merge(FilterUpdate {
            search: None,
            roles: Some(vec![]),
        });
        assert_eq!(filter.search, "auth");
        assert!(filter.roles.is_empty());

        filter.merge(FilterUpdate::default());
        assert_eq!(filter.search, "auth");
    }

    #[test]
    fn test_board_summary_counts() {
        let columns = create_test_columns();
        let project = Project {
            description: "Test project".to_string(),
            generated_at: Timestamp::from_second(1640995200).unwrap(),
            selected_roles: vec![
                "Backend".to_string(),
                "Frontend".to_string(),
                "QA".to_string(),
            ],
            tasks: columns.flatten().cloned().collect(),
        };

        let summary = BoardSummary::new(&project, &columns);
        assert_eq!(summary.total_roles, 3);
        assert_eq!(summary.total_tasks, 4);
        assert_eq!(summary.count(Column::Todo), 2);
        assert_eq!(summary.count(Column::InProgress), 1);
        assert_eq!(summary.count(Column::CodeReview), 0);
        assert_eq!(summary.count(Column::Done), 1);
        assert_eq!(summary.completion_percent(), 25);
        assert_eq!(BoardSummary::default().completion_percent(), 0);
    }
}
