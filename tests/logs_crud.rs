#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worklog::db::db::Db;
    use worklog::db::employees::Employees;
    use worklog::db::migrations::{self, SEED_EMPLOYEE, SEED_WORKPLACE};
    use worklog::db::work_logs::WorkLogs;
    use worklog::db::workplaces::Workplaces;
    use worklog::libs::error::Error;
    use worklog::libs::worklog::{LogFilter, LogOrder, LogSubmission};

    struct LogTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for LogTestContext {
        fn setup() -> Self {
            LogTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl LogTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("worklogs.db")
        }

        /// Seeds the default employee and workplace, returning their ids.
        fn seed(&self) -> (i64, i64) {
            let mut db = Db::new(&self.db_path()).unwrap();
            migrations::seed_defaults(&mut db.conn).unwrap();
            drop(db);

            let employee = Employees::new(&self.db_path()).unwrap().get_by_name(SEED_EMPLOYEE).unwrap().unwrap();
            let workplace = Workplaces::new(&self.db_path()).unwrap().get_by_name(SEED_WORKPLACE).unwrap().unwrap();
            (employee.id, workplace.id)
        }
    }

    fn submission(employee_id: i64, workplace_id: i64, date: &str, hours: &str, description: &str) -> LogSubmission {
        LogSubmission {
            employee_id,
            workplace_id,
            date: date.to_string(),
            hours: hours.to_string(),
            description: description.to_string(),
        }
    }

    #[test_context(LogTestContext)]
    #[test]
    fn test_submitted_log_is_listed_with_identical_values(ctx: &mut LogTestContext) {
        let (employee_id, workplace_id) = ctx.seed();
        let mut logs = WorkLogs::new(&ctx.db_path()).unwrap();

        let new_log = submission(employee_id, workplace_id, "2024-01-05", "8", "Shift").validate().unwrap();
        let id = logs.insert(&new_log).unwrap();

        let rows = logs.fetch(&LogFilter::default(), LogOrder::Display).unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.id, id);
        assert_eq!(row.employee, SEED_EMPLOYEE);
        assert_eq!(row.workplace, SEED_WORKPLACE);
        assert_eq!(row.date.to_string(), "2024-01-05");
        assert_eq!(row.hours, 8.0);
        assert_eq!(row.description, "Shift");
    }

    #[test_context(LogTestContext)]
    #[test]
    fn test_validation_accumulates_all_violations(ctx: &mut LogTestContext) {
        let (employee_id, workplace_id) = ctx.seed();

        let result = submission(employee_id, workplace_id, "05/01/2024", "abc", "  ").validate();
        let violations = result.unwrap_err();
        assert_eq!(violations.len(), 3);

        // And nothing was inserted.
        let mut logs = WorkLogs::new(&ctx.db_path()).unwrap();
        assert!(logs.fetch(&LogFilter::default(), LogOrder::Display).unwrap().is_empty());
    }

    #[test_context(LogTestContext)]
    #[test]
    fn test_negative_hours_are_rejected(ctx: &mut LogTestContext) {
        let (employee_id, workplace_id) = ctx.seed();

        let violations = submission(employee_id, workplace_id, "2024-01-05", "-2", "Shift").validate().unwrap_err();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("negative"));
    }

    #[test_context(LogTestContext)]
    #[test]
    fn test_fractional_hours_are_accepted(ctx: &mut LogTestContext) {
        let (employee_id, workplace_id) = ctx.seed();
        let mut logs = WorkLogs::new(&ctx.db_path()).unwrap();

        let new_log = submission(employee_id, workplace_id, "2024-01-05", "4.5", "Half day").validate().unwrap();
        logs.insert(&new_log).unwrap();

        let rows = logs.fetch(&LogFilter::default(), LogOrder::Display).unwrap();
        assert_eq!(rows[0].hours, 4.5);
    }

    #[test_context(LogTestContext)]
    #[test]
    fn test_insert_with_unknown_parent_rolls_back(ctx: &mut LogTestContext) {
        let (employee_id, _) = ctx.seed();
        let mut logs = WorkLogs::new(&ctx.db_path()).unwrap();

        let new_log = submission(employee_id, 999, "2024-01-05", "8", "Shift").validate().unwrap();
        let err = logs.insert(&new_log).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let new_log = submission(999, 1, "2024-01-05", "8", "Shift").validate().unwrap();
        let err = logs.insert(&new_log).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        assert!(logs.fetch(&LogFilter::default(), LogOrder::Display).unwrap().is_empty());
    }

    #[test_context(LogTestContext)]
    #[test]
    fn test_delete_log(ctx: &mut LogTestContext) {
        let (employee_id, workplace_id) = ctx.seed();
        let mut logs = WorkLogs::new(&ctx.db_path()).unwrap();

        let new_log = submission(employee_id, workplace_id, "2024-01-05", "8", "Shift").validate().unwrap();
        let id = logs.insert(&new_log).unwrap();

        logs.delete(id).unwrap();
        assert!(logs.fetch(&LogFilter::default(), LogOrder::Display).unwrap().is_empty());

        let err = logs.delete(id).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test_context(LogTestContext)]
    #[test]
    fn test_deleting_employee_cascades_to_logs(ctx: &mut LogTestContext) {
        let (employee_id, workplace_id) = ctx.seed();
        let mut logs = WorkLogs::new(&ctx.db_path()).unwrap();

        let new_log = submission(employee_id, workplace_id, "2024-01-05", "8", "Shift").validate().unwrap();
        logs.insert(&new_log).unwrap();

        Employees::new(&ctx.db_path()).unwrap().delete(employee_id).unwrap();
        assert!(logs.fetch(&LogFilter::default(), LogOrder::Display).unwrap().is_empty());
    }
}
