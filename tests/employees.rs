#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worklog::db::employees::Employees;
    use worklog::db::workplaces::Workplaces;
    use worklog::libs::error::Error;

    struct DbTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for DbTestContext {
        fn setup() -> Self {
            DbTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl DbTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("worklogs.db")
        }
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_create_employee_returns_id(ctx: &mut DbTestContext) {
        let mut employees = Employees::new(&ctx.db_path()).unwrap();

        let id = employees.create("Alice").unwrap();
        let fetched = employees.get_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.name, "Alice");
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_duplicate_employee_leaves_table_unchanged(ctx: &mut DbTestContext) {
        let mut employees = Employees::new(&ctx.db_path()).unwrap();

        employees.create("Alice").unwrap();
        let err = employees.create("Alice").unwrap_err();
        assert!(matches!(err, Error::DuplicateName(_)));

        assert_eq!(employees.list().unwrap().len(), 1);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_duplicate_check_is_case_sensitive(ctx: &mut DbTestContext) {
        let mut employees = Employees::new(&ctx.db_path()).unwrap();

        employees.create("Alice").unwrap();
        // A different casing is a different name.
        employees.create("alice").unwrap();
        assert_eq!(employees.list().unwrap().len(), 2);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_empty_name_is_rejected(ctx: &mut DbTestContext) {
        let mut employees = Employees::new(&ctx.db_path()).unwrap();

        let err = employees.create("   ").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(employees.list().unwrap().is_empty());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_delete_nonexistent_employee(ctx: &mut DbTestContext) {
        let mut employees = Employees::new(&ctx.db_path()).unwrap();
        employees.create("Alice").unwrap();

        let err = employees.delete(999).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(employees.list().unwrap().len(), 1);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_workplace_crud(ctx: &mut DbTestContext) {
        let mut workplaces = Workplaces::new(&ctx.db_path()).unwrap();

        let id = workplaces.create("Office").unwrap();
        let err = workplaces.create("Office").unwrap_err();
        assert!(matches!(err, Error::DuplicateName(_)));

        workplaces.delete(id).unwrap();
        assert!(workplaces.list().unwrap().is_empty());

        let err = workplaces.delete(id).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_list_is_name_ordered(ctx: &mut DbTestContext) {
        let mut employees = Employees::new(&ctx.db_path()).unwrap();

        employees.create("Charlie").unwrap();
        employees.create("Alice").unwrap();
        employees.create("Bob").unwrap();

        let names: Vec<String> = employees.list().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);
    }
}
