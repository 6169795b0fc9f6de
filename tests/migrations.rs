#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worklog::db::db::Db;
    use worklog::db::employees::Employees;
    use worklog::db::migrations::{self, get_db_version, needs_migration, SEED_EMPLOYEE, SEED_WORKPLACE};
    use worklog::db::workplaces::Workplaces;

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl MigrationTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("worklogs.db")
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_open_applies_all_migrations(ctx: &mut MigrationTestContext) {
        let db = Db::new(&ctx.db_path()).unwrap();

        assert!(get_db_version(&db.conn).unwrap() > 0);
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopening_is_idempotent(ctx: &mut MigrationTestContext) {
        let db = Db::new(&ctx.db_path()).unwrap();
        let version = get_db_version(&db.conn).unwrap();
        drop(db);

        let db = Db::new(&ctx.db_path()).unwrap();
        assert_eq!(get_db_version(&db.conn).unwrap(), version);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_seeding_is_idempotent(ctx: &mut MigrationTestContext) {
        let mut db = Db::new(&ctx.db_path()).unwrap();
        migrations::seed_defaults(&mut db.conn).unwrap();
        migrations::seed_defaults(&mut db.conn).unwrap();
        drop(db);

        let employees = Employees::new(&ctx.db_path()).unwrap().list().unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].name, SEED_EMPLOYEE);

        let workplaces = Workplaces::new(&ctx.db_path()).unwrap().list().unwrap();
        assert_eq!(workplaces.len(), 1);
        assert_eq!(workplaces[0].name, SEED_WORKPLACE);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_seeding_skips_populated_tables(ctx: &mut MigrationTestContext) {
        let mut employees = Employees::new(&ctx.db_path()).unwrap();
        employees.create("Alice").unwrap();
        drop(employees);

        let mut db = Db::new(&ctx.db_path()).unwrap();
        migrations::seed_defaults(&mut db.conn).unwrap();
        drop(db);

        // The populated employees table is untouched, the empty
        // workplaces table still gets its default row.
        let employees = Employees::new(&ctx.db_path()).unwrap().list().unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].name, "Alice");

        let workplaces = Workplaces::new(&ctx.db_path()).unwrap().list().unwrap();
        assert_eq!(workplaces.len(), 1);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history_is_recorded(ctx: &mut MigrationTestContext) {
        let db = Db::new(&ctx.db_path()).unwrap();

        let manager = migrations::MigrationManager::new();
        let history = manager.get_migration_history(&db.conn).unwrap();
        assert!(!history.is_empty());
        assert_eq!(history[0].0, 1);
        assert_eq!(history[0].1, "create_core_tables");
    }
}
