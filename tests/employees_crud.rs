mod common;

#[cfg(test)]
mod tests {
    use super::common::{dec, employees_in, sample};
    use empdb::db::db::{ConnectionSettings, Db};
    use empdb::db::employees::Employees;
    use empdb::libs::config::Config;
    use empdb::libs::error::{ConnectionError, StoreError};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct EmployeesTestContext {
        _temp_dir: TempDir,
        employees: Employees,
    }

    impl TestContext for EmployeesTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let employees = employees_in(temp_dir.path());
            EmployeesTestContext {
                _temp_dir: temp_dir,
                employees,
            }
        }
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_create_then_get_by_id(ctx: &mut EmployeesTestContext) {
        let new = sample("Ann Lee", "ann@corp.io", "Engineering", "5200.50");
        let created = ctx.employees.create(&new).unwrap();

        let id = created.id.expect("store assigns an id");
        assert!(created.created_at.is_some());

        let fetched = ctx.employees.get_by_id(id).unwrap().expect("employee exists");
        assert_eq!(fetched.id, Some(id));
        assert_eq!(fetched.name, "Ann Lee");
        assert_eq!(fetched.email, "ann@corp.io");
        assert_eq!(fetched.department, "Engineering");
        assert_eq!(fetched.salary, dec("5200.50"));
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_salary_round_trips_exactly(ctx: &mut EmployeesTestContext) {
        let created = ctx.employees.create(&sample("Bo", "bo@corp.io", "Ops", "12345678.91")).unwrap();
        let fetched = ctx.employees.get_by_id(created.id.unwrap()).unwrap().unwrap();
        assert_eq!(fetched.salary.to_string(), "12345678.91");
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_duplicate_email_is_rejected(ctx: &mut EmployeesTestContext) {
        ctx.employees.create(&sample("Ann", "ann@corp.io", "Sales", "1000")).unwrap();
        let before = ctx.employees.count().unwrap();

        let result = ctx.employees.create(&sample("Another Ann", "ann@corp.io", "Ops", "2000"));
        match result {
            Err(StoreError::DuplicateKey(email)) => assert_eq!(email, "ann@corp.io"),
            other => panic!("expected DuplicateKey, got {:?}", other),
        }
        assert_eq!(ctx.employees.count().unwrap(), before);
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_exists_by_email(ctx: &mut EmployeesTestContext) {
        assert!(!ctx.employees.exists_by_email("ann@corp.io").unwrap());
        ctx.employees.create(&sample("Ann", "ann@corp.io", "Sales", "1000")).unwrap();
        assert!(ctx.employees.exists_by_email("ann@corp.io").unwrap());
        assert!(!ctx.employees.exists_by_email("ANN@corp.io").unwrap());
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_get_all_is_ordered_by_id(ctx: &mut EmployeesTestContext) {
        assert!(ctx.employees.get_all().unwrap().is_empty());

        for i in 1..=4 {
            ctx.employees
                .create(&sample(&format!("Emp {}", i), &format!("emp{}@corp.io", i), "Ops", "100"))
                .unwrap();
        }

        let all = ctx.employees.get_all().unwrap();
        let ids: Vec<i64> = all.iter().filter_map(|e| e.id).collect();
        assert_eq!(ids.len(), 4);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all[0].name, "Emp 1");
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_update_keeps_id_and_created_at(ctx: &mut EmployeesTestContext) {
        let mut employee = ctx.employees.create(&sample("Ann", "ann@corp.io", "Sales", "1000")).unwrap();

        employee.name = "Ann Smith".to_string();
        employee.email = "ann.smith@corp.io".to_string();
        employee.department = "Marketing".to_string();
        employee.salary = dec("1100.75");
        assert!(ctx.employees.update(&employee).unwrap());

        let updated = ctx.employees.get_by_id(employee.id.unwrap()).unwrap().unwrap();
        assert_eq!(updated.name, "Ann Smith");
        assert_eq!(updated.email, "ann.smith@corp.io");
        assert_eq!(updated.department, "Marketing");
        assert_eq!(updated.salary, dec("1100.75"));
        assert_eq!(updated.created_at, employee.created_at);
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_update_missing_id_reports_false(ctx: &mut EmployeesTestContext) {
        let mut ghost = sample("Ghost", "ghost@corp.io", "None", "1");
        assert!(!ctx.employees.update(&ghost).unwrap());

        ghost.id = Some(9999);
        assert!(!ctx.employees.update(&ghost).unwrap());
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_update_to_taken_email_is_duplicate(ctx: &mut EmployeesTestContext) {
        ctx.employees.create(&sample("Ann", "ann@corp.io", "Sales", "1000")).unwrap();
        let mut bo = ctx.employees.create(&sample("Bo", "bo@corp.io", "Sales", "1000")).unwrap();

        bo.email = "ann@corp.io".to_string();
        assert!(matches!(ctx.employees.update(&bo), Err(StoreError::DuplicateKey(_))));
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_delete_then_not_found(ctx: &mut EmployeesTestContext) {
        let created = ctx.employees.create(&sample("Ann", "ann@corp.io", "Sales", "1000")).unwrap();
        let id = created.id.unwrap();

        assert!(ctx.employees.delete(id).unwrap());
        assert!(ctx.employees.get_by_id(id).unwrap().is_none());
        assert!(!ctx.employees.delete(id).unwrap());
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_get_by_department_exact_match(ctx: &mut EmployeesTestContext) {
        ctx.employees.create(&sample("A", "a@corp.io", "Engineering", "100")).unwrap();
        ctx.employees.create(&sample("B", "b@corp.io", "Sales", "100")).unwrap();
        ctx.employees.create(&sample("C", "c@corp.io", "engineering", "100")).unwrap();
        ctx.employees.create(&sample("D", "d@corp.io", "Engineering", "100")).unwrap();

        let engineers = ctx.employees.get_by_department("Engineering").unwrap();
        let names: Vec<&str> = engineers.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "D"]);
        assert!(engineers[0].id < engineers[1].id);

        assert!(ctx.employees.get_by_department("Legal").unwrap().is_empty());
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_count(ctx: &mut EmployeesTestContext) {
        assert_eq!(ctx.employees.count().unwrap(), 0);
        ctx.employees.create(&sample("A", "a@corp.io", "Ops", "100")).unwrap();
        ctx.employees.create(&sample("B", "b@corp.io", "Ops", "100")).unwrap();
        assert_eq!(ctx.employees.count().unwrap(), 2);
    }

    #[test]
    fn test_unsupported_driver_fails_connection_test() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config::parse(&format!("DB_DRIVER=mysql\nDB_DATA_DIR={}\n", temp_dir.path().display()));
        let db = Db::new(ConnectionSettings::from_config(&config));

        assert!(matches!(db.test_connection(), Err(ConnectionError::UnsupportedDriver(d)) if d == "mysql"));

        let employees = Employees::new(db);
        assert!(matches!(employees.get_all(), Err(StoreError::Connection(_))));
    }
}
