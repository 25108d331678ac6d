use qhub_database::*;
use qhub_domain::catalog::CoverageKind;

#[tokio::test]
async fn connect_in_memory_and_health_check() {
    let db = Database::builder()
        .url("mem://")
        .session("test_ns", "test_db")
        .init()
        .await
        .expect("connect to mem://");

    // Health should be OK for mem://
    db.health().await.expect("health check");
    db.use_ns("test_ns").use_db("test_db").await.expect("session switch");
}

#[tokio::test]
async fn missing_parameters_fail_validation() {
    let err = Database::builder().init().await.unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }));
}

#[tokio::test]
async fn migrations_seed_the_coverage_catalog() {
    let db = Database::builder()
        .url("mem://")
        .session("test_ns", "test_db")
        .init()
        .await
        .expect("connect to mem://");

    for kind in CoverageKind::ALL {
        let mut response = db
            .query(format!(
                "SELECT VALUE title FROM ONLY coverage:{};
                 SELECT VALUE profit_coefficient FROM ONLY coverage:{};",
                kind.id(),
                kind.id()
            ))
            .await
            .expect("catalog query");

        let title: Option<String> = response.take(0).expect("title");
        let coefficient: Option<f64> = response.take(1).expect("coefficient");

        assert_eq!(title.as_deref(), Some(kind.title()));
        assert!((coefficient.expect("seeded") - kind.profit_coefficient()).abs() < f64::EPSILON);
    }
}

#[tokio::test]
async fn migrations_are_recorded_once() {
    let db = Database::builder()
        .url("mem://")
        .session("test_ns", "test_db")
        .init()
        .await
        .expect("connect to mem://");

    let applied: Option<i64> = db
        .query("RETURN count(SELECT * FROM migration)")
        .await
        .expect("migration count query")
        .take(0)
        .expect("count");

    assert_eq!(applied, Some(1), "exactly one embedded migration should be recorded");
}
