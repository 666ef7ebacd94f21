//! Course catalog flow against the in-memory grid.

use std::sync::Arc;

use matricula_core::Error;
use matricula_grid::MemoryGrid;
use matricula_ledger::CourseCatalog;

const SHEET: &str = "Courses";

async fn seeded_grid() -> Arc<MemoryGrid> {
    let grid = Arc::new(MemoryGrid::new());
    grid.seed(
        SHEET,
        2,
        vec![
            vec![
                "Excel Basics".to_string(),
                "2024-03-01 09:00".to_string(),
                "2024-03-02 14:00".to_string(),
            ],
            vec![
                "Intro to Typing".to_string(),
                "2024-04-10 10:00".to_string(),
            ],
        ],
    )
    .await;
    grid
}

#[tokio::test]
async fn test_catalog_lists_courses_with_all_slots() {
    let catalog = CourseCatalog::new(seeded_grid().await, SHEET);
    let courses = catalog.list_all().await.expect("listing should succeed");
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].name, "Excel Basics");
    assert_eq!(courses[0].schedules.len(), 2);
}

#[tokio::test]
async fn test_time_update_then_list_shows_new_slots() {
    let grid = seeded_grid().await;
    let catalog = CourseCatalog::new(grid, SHEET);
    catalog
        .update_course_times("Intro to Typing", "08:00", "13:00")
        .await
        .expect("update should succeed");

    let courses = catalog.list_all().await.expect("listing should succeed");
    assert_eq!(courses[1].schedules, vec!["08:00", "13:00"]);
}

#[tokio::test]
async fn test_time_update_for_missing_course_fails() {
    let catalog = CourseCatalog::new(seeded_grid().await, SHEET);
    let err = catalog
        .update_course_times("Watercolor", "08:00", "13:00")
        .await
        .expect_err("unknown course must not update anything");
    assert!(matches!(err, Error::NotFound { .. }));
}
