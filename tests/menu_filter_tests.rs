use chicken_dust_cli::models::catalog::Catalog;
use chicken_dust_cli::models::dish::Course;
use chicken_dust_cli::services::{
    filter_by_course, filter_by_max_price, CourseSelection, FilterState, MenuService, PriceCeiling,
};

#[test]
fn all_course_selection_returns_the_catalog_unchanged() {
    let dishes = Catalog::sample().dishes();
    let filtered = filter_by_course(&dishes, CourseSelection::All);
    assert_eq!(filtered, dishes);
}

#[test]
fn course_filter_returns_only_that_course_in_order() {
    let dishes = Catalog::sample().dishes();
    for course in Course::ALL {
        let filtered = filter_by_course(&dishes, CourseSelection::Only(course));
        assert!(filtered.iter().all(|dish| dish.course == course));

        // Relative order matches the full catalog ordering.
        let expected: Vec<String> = dishes
            .iter()
            .filter(|dish| dish.course == course)
            .map(|dish| dish.id.clone())
            .collect();
        let actual: Vec<String> = filtered.iter().map(|dish| dish.id.clone()).collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn all_price_ceiling_returns_the_catalog_unchanged() {
    let dishes = Catalog::sample().dishes();
    let filtered = filter_by_max_price(&dishes, PriceCeiling::All);
    assert_eq!(filtered, dishes);
}

#[test]
fn price_ceiling_is_inclusive() {
    let dishes = Catalog::sample().dishes();
    // Rolled Bread with Baked Beans costs exactly R300.
    let filtered = filter_by_max_price(&dishes, PriceCeiling::Upto(300));
    assert!(filtered.iter().any(|dish| dish.price == 300));
    assert!(filtered.iter().all(|dish| dish.price <= 300));
}

#[test]
fn mains_above_the_ceiling_are_filtered_out() {
    // Catalog scenario: filtering by Mains yields Spaghetti (R750) and Pap
    // (R1500); a R500 ceiling then leaves nothing.
    let dishes = Catalog::sample().dishes();
    let mains = filter_by_course(&dishes, CourseSelection::Only(Course::Mains));
    assert_eq!(mains.len(), 2);
    assert_eq!(mains[0].name, "Spaghetti");

    let affordable = filter_by_max_price(&mains, PriceCeiling::Upto(500));
    assert!(affordable.is_empty());
}

#[test]
fn filter_order_does_not_change_the_result_set() {
    let dishes = Catalog::sample().dishes();
    for course in Course::ALL {
        for ceiling in [200, 500, 1000] {
            let course_first = filter_by_max_price(
                &filter_by_course(&dishes, CourseSelection::Only(course)),
                PriceCeiling::Upto(ceiling),
            );
            let price_first = filter_by_course(
                &filter_by_max_price(&dishes, PriceCeiling::Upto(ceiling)),
                CourseSelection::Only(course),
            );
            assert_eq!(course_first, price_first);
        }
    }
}

#[test]
fn service_filtered_view_is_pure() {
    let service = MenuService::new(Catalog::sample());
    let filter = FilterState {
        course: CourseSelection::Only(Course::Desserts),
        ceiling: PriceCeiling::Upto(1000),
    };
    let first = service.filtered(filter);
    let second = service.filtered(filter);
    assert_eq!(first, second);
    // The catalog itself is untouched.
    assert_eq!(service.catalog().dish_count(), 6);
}

#[test]
fn default_filter_state_shows_everything() {
    let service = MenuService::new(Catalog::sample());
    let all = service.filtered(FilterState::default());
    assert_eq!(all.len(), 6);
}
