use chicken_dust_cli::models::cart::{Cart, CheckoutSnapshot};
use chicken_dust_cli::models::catalog::Catalog;
use chicken_dust_cli::models::dish::Course;
use chicken_dust_cli::services::{
    AuthService, AuthServiceError, MenuComposer, PaymentService, SignInRequest,
};
use chicken_dust_cli::flow::{Router, Screen, Transition};

#[test]
fn sign_in_then_browse_then_pay() {
    // Sign in with syntactically valid credentials.
    let auth = AuthService::new();
    let session = auth
        .sign_in(SignInRequest::new("guest@example.com", "secret1"))
        .expect("valid credentials should sign in");
    assert_eq!(session.email, "guest@example.com");

    // Build a cart from the catalog: Fried Potato then Spaghetti.
    let catalog = Catalog::sample();
    let mut cart = Cart::new();
    cart.add(catalog.find("1").unwrap().clone());
    cart.add(catalog.find("3").unwrap().clone());
    assert_eq!(cart.total(), 900);

    // Removing the Fried Potato leaves only the Spaghetti, total exact.
    cart.remove("1");
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].name, "Spaghetti");
    assert_eq!(cart.total(), 750);

    // Payment settles the snapshot and issues a matching receipt.
    let receipt = PaymentService::new().confirm(cart.snapshot());
    assert_eq!(receipt.total, 750);
    assert_eq!(receipt.items.len(), 1);
}

#[test]
fn invalid_sign_in_leaves_no_session() {
    let auth = AuthService::new();
    assert_eq!(
        auth.sign_in(SignInRequest::new("guest", "secret1")).unwrap_err(),
        AuthServiceError::InvalidEmail
    );
    assert_eq!(
        auth.sign_in(SignInRequest::new("guest@example.com", "12345"))
            .unwrap_err(),
        AuthServiceError::PasswordTooShort
    );
}

#[test]
fn composer_scenario_from_course_to_managed_list() {
    let catalog = Catalog::sample();
    let mut composer = MenuComposer::new(catalog.clone());

    // Selecting Mains clears any pending dish.
    composer.select_course(Course::Mains);
    assert!(composer.pending_dish().is_none());

    // Selecting Spaghetti enables Add.
    let spaghetti = catalog.find("3").unwrap().clone();
    composer.select_dish(spaghetti).unwrap();
    assert_eq!(composer.pending_dish().map(|d| d.name.as_str()), Some("Spaghetti"));

    // Add appends, clears the pending dish, keeps the course.
    composer.add_item().unwrap();
    assert_eq!(composer.items().len(), 1);
    assert_eq!(composer.items()[0].name, "Spaghetti");
    assert!(composer.pending_dish().is_none());
    assert_eq!(composer.selected_course(), Some(Course::Mains));
}

#[test]
fn managed_list_snapshot_reaches_payment_untouched() {
    let catalog = Catalog::sample();
    let mut composer = MenuComposer::new(catalog.clone());
    composer.select_course(Course::Desserts);
    composer.select_dish(catalog.find("6").unwrap().clone()).unwrap();
    composer.add_item().unwrap();

    let snapshot = composer.snapshot();

    // Navigation carries the snapshot by value; mutating the managed list
    // afterwards must not affect it.
    let mut router = Router::starting_at(Screen::ManageMenu);
    router.apply(Transition::Push(Screen::Payment {
        checkout: snapshot.clone(),
    }));
    composer.remove("6");
    assert!(composer.items().is_empty());

    match router.current() {
        Some(Screen::Payment { checkout }) => {
            assert_eq!(checkout.items.len(), 1);
            assert_eq!(checkout.total, 600);
        }
        other => panic!("expected Payment screen, got {:?}", other),
    }

    // Cancelling pops back to the manage screen with nothing changed.
    router.apply(Transition::Pop);
    assert_eq!(router.current().map(Screen::name), Some("ManageMenu"));
}

#[test]
fn confirmed_payment_resets_the_flow_to_home() {
    let mut router = Router::new();
    router.apply(Transition::Push(Screen::Menu));
    router.apply(Transition::Push(Screen::Payment {
        checkout: CheckoutSnapshot::empty(),
    }));

    let receipt = PaymentService::new().confirm(CheckoutSnapshot::empty());
    assert_eq!(receipt.total, 0);

    router.apply(Transition::ResetTo(Screen::Description {
        checkout: CheckoutSnapshot::empty(),
    }));
    assert_eq!(router.depth(), 1);
    assert_eq!(router.current().map(Screen::name), Some("Description"));
}

#[test]
fn catalog_export_round_trips_through_json() {
    let catalog = Catalog::sample();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    let json = serde_json::to_string_pretty(&catalog).unwrap();
    std::fs::write(&path, &json).unwrap();

    let restored: Catalog = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(restored.dish_count(), catalog.dish_count());
    assert_eq!(restored.dishes(), catalog.dishes());
}
