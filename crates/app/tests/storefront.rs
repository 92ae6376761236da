//! Integration tests for the storefront session lifecycle.

use std::sync::Arc;

use rust_decimal::Decimal;
use storefront::prelude::*;
use storefront_app::{
    auth::{
        AuthError, AuthFormError, Credentials, IdentityProvider, InMemoryIdentityProvider,
        MockIdentityProvider, SignupForm,
    },
    checkout::CheckoutError,
    context::AppContext,
    feed::{FeedError, InMemoryProductFeed, MockProductFeed},
    reviews::ReviewServiceError,
    session::SessionError,
    storefront::{Storefront, StorefrontEvent},
};
use testresult::TestResult;
use tokio::sync::watch;

fn catalog() -> Result<ProductSnapshot, CatalogError> {
    load_catalog(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../core/fixtures/products/catalog.yml"
    ))
}

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

fn signup_form(email: &str) -> SignupForm {
    SignupForm {
        email: email.to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
    }
}

fn checkout_form() -> CheckoutForm {
    CheckoutForm {
        name: "Ayşe Yılmaz".to_string(),
        address: "Bağdat Caddesi 1".to_string(),
        city: "Istanbul".to_string(),
        postal_code: "34000".to_string(),
        card_number: "1111 2222 3333 4444".to_string(),
        expiry_date: "09/27".to_string(),
        cvv: "123".to_string(),
    }
}

struct Harness {
    identity: Arc<InMemoryIdentityProvider>,
    feed: Arc<InMemoryProductFeed>,
    storefront: Storefront,
}

fn harness() -> Result<Harness, CatalogError> {
    let identity = Arc::new(InMemoryIdentityProvider::new());
    let feed = Arc::new(InMemoryProductFeed::new(catalog()?));

    let storefront = Storefront::new(AppContext::new(identity.clone(), feed.clone()));

    Ok(Harness {
        identity,
        feed,
        storefront,
    })
}

fn add(storefront: &mut Storefront, id: &str) -> TestResult {
    let product = storefront
        .product(&ProductId::from(id))
        .found()
        .cloned()
        .ok_or("product should be in the catalog")?;

    storefront.cart_mut()?.add_to_cart(&product);

    Ok(())
}

#[tokio::test]
async fn starts_signed_out_with_default_view() -> TestResult {
    let Harness { mut storefront, .. } = harness()?;

    assert!(storefront.session().is_none(), "no session before sign-in");
    assert_eq!(
        ids(storefront.displayed()),
        vec!["3", "1", "2", "6", "7", "5", "4"]
    );
    assert_eq!(storefront.cart_mut().err(), Some(SessionError::SignedOut));

    Ok(())
}

#[tokio::test]
async fn view_parameters_reproject_the_list() -> TestResult {
    let Harness { mut storefront, .. } = harness()?;

    storefront.set_origin(OriginFilter::Only(CountryOfOrigin::Turkey));
    storefront.set_sort(SortOption::PriceAscending);

    assert_eq!(ids(storefront.displayed()), vec!["2", "3", "1"]);

    storefront.set_search("vestel");

    assert_eq!(ids(storefront.displayed()), vec!["2"]);

    storefront.set_search("");
    storefront.set_origin(OriginFilter::All);
    storefront.set_sort(SortOption::Default);

    assert_eq!(storefront.displayed().len(), 7);

    Ok(())
}

#[tokio::test]
async fn pushed_snapshot_replaces_displayed_products() -> TestResult {
    let Harness {
        feed,
        mut storefront,
        ..
    } = harness()?;

    let beko = storefront
        .product(&ProductId::from("1"))
        .found()
        .cloned()
        .ok_or("beko should be in the catalog")?;

    feed.publish(ProductSnapshot::new([beko]));

    assert_eq!(
        storefront.next_event().await,
        Some(StorefrontEvent::ProductsUpdated)
    );
    assert_eq!(ids(storefront.displayed()), vec!["1"]);
    assert!(matches!(
        storefront.product(&ProductId::from("2")),
        ProductLookup::NotFound(_)
    ));

    Ok(())
}

#[tokio::test]
async fn signup_starts_a_session_with_an_empty_cart() -> TestResult {
    let Harness { mut storefront, .. } = harness()?;

    let user = storefront.signup(&signup_form("shopper@example.com")).await?;

    let session = storefront.session().ok_or("session should exist")?;

    assert_eq!(session.user(), &user);
    assert!(session.cart().is_empty(), "new session starts with empty cart");

    Ok(())
}

#[tokio::test]
async fn checkout_clears_cart_only_on_success() -> TestResult {
    let Harness { mut storefront, .. } = harness()?;

    storefront.signup(&signup_form("shopper@example.com")).await?;

    add(&mut storefront, "1")?;
    add(&mut storefront, "1")?;
    add(&mut storefront, "2")?;

    let invalid = CheckoutForm {
        postal_code: "34 000x".to_string(),
        ..checkout_form()
    };

    assert_eq!(
        storefront.checkout(&invalid),
        Err(CheckoutError::Invalid(ValidationError {
            field: CheckoutField::PostalCode
        }))
    );
    assert_eq!(storefront.cart().map(Cart::cart_item_count), Some(3));

    let confirmation = storefront.checkout(&checkout_form())?;

    assert_eq!(confirmation.item_count, 3);
    assert_eq!(confirmation.lines.len(), 2);
    assert_eq!(
        confirmation.total,
        confirmation.lines.iter().map(|line| line.line_total).sum::<Decimal>()
    );
    assert_eq!(storefront.cart().map(Cart::is_empty), Some(true));

    assert_eq!(
        storefront.checkout(&checkout_form()),
        Err(CheckoutError::EmptyCart)
    );

    Ok(())
}

#[tokio::test]
async fn logout_discards_the_cart() -> TestResult {
    let Harness { mut storefront, .. } = harness()?;

    storefront.signup(&signup_form("shopper@example.com")).await?;
    add(&mut storefront, "3")?;

    storefront.logout().await?;

    assert!(storefront.session().is_none(), "session ends on logout");
    assert_eq!(
        storefront.checkout(&checkout_form()),
        Err(CheckoutError::Session(SessionError::SignedOut))
    );

    storefront
        .login(&Credentials::new("shopper@example.com", "secret1"))
        .await?;

    assert_eq!(storefront.cart().map(Cart::len), Some(0));

    Ok(())
}

#[tokio::test]
async fn identity_changes_arrive_as_events() -> TestResult {
    let Harness {
        identity,
        mut storefront,
        ..
    } = harness()?;

    let user = identity
        .signup(&Credentials::new("other@example.com", "secret1"))
        .await?;

    assert_eq!(
        storefront.next_event().await,
        Some(StorefrontEvent::SignedIn(user))
    );

    identity.logout().await?;

    assert_eq!(
        storefront.next_event().await,
        Some(StorefrontEvent::SignedOut)
    );
    assert!(storefront.session().is_none(), "session ends with identity");

    Ok(())
}

#[tokio::test]
async fn form_errors_never_reach_the_provider() -> TestResult {
    let mut identity = MockIdentityProvider::new();

    identity
        .expect_subscribe()
        .returning(|| watch::channel(None).1);
    identity.expect_login().never();
    identity.expect_signup().never();

    let feed = Arc::new(InMemoryProductFeed::new(catalog()?));
    let mut storefront = Storefront::new(AppContext::new(Arc::new(identity), feed));

    let login = storefront
        .login(&Credentials::new("shopper@example.com", ""))
        .await;

    assert_eq!(
        login,
        Err(AuthError::Form(AuthFormError::MissingLoginFields))
    );

    let signup = storefront
        .signup(&SignupForm {
            confirm_password: "different".to_string(),
            ..signup_form("shopper@example.com")
        })
        .await;

    assert_eq!(signup, Err(AuthError::Form(AuthFormError::PasswordMismatch)));

    Ok(())
}

#[tokio::test]
async fn provider_failure_leaves_state_unchanged() -> TestResult {
    let mut identity = MockIdentityProvider::new();

    identity
        .expect_subscribe()
        .returning(|| watch::channel(None).1);
    identity
        .expect_login()
        .returning(|_| Err(AuthError::Provider("Invalid email or password.".to_string())));

    let feed = Arc::new(InMemoryProductFeed::new(catalog()?));
    let mut storefront = Storefront::new(AppContext::new(Arc::new(identity), feed));
    let before = storefront.displayed().to_vec();

    let result = storefront
        .login(&Credentials::new("shopper@example.com", "wrong-password"))
        .await;

    assert_eq!(
        result.map_err(|error| error.to_string()),
        Err("Invalid email or password.".to_string())
    );
    assert!(storefront.session().is_none(), "no session after failure");
    assert_eq!(storefront.displayed(), before.as_slice());

    Ok(())
}

#[tokio::test]
async fn reviews_require_a_session_and_list_newest_first() -> TestResult {
    let Harness { mut storefront, .. } = harness()?;
    let id = ProductId::from("4");

    assert_eq!(
        storefront.submit_review(&id, 5, "Great").await,
        Err(ReviewServiceError::Session(SessionError::SignedOut))
    );

    storefront.signup(&signup_form("shopper@example.com")).await?;

    assert_eq!(
        storefront.submit_review(&id, 0, "Great").await,
        Err(ReviewServiceError::Invalid(ReviewError::InvalidRating(0)))
    );
    assert_eq!(
        storefront.submit_review(&id, 4, "   ").await,
        Err(ReviewServiceError::Invalid(ReviewError::EmptyComment))
    );
    assert_eq!(
        storefront.submit_review(&ProductId::from("404"), 4, "Fine").await,
        Err(ReviewServiceError::ProductNotFound(ProductId::from("404")))
    );

    let first = storefront.submit_review(&id, 4, "Good picture").await?;
    let second = storefront.submit_review(&id, 5, " Even better later ").await?;

    assert_eq!(second.comment, "Even better later");

    let summary = storefront.reviews(&id).await?;
    let listed: Vec<&str> = summary.reviews.iter().map(|r| r.id.as_str()).collect();

    assert_eq!(listed, vec![second.id.as_str(), first.id.as_str()]);
    assert_eq!(summary.average, Some(Decimal::new(45, 1)));

    Ok(())
}

#[tokio::test]
async fn feed_rejection_is_surfaced() -> TestResult {
    let mut feed = MockProductFeed::new();
    let snapshot = catalog()?;

    feed.expect_subscribe_products()
        .returning(move || watch::channel(snapshot.clone()).1);
    feed.expect_submit_review()
        .returning(|_, _| Err(FeedError::Rejected("permission denied".to_string())));

    let identity = Arc::new(InMemoryIdentityProvider::new());
    let mut storefront = Storefront::new(AppContext::new(identity, Arc::new(feed)));

    storefront.signup(&signup_form("shopper@example.com")).await?;

    let result = storefront
        .submit_review(&ProductId::from("1"), 3, "Does the job")
        .await;

    assert_eq!(
        result,
        Err(ReviewServiceError::Feed(FeedError::Rejected(
            "permission denied".to_string()
        )))
    );

    Ok(())
}

#[tokio::test]
async fn unavailable_feed_is_surfaced_when_reading_reviews() -> TestResult {
    let mut feed = MockProductFeed::new();
    let snapshot = catalog()?;

    feed.expect_subscribe_products()
        .returning(move || watch::channel(snapshot.clone()).1);
    feed.expect_subscribe_reviews()
        .returning(|_| Err(FeedError::Unavailable("feed offline".to_string())));

    let identity = Arc::new(InMemoryIdentityProvider::new());
    let storefront = Storefront::new(AppContext::new(identity, Arc::new(feed)));
    let before = storefront.displayed().to_vec();

    let result = storefront.reviews(&ProductId::from("1")).await;

    assert_eq!(
        result,
        Err(ReviewServiceError::Feed(FeedError::Unavailable(
            "feed offline".to_string()
        )))
    );
    assert_eq!(result.map_err(|error| error.to_string()), Err("feed offline".to_string()));
    assert_eq!(storefront.displayed(), before.as_slice());

    Ok(())
}
