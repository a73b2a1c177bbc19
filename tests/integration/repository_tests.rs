//! Repository integration tests

use std::str::FromStr;

use chrono::NaiveDate;
use lightbnb::{
    models::{CreateProperty, CreateUser, FilterOptions, Price, Rating},
    repository::{PropertyStore, Repository, ReservationStore, UserStore},
};
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;

async fn repository() -> Repository {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");
    let repository = Repository::new(pool);
    repository.migrate().await.expect("Failed to run migrations");
    repository
}

fn unique_email(prefix: &str) -> String {
    format!("{}-{}@lightbnb.test", prefix, std::process::id())
}

fn new_property(owner_id: i32, city: &str, cost: &str) -> CreateProperty {
    CreateProperty {
        owner_id,
        title: format!("Stay in {}", city),
        description: Some("Integration test listing".to_string()),
        thumbnail_photo_url: "https://example.com/thumb.jpg".to_string(),
        cover_photo_url: "https://example.com/cover.jpg".to_string(),
        cost_per_night: Price::try_from(Decimal::from_str(cost).unwrap()).unwrap(),
        parking_spaces: 1,
        number_of_bathrooms: 1,
        number_of_bedrooms: 2,
        country: "Canada".to_string(),
        street: "1 Test Street".to_string(),
        city: city.to_string(),
        province: "Ontario".to_string(),
        post_code: "A1A 1A1".to_string(),
    }
}

async fn add_review(repository: &Repository, guest_id: i32, property_id: i32, rating: i16) {
    let reservation_id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO reservations (start_date, end_date, property_id, guest_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
    .bind(NaiveDate::from_ymd_opt(2020, 1, 5).unwrap())
    .bind(property_id)
    .bind(guest_id)
    .fetch_one(&repository.pool)
    .await
    .expect("Failed to insert reservation");

    sqlx::query(
        r#"
        INSERT INTO property_reviews (guest_id, property_id, reservation_id, rating)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(guest_id)
    .bind(property_id)
    .bind(reservation_id)
    .bind(rating)
    .execute(&repository.pool)
    .await
    .expect("Failed to insert review");
}

#[tokio::test]
#[ignore]
async fn test_user_round_trip() {
    let repository = repository().await;
    let email = unique_email("user");

    let created = repository
        .users
        .create(&CreateUser {
            name: "Integration User".to_string(),
            email: email.clone(),
            password: "password".to_string(),
        })
        .await
        .expect("Failed to create user");

    let by_email = repository.users.get_by_email(&email.to_uppercase()).await.unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(created.id));

    let by_id = repository.users.get_by_id(created.id).await.unwrap();
    assert_eq!(by_id.map(|u| u.email), Some(email.clone()));

    assert!(repository.users.email_exists(&email).await.unwrap());
    assert!(repository.users.get_by_id(-1).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn test_property_search_filters() {
    let repository = repository().await;
    let owner = repository
        .users
        .create(&CreateUser {
            name: "Owner".to_string(),
            email: unique_email("owner"),
            password: "password".to_string(),
        })
        .await
        .unwrap();

    let city = format!("Testville{}", std::process::id());
    let cheap = repository
        .properties
        .create(&new_property(owner.id, &city, "50.25"))
        .await
        .unwrap();
    let pricey = repository
        .properties
        .create(&new_property(owner.id, &city, "300"))
        .await
        .unwrap();
    assert_eq!(cheap.cost_per_night, 5025);

    add_review(&repository, owner.id, cheap.id, 2).await;
    add_review(&repository, owner.id, pricey.id, 5).await;

    let options = FilterOptions {
        city: Some(format!("#{}", city)),
        owner_id: Some(owner.id),
        ..Default::default()
    };
    let listings = repository.properties.search(&options, 10).await.unwrap();
    let ids: Vec<i32> = listings.iter().map(|l| l.property.id).collect();
    assert_eq!(ids, vec![cheap.id, pricey.id]);

    let options = FilterOptions {
        minimum_rating: Some(Rating::try_from(Decimal::from(4)).unwrap()),
        ..options
    };
    let listings = repository.properties.search(&options, 10).await.unwrap();
    let ids: Vec<i32> = listings.iter().map(|l| l.property.id).collect();
    assert_eq!(ids, vec![pricey.id]);

    let options = FilterOptions {
        city: Some(format!("#{}", city)),
        maximum_price_per_night: Some(Price::from_minor_units(10000).unwrap()),
        ..Default::default()
    };
    let listings = repository.properties.search(&options, 10).await.unwrap();
    assert!(listings.iter().all(|l| l.property.cost_per_night <= 10000));
    assert!(listings.iter().any(|l| l.property.id == cheap.id));

    let past = repository.reservations.list_past_for_guest(owner.id, 10).await.unwrap();
    assert_eq!(past.len(), 2);
    assert!(past.iter().all(|r| r.guest_id == owner.id));
}
