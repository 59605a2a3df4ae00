//! Runs the model against a live PostgreSQL database.
//!
//! `DATABASE_URI=postgresql://... cargo test --test postgres_store -- --ignored`

mod common;

use common::sample_product;
use product_catalog::config::Config;
use product_catalog::database::{create_pool, init_db};
use product_catalog::models::{Category, ModelError, Product};
use product_catalog::store::{PgProductStore, ProductStore};

async fn connect() -> PgProductStore {
    let config = Config::from_env().unwrap();
    let pool = create_pool(&config).await.unwrap();
    init_db(&pool).await.unwrap();
    let store = PgProductStore::new(pool);
    store.delete_all().await.unwrap();
    store
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URI"]
async fn product_lifecycle_against_postgres() {
    let store = connect().await;

    let mut products = Vec::new();
    for n in 0..10 {
        let mut product = sample_product(n);
        product.create(&store).await.unwrap();
        products.push(product);
    }
    assert_eq!(Product::all(&store).await.unwrap().len(), 10);

    // round trip, price compared as a decimal
    let first = &products[0];
    let found = Product::find(&store, first.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(&found, first);

    let by_decimal = Product::find_by_price(&store, first.price).await.unwrap();
    let by_string = Product::find_by_price(&store, first.price.to_string()).await.unwrap();
    assert_eq!(by_decimal, by_string);
    assert!(by_decimal.iter().any(|p| p.id == first.id));

    let available = Product::find_by_availability(&store, true).await.unwrap();
    assert_eq!(available.len(), products.iter().filter(|p| p.available).count());

    let cloths = Product::find_by_category(&store, Category::Cloths).await.unwrap();
    assert_eq!(
        cloths.len(),
        products.iter().filter(|p| p.category == Category::Cloths).count()
    );

    let hats = Product::find_by_name(&store, "Hat").await.unwrap();
    assert_eq!(hats.len(), products.iter().filter(|p| p.name == "Hat").count());

    let mut updated = found.clone();
    updated.description = Some("foo".to_string());
    updated.update(&store).await.unwrap();
    let reread = Product::find(&store, first.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(reread.description.as_deref(), Some("foo"));

    assert!(updated.delete(&store).await.unwrap());
    assert!(Product::find(&store, first.id.unwrap()).await.unwrap().is_none());
    assert!(matches!(
        updated.update(&store).await.unwrap_err(),
        ModelError::NotFound(_)
    ));
    assert_eq!(Product::all(&store).await.unwrap().len(), 9);

    store.delete_all().await.unwrap();
}
