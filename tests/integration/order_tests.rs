//! Order service integration tests

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::common::assertions::assert_field_error;
    use crate::common::fixtures::{self, BOOKS, ELECTRONICS};
    use crate::common::TestDatabase;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use shop_backend::ShopError;
    use shop_backend::core::dto::{OrderItemRequest, OrderRequest};
    use shop_backend::core::models::OrderStatus;
    use shop_backend::services::{CatalogService, OrderService};
    use shop_backend::storage::database::entities;

    fn request(items: &[(i64, i32)]) -> OrderRequest {
        OrderRequest {
            items: items
                .iter()
                .map(|&(product_id, quantity)| OrderItemRequest { product_id, quantity })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_place_order_composes_totals() {
        let db = TestDatabase::new().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let book = fixtures::product(db.db(), "The Lord of the Rings", 90.5, &[BOOKS]).await;
        let tv = fixtures::product(db.db(), "Smart TV", 2190.0, &[ELECTRONICS]).await;
        let orders = OrderService::new(db.db_arc());

        let order = orders
            .insert(&maria, request(&[(tv.id, 1), (book.id, 2)]))
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::WaitingPayment);
        assert_eq!(order.client.id, maria.id);
        assert!(order.payment.is_none());
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].product_id, book.id);
        assert_approx_eq!(order.items[0].sub_total, 181.0);
        assert_approx_eq!(order.total, 2371.0);
    }

    #[tokio::test]
    async fn test_order_keeps_price_snapshot() {
        let db = TestDatabase::new().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let book = fixtures::product(db.db(), "The Lord of the Rings", 90.5, &[BOOKS]).await;
        let orders = OrderService::new(db.db_arc());

        let placed = orders.insert(&maria, request(&[(book.id, 2)])).await.unwrap();

        db.db()
            .update_product(book.id, fixtures::draft("The Lord of the Rings", 120.0, &[BOOKS]))
            .await
            .unwrap();

        let reloaded = orders.find_by_id(&maria, placed.id).await.unwrap();
        assert_eq!(reloaded.items[0].price, 90.5);
        assert_approx_eq!(reloaded.total, 181.0);
    }

    #[tokio::test]
    async fn test_empty_order_is_field_error() {
        let db = TestDatabase::new().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let orders = OrderService::new(db.db_arc());

        let err = orders.insert(&maria, request(&[])).await.unwrap_err();
        assert_field_error(&err, "items");
    }

    #[tokio::test]
    async fn test_zero_quantity_is_field_error() {
        let db = TestDatabase::new().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let book = fixtures::product(db.db(), "Dune", 40.0, &[BOOKS]).await;
        let orders = OrderService::new(db.db_arc());

        let err = orders
            .insert(&maria, request(&[(book.id, 1), (book.id, 0)]))
            .await
            .unwrap_err();
        assert_field_error(&err, "items[1].quantity");
    }

    #[tokio::test]
    async fn test_unknown_product_rolls_back() {
        let db = TestDatabase::new().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let book = fixtures::product(db.db(), "Dune", 40.0, &[BOOKS]).await;
        let orders = OrderService::new(db.db_arc());

        let err = orders
            .insert(&maria, request(&[(book.id, 1), (999, 1)]))
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::NotFound(_)));

        let stored_orders = entities::Order::find()
            .count(db.db().connection())
            .await
            .unwrap();
        let stored_items = entities::OrderItem::find()
            .count(db.db().connection())
            .await
            .unwrap();
        assert_eq!(stored_orders, 0);
        assert_eq!(stored_items, 0);
    }

    #[tokio::test]
    async fn test_repeated_product_is_one_line() {
        let db = TestDatabase::new().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let book = fixtures::product(db.db(), "Dune", 40.0, &[BOOKS]).await;
        let orders = OrderService::new(db.db_arc());

        let order = orders
            .insert(&maria, request(&[(book.id, 1), (book.id, 2)]))
            .await
            .unwrap();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 3);
    }

    #[tokio::test]
    async fn test_order_visibility() {
        let db = TestDatabase::new().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let bob = fixtures::client(db.db(), "bob@gmail.com").await;
        let alex = fixtures::admin(db.db(), "alex@gmail.com").await;
        let book = fixtures::product(db.db(), "Dune", 40.0, &[BOOKS]).await;
        let orders = OrderService::new(db.db_arc());

        let placed = orders.insert(&maria, request(&[(book.id, 1)])).await.unwrap();

        assert!(orders.find_by_id(&maria, placed.id).await.is_ok());
        assert!(orders.find_by_id(&alex, placed.id).await.is_ok());
        assert!(matches!(
            orders.find_by_id(&bob, placed.id).await,
            Err(ShopError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_order_is_not_found() {
        let db = TestDatabase::new().await;
        let alex = fixtures::admin(db.db(), "alex@gmail.com").await;
        let orders = OrderService::new(db.db_arc());

        let err = orders.find_by_id(&alex, 77).await.unwrap_err();
        assert!(matches!(err, ShopError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_order_items_show_current_product_name() {
        let db = TestDatabase::new().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let book = fixtures::product(db.db(), "Dune", 40.0, &[BOOKS]).await;
        let orders = OrderService::new(db.db_arc());
        let catalog = CatalogService::new(db.db_arc());

        let placed = orders.insert(&maria, request(&[(book.id, 1)])).await.unwrap();
        assert_eq!(placed.items[0].name, "Dune");
        assert_eq!(
            placed.items[0].img_url,
            catalog.find_product(book.id).await.unwrap().img_url
        );
    }
}
