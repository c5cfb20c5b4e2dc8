//! Inventory operations that touch more than a single generic CRUD statement.

use crate::error::AppError;
use crate::models::{Entity, NewProduct, NewTransaction, Product, Transaction};
use crate::service::CrudService;
use crate::sql::{increment, insert, sum_where};
use sqlx::AnyConnection;

pub struct InventoryService;

impl InventoryService {
    pub async fn create_product(conn: &mut AnyConnection, new: &NewProduct) -> Result<Product, AppError> {
        let q = insert(
            &Product::META,
            vec![
                ("item", new.item.as_str().into()),
                ("description", new.description.as_str().into()),
                ("quantity", new.quantity.into()),
            ],
        );
        let product: Product = CrudService::query_optional(conn, &q)
            .await?
            .ok_or(AppError::NoRowReturned(Product::META.table))?;
        tracing::info!(id = product.id, item = %product.item, "product created");
        Ok(product)
    }

    /// Insert the transaction and add its quantity to the product, on the caller's unit of work.
    /// The product is bumped first so an unknown `products_id` fails before anything is written.
    pub async fn record_transaction(
        conn: &mut AnyConnection,
        new: &NewTransaction,
    ) -> Result<(Transaction, Product), AppError> {
        let bump = increment(&Product::META, "quantity", new.products_id, new.quantity);
        let product: Product = match CrudService::query_optional(conn, &bump).await? {
            Some(p) => p,
            None => {
                tracing::warn!(products_id = new.products_id, "transaction for missing product");
                return Err(AppError::NotFound(Product::META.label));
            }
        };

        let q = insert(
            &Transaction::META,
            vec![
                ("purchases_id", new.purchases_id.into()),
                ("products_id", new.products_id.into()),
                ("sales_id", new.sales_id.into()),
                ("quantity", new.quantity.into()),
                ("warehouses_id", new.warehouses_id.into()),
            ],
        );
        let transaction: Transaction = CrudService::query_optional(conn, &q)
            .await?
            .ok_or(AppError::NoRowReturned(Transaction::META.table))?;
        tracing::info!(
            id = transaction.id,
            products_id = product.id,
            delta = transaction.quantity,
            quantity = product.quantity,
            "transaction recorded"
        );
        Ok((transaction, product))
    }

    /// Sum of transaction quantities recorded against a product.
    pub async fn product_total(conn: &mut AnyConnection, products_id: i64) -> Result<i64, AppError> {
        if CrudService::find::<Product>(conn, products_id).await?.is_none() {
            return Err(AppError::NotFound(Product::META.label));
        }
        let q = sum_where(&Transaction::META, "quantity", "products_id", products_id.into());
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let (total,): (i64,) = q.build_as::<(i64,)>().fetch_one(&mut *conn).await?;
        Ok(total)
    }
}
