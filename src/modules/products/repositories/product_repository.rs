use crate::core::crud::mysql::{MySqlQuery, SqlEntity};
use crate::modules::products::models::Product;

/// Column mapping for the `products` table, consumed by `MySqlRepository<Product>`
impl SqlEntity for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "description",
        "price",
        "stock_qty",
        "category_id",
        "sku",
        "tax_rate",
    ];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(&self.name)
            .bind(&self.description)
            .bind(self.price)
            .bind(self.stock_qty)
            .bind(self.category_id)
            .bind(&self.sku)
            .bind(self.tax_rate)
    }
}
