use crate::core::crud::mysql::{MySqlQuery, SqlEntity};
use crate::modules::customers::models::Customer;

/// Column mapping for the `customers` table, consumed by `MySqlRepository<Customer>`
impl SqlEntity for Customer {
    const TABLE: &'static str = "customers";
    const COLUMNS: &'static [&'static str] =
        &["name", "email", "phone", "address", "loyalty_points"];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(&self.name)
            .bind(&self.email)
            .bind(&self.phone)
            .bind(&self.address)
            .bind(self.loyalty_points)
    }
}
