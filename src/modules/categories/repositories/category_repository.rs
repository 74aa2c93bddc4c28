use crate::core::crud::mysql::{MySqlQuery, SqlEntity};
use crate::modules::categories::models::Category;

/// Column mapping for the `categories` table, consumed by `MySqlRepository<Category>`
impl SqlEntity for Category {
    const TABLE: &'static str = "categories";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query.bind(&self.name)
    }
}
