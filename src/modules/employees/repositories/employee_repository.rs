use crate::core::crud::mysql::{MySqlQuery, SqlEntity};
use crate::modules::employees::models::Employee;

/// Column mapping for the `employees` table, consumed by `MySqlRepository<Employee>`
impl SqlEntity for Employee {
    const TABLE: &'static str = "employees";
    const COLUMNS: &'static [&'static str] = &["name", "email", "phone", "date_hired"];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(&self.name)
            .bind(&self.email)
            .bind(&self.phone)
            .bind(&self.date_hired)
    }
}
