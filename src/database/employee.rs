use async_trait::async_trait;
use tracing::debug;

use super::{now, refreshed_at, EmployeeRepository, PostgreDatabase, RepositoryError, Result};
use crate::models::Employee;

fn failed(action: &'static str) -> impl FnOnce(sqlx::Error) -> RepositoryError {
    move |source| RepositoryError::Database { action, source }
}

#[async_trait]
impl EmployeeRepository for PostgreDatabase {
    /// Insert a new employee, filling in its id and timestamps
    async fn create(&self, employee: &mut Employee) -> Result<()> {
        let created_at = now();

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO employees (full_name, phone, city, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&employee.full_name)
        .bind(&employee.phone)
        .bind(&employee.city)
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&self.sqlx_db)
        .await
        .map_err(failed("create"))?;

        employee.id = id;
        employee.created_at = created_at;
        employee.updated_at = created_at;
        debug!(id, "inserted employee");
        Ok(())
    }

    async fn get_by_id(&self, id: i32) -> Result<Employee> {
        sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, full_name, phone, city, created_at, updated_at
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.sqlx_db)
        .await
        .map_err(failed("get"))?
        .ok_or(RepositoryError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, full_name, phone, city, created_at, updated_at
            FROM employees
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.sqlx_db)
        .await
        .map_err(failed("list"))?;

        debug!(count = employees.len(), "listed employees");
        Ok(employees)
    }

    /// Replace the mutable fields of an existing employee and refresh `updated_at`
    async fn update(&self, employee: &mut Employee) -> Result<()> {
        let updated_at = refreshed_at(employee.updated_at);

        let result = sqlx::query(
            r#"
            UPDATE employees
            SET full_name = $2, phone = $3, city = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(employee.id)
        .bind(&employee.full_name)
        .bind(&employee.phone)
        .bind(&employee.city)
        .bind(updated_at)
        .execute(&self.sqlx_db)
        .await
        .map_err(failed("update"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        employee.updated_at = updated_at;
        debug!(id = employee.id, "updated employee");
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.sqlx_db)
            .await
            .map_err(failed("delete"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        debug!(id, "deleted employee");
        Ok(())
    }
}
