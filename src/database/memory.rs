//! In-process stand-ins for [`PostgreDatabase`](super::PostgreDatabase) used by the
//! service and route tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{now, refreshed_at, EmployeeRepository, RepositoryError, Result};
use crate::models::Employee;

#[derive(Default)]
pub struct MemoryDatabase {
    inner: Mutex<Rows>,
}

#[derive(Default)]
struct Rows {
    last_id: i32,
    employees: Vec<Employee>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for MemoryDatabase {
    async fn create(&self, employee: &mut Employee) -> Result<()> {
        let mut rows = self.inner.lock().unwrap();
        rows.last_id += 1;
        let created_at = now();
        employee.id = rows.last_id;
        employee.created_at = created_at;
        employee.updated_at = created_at;
        rows.employees.push(employee.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: i32) -> Result<Employee> {
        let rows = self.inner.lock().unwrap();
        rows.employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<Employee>> {
        let rows = self.inner.lock().unwrap();
        let mut employees = rows.employees.clone();
        employees.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(employees)
    }

    async fn update(&self, employee: &mut Employee) -> Result<()> {
        let mut rows = self.inner.lock().unwrap();
        let stored = rows
            .employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or(RepositoryError::NotFound)?;

        let updated_at = refreshed_at(employee.updated_at);
        stored.full_name = employee.full_name.clone();
        stored.phone = employee.phone.clone();
        stored.city = employee.city.clone();
        stored.updated_at = updated_at;
        employee.updated_at = updated_at;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut rows = self.inner.lock().unwrap();
        let before = rows.employees.len();
        rows.employees.retain(|e| e.id != id);
        if rows.employees.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// Repository whose every call fails as if the pool could not hand out a connection
pub struct UnavailableDatabase;

fn unavailable(action: &'static str) -> RepositoryError {
    RepositoryError::Database {
        action,
        source: sqlx::Error::PoolTimedOut,
    }
}

#[async_trait]
impl EmployeeRepository for UnavailableDatabase {
    async fn create(&self, _employee: &mut Employee) -> Result<()> {
        Err(unavailable("create"))
    }

    async fn get_by_id(&self, _id: i32) -> Result<Employee> {
        Err(unavailable("get"))
    }

    async fn get_all(&self) -> Result<Vec<Employee>> {
        Err(unavailable("list"))
    }

    async fn update(&self, _employee: &mut Employee) -> Result<()> {
        Err(unavailable("update"))
    }

    async fn delete(&self, _id: i32) -> Result<()> {
        Err(unavailable("delete"))
    }
}
