use std::sync::Arc;

use tracing::info;

use crate::{
    database::{EmployeeRepository, Result},
    models::{
        dto::{CreateEmployeeRequest, EmployeeResponse},
        Employee,
    },
};

/// Employee use cases. Holds no state of its own; everything lives behind the repository.
#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_employee(&self, req: CreateEmployeeRequest) -> Result<EmployeeResponse> {
        let mut employee = Employee {
            full_name: req.full_name,
            phone: req.phone,
            city: req.city,
            ..Default::default()
        };

        self.repo.create(&mut employee).await?;
        info!(id = employee.id, "employee created");
        Ok(EmployeeResponse::from(employee))
    }

    pub async fn get_employee(&self, id: i32) -> Result<EmployeeResponse> {
        let employee = self.repo.get_by_id(id).await?;
        Ok(EmployeeResponse::from(employee))
    }

    pub async fn get_all_employees(&self) -> Result<Vec<EmployeeResponse>> {
        let employees = self.repo.get_all().await?;
        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    /// Reads the current row, then writes the new field values over it.
    ///
    /// The read and the write are separate statements: a concurrent delete in
    /// between surfaces as `NotFound`, a concurrent update is overwritten.
    pub async fn update_employee(
        &self,
        id: i32,
        req: CreateEmployeeRequest,
    ) -> Result<EmployeeResponse> {
        let mut employee = self.repo.get_by_id(id).await?;
        employee.full_name = req.full_name;
        employee.phone = req.phone;
        employee.city = req.city;

        self.repo.update(&mut employee).await?;
        info!(id, "employee updated");
        Ok(EmployeeResponse::from(employee))
    }

    pub async fn delete_employee(&self, id: i32) -> Result<()> {
        self.repo.delete(id).await?;
        info!(id, "employee deleted");
        Ok(())
    }
}
