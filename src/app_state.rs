use crate::services::EmployeeService;

pub struct AppState {
    pub employees: EmployeeService,
}

impl AppState {
    pub fn new(employees: EmployeeService) -> Self {
        AppState { employees }
    }
}
