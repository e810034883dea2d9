use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Employee;

/// Payload accepted by both create and update
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 2, max = 100))]
    #[schema(example = "Alice Smith", min_length = 2, max_length = 100)]
    pub full_name: String,
    #[validate(length(min = 10, max = 20))]
    #[schema(example = "+1234567890", min_length = 10, max_length = 20)]
    pub phone: String,
    #[validate(length(min = 2, max = 50))]
    #[schema(example = "Austin", min_length = 2, max_length = 50)]
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EmployeeResponse {
    #[schema(example = 1)]
    pub id: i32,
    pub full_name: String,
    pub phone: String,
    pub city: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name,
            phone: employee.phone,
            city: employee.city,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(full_name: &str, phone: &str, city: &str) -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            full_name: full_name.to_string(),
            phone: phone.to_string(),
            city: city.to_string(),
        }
    }

    #[test]
    fn accepts_values_inside_bounds() {
        assert!(request("Alice Smith", "+1234567890", "Austin")
            .validate()
            .is_ok());
        assert!(request("Al", "0123456789", "NY").validate().is_ok());
        assert!(request(&"a".repeat(100), &"1".repeat(20), &"c".repeat(50))
            .validate()
            .is_ok());
    }

    #[test]
    fn rejects_values_outside_bounds() {
        let errors = request("A", "+1234567890", "Austin").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("full_name"));

        let errors = request("Alice Smith", "123456789", "Austin")
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));

        let errors = request("Alice Smith", &"1".repeat(21), "A")
            .validate()
            .unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("city"));
        assert!(!fields.contains_key("full_name"));
    }

    #[test]
    fn rejects_empty_fields() {
        let errors = request("", "", "").validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 3);
    }

    #[test]
    fn lengths_are_counted_in_characters() {
        // 6 characters, 12 bytes
        assert!(request("Нұржан", "+7 701 123 45 67", "Астана")
            .validate()
            .is_ok());
        // 51 two-byte characters
        assert!(request("Нұржан", "+7 701 123 45 67", &"ә".repeat(51))
            .validate()
            .is_err());
    }

    #[test]
    fn response_is_a_field_copy_of_the_entity() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let updated = Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap();
        let employee = Employee {
            id: 7,
            full_name: "Alice Smith".into(),
            phone: "+1234567890".into(),
            city: "Austin".into(),
            created_at: created,
            updated_at: updated,
        };

        let response = EmployeeResponse::from(employee);

        assert_eq!(response.id, 7);
        assert_eq!(response.full_name, "Alice Smith");
        assert_eq!(response.phone, "+1234567890");
        assert_eq!(response.city, "Austin");
        assert_eq!(response.created_at, created);
        assert_eq!(response.updated_at, updated);
    }

    #[test]
    fn response_serializes_with_snake_case_keys() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let response = EmployeeResponse {
            id: 1,
            full_name: "Alice Smith".into(),
            phone: "+1234567890".into(),
            city: "Austin".into(),
            created_at: at,
            updated_at: at,
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["full_name"], "Alice Smith");
        assert_eq!(json["created_at"], "2024-05-01T09:30:00Z");
        assert_eq!(json["updated_at"], json["created_at"]);
    }
}
