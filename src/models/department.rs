// file: src/models/department.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{deserialize_id, null_as_default};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Entry of the department filter; `id == None` means every department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentOption {
    pub id: Option<String>,
    pub name: String,
}

impl DepartmentOption {
    pub fn all() -> Self {
        Self {
            id: None,
            name: "All departments".to_string(),
        }
    }

    pub fn options(departments: &[Department]) -> Vec<DepartmentOption> {
        std::iter::once(Self::all())
            .chain(departments.iter().map(DepartmentOption::from))
            .collect()
    }
}

impl From<&Department> for DepartmentOption {
    fn from(department: &Department) -> Self {
        Self {
            id: Some(department.id.clone()),
            name: department.name.clone(),
        }
    }
}

impl fmt::Display for DepartmentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_accepts_numeric_id() {
        let departments: Vec<Department> =
            serde_json::from_str(r#"[{"id": 3, "name": "Engineering"}, {"id": "hr", "name": "HR"}]"#)
                .unwrap();
        assert_eq!(departments[0].id, "3");
        assert_eq!(departments[1].id, "hr");
    }

    #[test]
    fn test_options_start_with_all() {
        let departments = vec![Department {
            id: "3".to_string(),
            name: "Engineering".to_string(),
        }];
        let options = DepartmentOption::options(&departments);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0], DepartmentOption::all());
        assert_eq!(options[1].id.as_deref(), Some("3"));
        assert_eq!(options[1].to_string(), "Engineering");
    }
}
