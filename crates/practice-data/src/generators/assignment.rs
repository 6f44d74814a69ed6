//! Employee-to-project assignment generation.

use rand::Rng;
use rand::seq::SliceRandom;

use super::GenerateError;

/// Role an employee plays on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Developer,
    Lead,
    Assistant,
    Analyst,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Developer, Role::Lead, Role::Assistant, Role::Analyst];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "Developer",
            Role::Lead => "Lead",
            Role::Assistant => "Assistant",
            Role::Analyst => "Analyst",
        }
    }
}

/// Generated `project_assignments` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub assignment_id: i64,
    pub employee_id: i64,
    pub project_id: i64,
    pub role: Role,
    pub hours_allocated: i64,
}

/// Configuration for assignment generation.
#[derive(Debug, Clone)]
pub struct AssignmentGenConfig {
    /// Only this many leading employees receive assignments.
    pub assigned_employees: usize,
    /// Inclusive range of distinct projects per employee.
    ///
    /// # Panics
    /// Generation panics if the range is empty.
    pub projects_per_employee: (usize, usize),
    /// Half-open range of weekly hours per assignment.
    ///
    /// # Panics
    /// Generation panics if the range is empty.
    pub hours_range: (i64, i64),
}

impl Default for AssignmentGenConfig {
    fn default() -> Self {
        Self {
            assigned_employees: 30,
            projects_per_employee: (1, 3),
            hours_range: (10, 40),
        }
    }
}

/// Generates many-to-many assignments between employees and projects.
pub struct AssignmentGenerator {
    config: AssignmentGenConfig,
}

impl AssignmentGenerator {
    /// Creates a new assignment generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: AssignmentGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: AssignmentGenConfig) -> Self {
        Self { config }
    }

    /// Generates assignments for the leading employees.
    ///
    /// Each employee gets a uniform number of projects sampled without
    /// replacement, so no (employee, project) pair repeats. Assignment ids are
    /// sequential from 1.
    pub fn generate(
        &self,
        employee_ids: &[i64],
        project_ids: &[i64],
        rng: &mut impl Rng,
    ) -> Result<Vec<Assignment>, GenerateError> {
        if employee_ids.is_empty() {
            return Err(GenerateError::EmptyReference("employees"));
        }
        if project_ids.is_empty() {
            return Err(GenerateError::EmptyReference("projects"));
        }

        let (min_projects, max_projects) = self.config.projects_per_employee;
        let (min_hours, max_hours) = self.config.hours_range;
        let assigned = self.config.assigned_employees.min(employee_ids.len());
        let mut assignments = Vec::new();

        for &employee_id in &employee_ids[..assigned] {
            let n_projects = rng
                .gen_range(min_projects..=max_projects)
                .min(project_ids.len());
            let picked: Vec<i64> = project_ids
                .choose_multiple(rng, n_projects)
                .copied()
                .collect();

            for project_id in picked {
                assignments.push(Assignment {
                    assignment_id: assignments.len() as i64 + 1,
                    employee_id,
                    project_id,
                    role: Role::ALL[rng.gen_range(0..Role::ALL.len())],
                    hours_allocated: rng.gen_range(min_hours..max_hours),
                });
            }
        }

        Ok(assignments)
    }
}

impl Default for AssignmentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::seeded_rng;
    use std::collections::HashSet;

    fn ids(first: i64, n: i64) -> Vec<i64> {
        (first..first + n).collect()
    }

    #[test]
    fn test_generate_assignments() {
        let employees = ids(1001, 50);
        let projects = ids(3001, 10);
        let assignments = AssignmentGenerator::new()
            .generate(&employees, &projects, &mut seeded_rng(42))
            .unwrap();

        // 30 employees with 1-3 projects each
        assert!((30..=90).contains(&assignments.len()));

        for (i, a) in assignments.iter().enumerate() {
            assert_eq!(a.assignment_id, i as i64 + 1);
            assert!((1001..=1030).contains(&a.employee_id));
            assert!(projects.contains(&a.project_id));
            assert!((10..40).contains(&a.hours_allocated));
        }

        let assigned: HashSet<_> = assignments.iter().map(|a| a.employee_id).collect();
        assert_eq!(assigned.len(), 30);
    }

    #[test]
    fn test_no_duplicate_pairs() {
        let employees = ids(1001, 30);
        let projects = ids(3001, 10);
        let assignments = AssignmentGenerator::new()
            .generate(&employees, &projects, &mut seeded_rng(7))
            .unwrap();

        let pairs: HashSet<_> = assignments
            .iter()
            .map(|a| (a.employee_id, a.project_id))
            .collect();
        assert_eq!(pairs.len(), assignments.len());
    }

    #[test]
    fn test_fewer_projects_than_requested() {
        let assign_gen = AssignmentGenerator::with_config(AssignmentGenConfig {
            projects_per_employee: (3, 3),
            ..Default::default()
        });
        let assignments = assign_gen
            .generate(&ids(1001, 4), &ids(3001, 2), &mut seeded_rng(42))
            .unwrap();

        // Capped at the two available projects per employee
        assert_eq!(assignments.len(), 8);
    }

    #[test]
    fn test_empty_references_rejected() {
        let assign_gen = AssignmentGenerator::new();
        let mut rng = seeded_rng(42);

        assert!(matches!(
            assign_gen.generate(&[], &ids(3001, 10), &mut rng),
            Err(GenerateError::EmptyReference("employees"))
        ));
        assert!(matches!(
            assign_gen.generate(&ids(1001, 10), &[], &mut rng),
            Err(GenerateError::EmptyReference("projects"))
        ));
    }
}
