//! Column layouts of the generated tables.

use sqlx::Postgres;
use sqlx::query_builder::Separated;

use super::table::{Column, Record, SqlType};
use crate::generators::{Assignment, Employee, Project, Review, Sale, Transaction};

type Row<'qb, 'args> = Separated<'qb, 'args, Postgres, &'static str>;

impl Record for Transaction {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("transaction_id", SqlType::BigInt),
            Column::new("date", SqlType::Timestamp),
            Column::new("category", SqlType::Text),
            Column::new("amount", SqlType::Double),
            Column::new("customer_id", SqlType::BigInt),
            Column::new("status", SqlType::Text),
        ];
        COLUMNS
    }

    fn bind_row(&self, row: &mut Row<'_, '_>) {
        row.push_bind(self.transaction_id)
            .push_bind(self.date)
            .push_bind(self.category.as_str())
            .push_bind(self.amount)
            .push_bind(self.customer_id)
            .push_bind(self.status.as_str());
    }
}

impl Record for Employee {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("employee_id", SqlType::BigInt),
            Column::new("name", SqlType::Text),
            Column::new("department", SqlType::Text),
            Column::new("salary", SqlType::BigInt),
            Column::new("hire_date", SqlType::Date),
            Column::new("location", SqlType::Text),
        ];
        COLUMNS
    }

    fn bind_row(&self, row: &mut Row<'_, '_>) {
        row.push_bind(self.employee_id)
            .push_bind(self.name.clone())
            .push_bind(self.department.as_str())
            .push_bind(self.salary)
            .push_bind(self.hire_date)
            .push_bind(self.location);
    }
}

impl Record for Sale {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("sale_id", SqlType::BigInt),
            Column::new("employee_id", SqlType::BigInt),
            Column::new("sale_date", SqlType::Date),
            Column::new("amount", SqlType::BigInt),
            Column::new("product", SqlType::Text),
            Column::new("region", SqlType::Text),
            Column::new("year", SqlType::Integer),
            Column::new("month", SqlType::Integer),
        ];
        COLUMNS
    }

    fn bind_row(&self, row: &mut Row<'_, '_>) {
        row.push_bind(self.sale_id)
            .push_bind(self.employee_id)
            .push_bind(self.sale_date)
            .push_bind(self.amount)
            .push_bind(self.product.as_str())
            .push_bind(self.region.as_str())
            .push_bind(self.year)
            .push_bind(self.month);
    }
}

impl Record for Project {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("project_id", SqlType::BigInt),
            Column::new("project_name", SqlType::Text),
            Column::new("budget", SqlType::BigInt),
            Column::new("start_date", SqlType::Date),
            Column::new("status", SqlType::Text),
        ];
        COLUMNS
    }

    fn bind_row(&self, row: &mut Row<'_, '_>) {
        row.push_bind(self.project_id)
            .push_bind(self.project_name)
            .push_bind(self.budget)
            .push_bind(self.start_date)
            .push_bind(self.status.as_str());
    }
}

impl Record for Assignment {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("assignment_id", SqlType::BigInt),
            Column::new("employee_id", SqlType::BigInt),
            Column::new("project_id", SqlType::BigInt),
            Column::new("role", SqlType::Text),
            Column::new("hours_allocated", SqlType::BigInt),
        ];
        COLUMNS
    }

    fn bind_row(&self, row: &mut Row<'_, '_>) {
        row.push_bind(self.assignment_id)
            .push_bind(self.employee_id)
            .push_bind(self.project_id)
            .push_bind(self.role.as_str())
            .push_bind(self.hours_allocated);
    }
}

impl Record for Review {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("review_id", SqlType::BigInt),
            Column::new("employee_id", SqlType::BigInt),
            Column::new("review_date", SqlType::Date),
            Column::new("rating", SqlType::BigInt),
            Column::new("reviewer_id", SqlType::BigInt),
            Column::new("comments", SqlType::Text),
        ];
        COLUMNS
    }

    fn bind_row(&self, row: &mut Row<'_, '_>) {
        row.push_bind(self.review_id)
            .push_bind(self.employee_id)
            .push_bind(self.review_date)
            .push_bind(self.rating)
            .push_bind(self.reviewer_id)
            .push_bind(self.comments);
    }
}
