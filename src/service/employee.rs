use chrono::Local;
use rand::Rng;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::employee::Employee;

// Business service for the EMP table. Owns the pool handle; every operation
// is a single parameterized statement. Mutations report their outcome as a
// status string keyed off the affected-row count, never as an error.
#[derive(Clone)]
pub struct EmployeeService {
    pool: PgPool,
}

impl EmployeeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn select_all(&self) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>("SELECT * FROM emp")
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    // 0 or 1 rows; empno is the primary key.
    pub async fn select_by_empno(&self, empno: &str) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>("SELECT * FROM emp WHERE empno = $1")
            .bind(empno)
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    pub async fn add_employee(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<String, AppError> {
        let record = demo_record(generate_empno(), first_name, last_name);
        let rows = insert_employee(&self.pool, &record).await?;
        Ok(insert_message(&record.empno, rows))
    }

    pub async fn delete_employee(&self, empno: &str) -> Result<String, AppError> {
        let rows = delete_by_empno(&self.pool, empno).await?;
        Ok(delete_message(empno, rows))
    }

    pub async fn update_salary(&self, new_salary: i64, empno: &str) -> Result<String, AppError> {
        let rows = update_salary_by_empno(&self.pool, new_salary, empno).await?;
        Ok(update_message(empno, new_salary, rows))
    }

    // The *_tx variants run the same single statement inside an explicit
    // transaction scope: begin, statement, commit on success, rollback on a
    // statement failure. Results are indistinguishable from the plain
    // variants; only the atomicity boundary differs.

    pub async fn add_employee_tx(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<String, AppError> {
        let record = demo_record(generate_empno(), first_name, last_name);
        let mut tx = self.pool.begin().await?;
        match insert_employee(&mut *tx, &record).await {
            Ok(rows) => {
                tx.commit().await?;
                Ok(insert_message(&record.empno, rows))
            }
            Err(err) => {
                tx.rollback().await?;
                Err(err.into())
            }
        }
    }

    pub async fn delete_employee_tx(&self, empno: &str) -> Result<String, AppError> {
        let mut tx = self.pool.begin().await?;
        match delete_by_empno(&mut *tx, empno).await {
            Ok(rows) => {
                tx.commit().await?;
                Ok(delete_message(empno, rows))
            }
            Err(err) => {
                tx.rollback().await?;
                Err(err.into())
            }
        }
    }

    pub async fn update_salary_tx(&self, new_salary: i64, empno: &str) -> Result<String, AppError> {
        let mut tx = self.pool.begin().await?;
        match update_salary_by_empno(&mut *tx, new_salary, empno).await {
            Ok(rows) => {
                tx.commit().await?;
                Ok(update_message(empno, new_salary, rows))
            }
            Err(err) => {
                tx.rollback().await?;
                Err(err.into())
            }
        }
    }
}

// Statement helpers are generic over the executor so the pool path and the
// transaction path share one SQL string per operation.

async fn insert_employee(
    executor: impl sqlx::Executor<'_, Database = sqlx::Postgres>,
    record: &Employee,
) -> Result<u64, sqlx::Error> {
    // ON CONFLICT: a duplicate generated key reports zero rows instead of
    // raising a unique-violation error. No retry.
    let result = sqlx::query(
        "INSERT INTO emp (empno, firstnme, midinit, lastname, workdept, phoneno, hiredate, \
         job, edlevel, sex, birthdate, salary, bonus, comm) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
         ON CONFLICT (empno) DO NOTHING",
    )
    .bind(&record.empno)
    .bind(&record.firstnme)
    .bind(&record.midinit)
    .bind(&record.lastname)
    .bind(&record.workdept)
    .bind(&record.phoneno)
    .bind(record.hiredate)
    .bind(&record.job)
    .bind(record.edlevel)
    .bind(&record.sex)
    .bind(&record.birthdate)
    .bind(record.salary)
    .bind(record.bonus)
    .bind(record.comm)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

async fn delete_by_empno(
    executor: impl sqlx::Executor<'_, Database = sqlx::Postgres>,
    empno: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM emp WHERE empno = $1")
        .bind(empno)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

async fn update_salary_by_empno(
    executor: impl sqlx::Executor<'_, Database = sqlx::Postgres>,
    new_salary: i64,
    empno: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE emp SET salary = $1 WHERE empno = $2")
        .bind(new_salary)
        .bind(empno)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

// 6-digit key in [300000, 999999]. Not checked against existing keys; a
// collision surfaces as a zero-row insert.
fn generate_empno() -> String {
    rand::thread_rng().gen_range(300_000..=999_999).to_string()
}

// Everything except the names is a fixed demo constant.
fn demo_record(empno: String, first_name: &str, last_name: &str) -> Employee {
    Employee {
        empno,
        firstnme: first_name.to_string(),
        midinit: "A".to_string(),
        lastname: last_name.to_string(),
        workdept: Some("E21".to_string()),
        phoneno: Some("1234".to_string()),
        hiredate: Some(Local::now().date_naive()),
        job: Some("Engineer".to_string()),
        edlevel: Some(3),
        sex: Some("M".to_string()),
        birthdate: Some("1999-01-01".to_string()),
        salary: Some(20000),
        bonus: Some(1000),
        comm: Some(1000),
    }
}

fn insert_message(empno: &str, rows: u64) -> String {
    if rows > 0 {
        format!("employee {} added", empno)
    } else {
        "employee insert failed try again".to_string()
    }
}

fn delete_message(empno: &str, rows: u64) -> String {
    if rows > 0 {
        format!("employee {} deleted", empno)
    } else {
        "employee delete failed try again".to_string()
    }
}

fn update_message(empno: &str, new_salary: i64, rows: u64) -> String {
    if rows > 0 {
        format!("employee {} salary changed to {}", empno, new_salary)
    } else {
        "employee update failed try again".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_empno_is_six_digits_in_range() {
        for _ in 0..200 {
            let empno = generate_empno();
            assert_eq!(empno.len(), 6);
            let n: u32 = empno.parse().expect("empno must be numeric");
            assert!((300_000..=999_999).contains(&n));
        }
    }

    #[test]
    fn demo_record_fills_fixed_fields() {
        let record = demo_record("300001".to_string(), "Ada", "Lovelace");
        assert_eq!(record.empno, "300001");
        assert_eq!(record.firstnme, "Ada");
        assert_eq!(record.lastname, "Lovelace");
        assert_eq!(record.midinit, "A");
        assert_eq!(record.workdept.as_deref(), Some("E21"));
        assert_eq!(record.phoneno.as_deref(), Some("1234"));
        assert_eq!(record.hiredate, Some(Local::now().date_naive()));
        assert_eq!(record.job.as_deref(), Some("Engineer"));
        assert_eq!(record.edlevel, Some(3));
        assert_eq!(record.sex.as_deref(), Some("M"));
        assert_eq!(record.birthdate.as_deref(), Some("1999-01-01"));
        assert_eq!(record.salary, Some(20000));
        assert_eq!(record.bonus, Some(1000));
        assert_eq!(record.comm, Some(1000));
    }

    #[test]
    fn mutation_messages_follow_row_count() {
        assert_eq!(insert_message("368620", 1), "employee 368620 added");
        assert_eq!(insert_message("368620", 0), "employee insert failed try again");
        assert_eq!(delete_message("000010", 1), "employee 000010 deleted");
        assert_eq!(delete_message("000010", 0), "employee delete failed try again");
        assert_eq!(
            update_message("368620", 33333, 1),
            "employee 368620 salary changed to 33333"
        );
        assert_eq!(
            update_message("368620", 33333, 0),
            "employee update failed try again"
        );
    }
}
