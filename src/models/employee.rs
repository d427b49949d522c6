use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// One row of the EMP table. Field names are the Db2 sample column names
// lowercased, so the derived FromRow maps a SELECT * without renames.
// empno through lastname are NOT NULL in the schema, the rest is nullable.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug)]
pub struct Employee {
    pub empno: String,
    pub firstnme: String,
    pub midinit: String,
    pub lastname: String,
    pub workdept: Option<String>,
    pub phoneno: Option<String>,
    pub hiredate: Option<NaiveDate>,
    pub job: Option<String>,
    pub edlevel: Option<i16>,
    pub sex: Option<String>,
    // The sample keeps birth dates as text, not DATE.
    pub birthdate: Option<String>,
    pub salary: Option<i64>,
    pub bonus: Option<i64>,
    pub comm: Option<i64>,
}
