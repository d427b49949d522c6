use actix_web::{web, HttpResponse};
use chrono::Local;

use crate::service::EmployeeService;

// Every route is a GET, mutations included; the sample keeps the whole
// surface reachable from a browser address bar.

pub async fn index() -> HttpResponse {
    let now = Local::now().format("%Y-%m-%d:%H-%M-%S%.6f");
    let banner = format!(
        "Employee REST sample. Date/Time: {now}\n\
         \n\
         Usage:\n\
         /allEmployees - return a list of employees using a classic SELECT statement\n\
         /listEmployee/{{empno}} - a list of employee records for the employee number provided\n\
         \n\
         --- Update operations ---\n\
         /addEmployee/{{firstName}}/{{lastName}} - add an employee\n\
         /deleteEmployee/{{empNo}} - delete an employee\n\
         /updateEmployee/{{empNo}}/{{newSalary}} - update employee salary\n\
         \n\
         --- Update operations inside an explicit transaction ---\n\
         /addEmployeeTx/{{firstName}}/{{lastName}} - add an employee\n\
         /deleteEmployeeTx/{{empNo}} - delete an employee\n\
         /updateEmployeeTx/{{empNo}}/{{newSalary}} - update employee salary\n"
    );
    HttpResponse::Ok().body(banner)
}

pub async fn all_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, actix_web::Error> {
    let employees = service.select_all().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn list_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let empno = path.into_inner();
    let employees = service.select_by_empno(&empno).await?;
    Ok(HttpResponse::Ok().json(employees))
}

// Mutation outcomes are plain text; a zero-row mutation is still a 200 with
// the failure string in the body.

pub async fn add_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, actix_web::Error> {
    let (first_name, last_name) = path.into_inner();
    let result = service.add_employee(&first_name, &last_name).await?;
    Ok(HttpResponse::Ok().body(result))
}

pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let empno = path.into_inner();
    let result = service.delete_employee(&empno).await?;
    Ok(HttpResponse::Ok().body(result))
}

pub async fn update_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<(String, i64)>,
) -> Result<HttpResponse, actix_web::Error> {
    let (empno, new_salary) = path.into_inner();
    let result = service.update_salary(new_salary, &empno).await?;
    Ok(HttpResponse::Ok().body(result))
}

pub async fn add_employee_tx(
    service: web::Data<EmployeeService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, actix_web::Error> {
    let (first_name, last_name) = path.into_inner();
    let result = service.add_employee_tx(&first_name, &last_name).await?;
    Ok(HttpResponse::Ok().body(result))
}

pub async fn delete_employee_tx(
    service: web::Data<EmployeeService>,
    path: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let empno = path.into_inner();
    let result = service.delete_employee_tx(&empno).await?;
    Ok(HttpResponse::Ok().body(result))
}

pub async fn update_employee_tx(
    service: web::Data<EmployeeService>,
    path: web::Path<(String, i64)>,
) -> Result<HttpResponse, actix_web::Error> {
    let (empno, new_salary) = path.into_inner();
    let result = service.update_salary_tx(new_salary, &empno).await?;
    Ok(HttpResponse::Ok().body(result))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    #[actix_web::test]
    async fn index_lists_every_route_with_a_timestamp() {
        let app = test::init_service(App::new().configure(crate::handlers::configure)).await;
        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).expect("banner must be utf-8");
        assert!(text.contains("Date/Time:"));
        for route in [
            "/allEmployees",
            "/listEmployee/",
            "/addEmployee/",
            "/deleteEmployee/",
            "/updateEmployee/",
            "/addEmployeeTx/",
            "/deleteEmployeeTx/",
            "/updateEmployeeTx/",
        ] {
            assert!(text.contains(route), "banner is missing {}", route);
        }
    }
}
