pub mod employee;

use actix_web::web;

// One route table for the binary and the tests. /allEmployees answers with
// and without the trailing slash, so both resources are registered.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(employee::index)))
        .service(web::resource("/allEmployees").route(web::get().to(employee::all_employees)))
        .service(web::resource("/allEmployees/").route(web::get().to(employee::all_employees)))
        .service(
            web::resource("/listEmployee/{empno}").route(web::get().to(employee::list_employee)),
        )
        .service(
            web::resource("/addEmployee/{firstName}/{lastName}")
                .route(web::get().to(employee::add_employee)),
        )
        .service(
            web::resource("/deleteEmployee/{empNo}")
                .route(web::get().to(employee::delete_employee)),
        )
        .service(
            web::resource("/updateEmployee/{empNo}/{newSalary}")
                .route(web::get().to(employee::update_employee)),
        )
        .service(
            web::resource("/addEmployeeTx/{firstName}/{lastName}")
                .route(web::get().to(employee::add_employee_tx)),
        )
        .service(
            web::resource("/deleteEmployeeTx/{empNo}")
                .route(web::get().to(employee::delete_employee_tx)),
        )
        .service(
            web::resource("/updateEmployeeTx/{empNo}/{newSalary}")
                .route(web::get().to(employee::update_employee_tx)),
        );
}
