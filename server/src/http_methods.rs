use actix_web::{
    dev::{ServiceFactory, ServiceRequest},
    get,
    http::header,
    web, App, Error, HttpResponse, Responder,
};
use comms::{RockRecord, Wire};
use rusty_rocks::Dataset;
use tracing::{debug, error};

pub fn services<T: ServiceFactory<ServiceRequest, Config = (), Error = Error, InitError = ()>>(
    app: App<T>,
) -> App<T> {
    app.service(get_rocks).service(get_rock)
}

// http://127.0.0.1:8000/api/rocks
#[get("/api/rocks")]
async fn get_rocks(dataset: web::Data<Dataset>) -> impl Responder {
    let body = match dataset.to_records().to_wire() {
        Ok(b) => b,
        Err(e) => {
            error!("could not encode rock data: {e}");
            return HttpResponse::InternalServerError().body("Internal Server Error");
        }
    };

    debug!(samples = dataset.len(), "sending rock locations");
    HttpResponse::Ok()
        .content_type("application/json")
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .body(body)
}

// http://127.0.0.1:8000/rock/1
#[get("/rock/{id}")]
async fn get_rock(dataset: web::Data<Dataset>, id: web::Path<String>) -> impl Responder {
    match dataset.find(&id) {
        Some(sample) => HttpResponse::Ok().json(RockRecord::from(sample)),
        None => HttpResponse::NotFound().body("Rock not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use rusty_rocks::Sample;

    fn dataset() -> web::Data<Dataset> {
        web::Data::new(
            [
                Sample::new("1", "Basalt", "Iceland", 64.0, -19.0),
                Sample::new("2", "Granite", "Scotland", 57.0, -4.0),
            ]
            .into_iter()
            .collect(),
        )
    }

    #[actix_web::test]
    async fn rocks_endpoint_serves_json_array() {
        let app = test::init_service(services(App::new().app_data(dataset()))).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/api/rocks").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body.as_array().map(Vec::len), Some(2));
        assert_eq!(body[0]["Rocks"], "Basalt");
        assert_eq!(body[0]["Id"], "1");
        assert_eq!(body[1]["Place"], "Scotland");
        assert_eq!(body[1]["Longitude"], -4.0);
    }

    #[actix_web::test]
    async fn empty_dataset_is_empty_array() {
        let app = test::init_service(services(
            App::new().app_data(web::Data::new(Dataset::empty())),
        ))
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/api/rocks").to_request()).await;
        let body = test::read_body(res).await;
        assert_eq!(&body[..], b"[]");
    }

    #[actix_web::test]
    async fn detail_lookup() {
        let app = test::init_service(services(App::new().app_data(dataset()))).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/rock/2").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["Rocks"], "Granite");

        let res = test::call_service(&app, test::TestRequest::get().uri("/rock/99").to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn routes_match_shared_paths() {
        let app = test::init_service(services(App::new().app_data(dataset()))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri(comms::ROCKS_ENDPOINT).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri(&comms::detail_path("1")).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["Place"], "Iceland");
    }
}
