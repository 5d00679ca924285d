use actix_web::{Error, HttpRequest, HttpResponse, web};
use actix_web_actors::ws;
use log::info;

use crate::config::ViewSettings;
use crate::session::ViewSession;
use crate::{assets, page};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(page::hello))
        .route("/hello", web::get().to(page::hello))
        .route("/hello/push", web::get().to(push))
        .route("/assets/{file:.*}", web::get().to(assets::serve))
        .default_service(web::route().to(not_found));
}

async fn push(
    req: HttpRequest,
    stream: web::Payload,
    settings: web::Data<ViewSettings>,
) -> Result<HttpResponse, Error> {
    info!("push session from {:?}", req.peer_addr());
    ws::start(ViewSession::new(settings.get_ref().clone()), &req, stream)
}

async fn not_found(req: HttpRequest) -> HttpResponse {
    info!("not found: {}", req.path());
    HttpResponse::NotFound().body("404 Not Found")
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::{App, test};

    use super::*;

    fn app_settings() -> web::Data<ViewSettings> {
        web::Data::new(ViewSettings {
            label: "Rust: actix".into(),
            ..ViewSettings::default()
        })
    }

    #[actix_web::test]
    async fn root_and_hello_render_the_same_page() {
        let app =
            test::init_service(App::new().app_data(app_settings()).configure(configure)).await;

        for path in ["/", "/hello"] {
            let req = test::TestRequest::get().uri(path).to_request();
            let res = test::call_service(&app, req).await;
            let content_type = res.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
            assert!(content_type.starts_with("text/html"), "{path}");
            let body = test::read_body(res).await;
            let body = std::str::from_utf8(&body).unwrap();
            assert!(body.contains(r#"<h1 id="heading">Rust: actix</h1>"#), "{path}");
        }
    }

    #[actix_web::test]
    async fn assets_are_routed() {
        let app =
            test::init_service(App::new().app_data(app_settings()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/assets/style.css").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn unknown_paths_are_not_found() {
        let app =
            test::init_service(App::new().app_data(app_settings()).configure(configure)).await;
        for path in ["/goodbye", "/hello/extra", "/assets/missing.js"] {
            let req = test::TestRequest::get().uri(path).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND, "{path}");
        }
    }

    #[actix_web::test]
    async fn push_without_upgrade_is_rejected() {
        let app =
            test::init_service(App::new().app_data(app_settings()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/hello/push").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_client_error());
    }
}
