use std::path::Path;

use actix_web::{HttpResponse, web};
use log::debug;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct PageAssets;

pub async fn serve(path: web::Path<String>) -> HttpResponse {
    serve_asset(&path)
}

fn serve_asset(path: &str) -> HttpResponse {
    let file = match Path::new(path).file_name().and_then(|f| f.to_str()) {
        Some(file) => file,
        None => return HttpResponse::BadRequest().body("400 Bad Request"),
    };
    match PageAssets::get(file) {
        Some(content) => HttpResponse::Ok()
            .content_type(mime_guess::from_path(file).first_or_octet_stream().as_ref())
            .append_header(("Cache-Control", "public, max-age=604800"))
            .body(content.data.into_owned()),
        None => {
            debug!("no embedded asset named {file}");
            HttpResponse::NotFound().body("404 Not Found")
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::http::header::{CACHE_CONTROL, CONTENT_TYPE};

    use super::*;

    #[test]
    fn script_is_served_as_javascript() {
        let res = serve_asset("push.js");
        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.contains("javascript"));
        assert_eq!(
            res.headers().get(CACHE_CONTROL).unwrap(),
            "public, max-age=604800"
        );
    }

    #[test]
    fn missing_asset_is_not_found() {
        assert_eq!(serve_asset("nope.css").status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn directory_parts_are_ignored() {
        assert_eq!(serve_asset("../../style.css").status(), StatusCode::OK);
    }
}
