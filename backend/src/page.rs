use actix_web::web;
use maud::{DOCTYPE, Markup, html};

use crate::config::ViewSettings;

/// Renders the hello page around the view's initial heading.
pub fn render(settings: &ViewSettings) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (settings.title) }
                link rel="stylesheet" href="/assets/style.css";
            }
            body {
                main class="view" data-push="/hello/push" {
                    h1 id="heading" { (settings.label) }
                }
                script src="/assets/push.js" defer {}
            }
        }
    }
}

pub async fn hello(settings: web::Data<ViewSettings>) -> Markup {
    render(&settings)
}
