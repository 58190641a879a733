//! Blog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use chrono::NaiveDate;
use tracing::instrument;

use crate::filters;
use crate::state::AppState;
use crate::template::{Layout, Shell};

/// Post view for templates.
#[derive(Clone)]
pub struct PostView {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub published_at: NaiveDate,
    pub reading_time_minutes: u32,
}

/// Static posts for the blog index (can be replaced with dynamic data later).
fn get_posts() -> Vec<PostView> {
    vec![
        PostView {
            slug: "como-elegir-lampara-de-mesa".to_string(),
            title: "Cómo elegir la lámpara de mesa perfecta".to_string(),
            excerpt: "Altura, temperatura de color y estilo: los tres criterios que \
                      marcan la diferencia entre una lámpara más y la lámpara de tu escritorio."
                .to_string(),
            published_at: NaiveDate::from_ymd_opt(2026, 5, 12).unwrap_or_default(),
            reading_time_minutes: 4,
        },
        PostView {
            slug: "iluminacion-led-ahorro".to_string(),
            title: "LED: cuánto ahorras realmente".to_string(),
            excerpt: "Comparamos el consumo de una bombilla incandescente, una halógena \
                      y un LED durante un año de uso doméstico."
                .to_string(),
            published_at: NaiveDate::from_ymd_opt(2026, 3, 28).unwrap_or_default(),
            reading_time_minutes: 6,
        },
        PostView {
            slug: "tendencias-iluminacion-2026".to_string(),
            title: "Tendencias de iluminación para 2026".to_string(),
            excerpt: "Materiales naturales, luz cálida regulable y lámparas escultóricas: \
                      lo que veremos en los salones este año."
                .to_string(),
            published_at: NaiveDate::from_ymd_opt(2026, 1, 9).unwrap_or_default(),
            reading_time_minutes: 5,
        },
    ]
}

/// Blog index page template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/index.html")]
pub struct BlogIndexTemplate {
    pub shell: Shell,
    pub posts: Vec<PostView>,
}

/// Display the blog index page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    BlogIndexTemplate {
        shell: Shell::new(&state, "/blog")
            .page_title("Blog")
            .layout(Layout::Centered),
        posts: get_posts(),
    }
}
