//! Recipe page: the embedded HTML template filled with one recipe card.

use axum::{extract::State, response::Html};
use recipebox_core::RecipeCard;
use std::fmt::Write as _;
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;

/// Embedded HTML for the recipe page
pub const RECIPE_HTML: &str = include_str!("recipe.html");

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // keeps recipe text from looking like a template slot
            '{' => out.push_str("&#123;"),
            _ => out.push(c),
        }
    }
    out
}

fn list_items(items: &[String]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "        <li>{}</li>", escape_html(item));
    }
    out
}

/// Fill the page template. Every value is HTML-escaped; the image tag is
/// left out when the recipe has no image.
pub fn render_recipe_page(card: &RecipeCard) -> String {
    let image = if card.image.is_empty() {
        String::new()
    } else {
        let src = escape_html(&card.image);
        format!(r#"<img class="dish" src="{src}" alt="{}">"#, escape_html(&card.title))
    };

    RECIPE_HTML
        .replace("{{title}}", &escape_html(&card.title))
        .replace("{{image}}", &image)
        .replace("{{ingredients}}", list_items(&card.ingredients).trim_end())
        .replace("{{steps}}", list_items(&card.steps).trim_end())
}

/// Serve a random recipe rendered as HTML
pub async fn serve_random_recipe(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ApiError> {
    let card = state.recipe_service.random_recipe().await?;
    Ok(Html(render_recipe_page(&card)))
}
