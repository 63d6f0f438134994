//! Read-only content endpoints consumed by page rendering
//!
//! Resolution never fails, so these handlers always answer 200 with a
//! usable value; worst case the payload carries placeholder content.

use std::collections::HashMap;

use actix_web::{Responder, get, web};

use vitrine_content::ImageCategory;

use crate::model::{AppState, Result};

/// GET /api/content/about
#[get("about")]
pub async fn about_content(data: web::Data<AppState>) -> impl Responder {
    let content = data.aggregator().about_content().await;

    Result::<vitrine_content::AboutContent>::http_success(content)
}

/// GET /api/content/images
#[get("images")]
pub async fn image_urls(data: web::Data<AppState>) -> impl Responder {
    let resolver = data.resolver();

    let mut urls = HashMap::with_capacity(ImageCategory::ALL.len());
    for category in ImageCategory::ALL {
        urls.insert(category.as_str(), resolver.resolve(category).await);
    }

    Result::<HashMap<&str, String>>::http_success(urls)
}

/// GET /api/content/image/{category}
#[get("image/{category}")]
pub async fn image_url(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    let category = path.into_inner();
    let url = data.resolver().resolve_name(&category).await;

    Result::<String>::http_success(url)
}
