//! API routing configuration

use actix_web::{Scope, web};

use super::{admin, content};

/// Create the content and admin API routes
///
/// Routes:
/// - GET /api/content/about - About-section content object
/// - GET /api/content/images - All resolved image URLs
/// - GET /api/content/image/{category} - Single resolved image URL
/// - GET /api/admin/configs - List all config entries
/// - POST /api/admin/config - Create or update a config entry
pub fn routes() -> Scope {
    web::scope("/api")
        .service(
            web::scope("/content")
                .service(content::about_content)
                .service(content::image_urls)
                .service(content::image_url),
        )
        .service(
            web::scope("/admin")
                .service(admin::list_configs)
                .service(admin::update_config),
        )
}
