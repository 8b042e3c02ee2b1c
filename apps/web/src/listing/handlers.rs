use axum::{
    extract::{Query, State},
    http::Uri,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, warn};

use crate::dropdowns::load_locations;
use crate::errors::AppError;
use crate::listing::{
    build_company_page, build_job_page, build_listing, ListingPage, ListingQuery,
};
use crate::seo::locations::resolve_filters;
use crate::seo::path_for_parts;
use crate::seo::router::{classify, PageRoute};
use crate::state::AppState;

/// GET /referrals
pub async fn handle_referrals(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<ListingPage>, AppError> {
    let page = build_listing(&state.backend, query.filters(), query.page()).await?;
    Ok(Json(page))
}

/// GET /:slug
///
/// SEO listings, job pages and company pages share the top-level namespace.
/// The segment is read from the raw URI so it is percent-decoded exactly once.
pub async fn handle_slug(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<ListingQuery>,
) -> Result<Response, AppError> {
    let slug = uri.path().trim_start_matches('/');
    let route = classify(slug);
    debug!("Routed '{slug}' to {route:?}");

    match route {
        PageRoute::Listing(parts) if parts.is_empty() => {
            // `/referrals` style root: fall back to query-string filters.
            let page = build_listing(&state.backend, query.filters(), query.page()).await?;
            Ok(Json(page).into_response())
        }
        PageRoute::Listing(parts) => {
            // Location lookups only matter when the slug carries one.
            let locations = if parts.location.is_some() {
                load_locations(
                    state.cache.as_ref(),
                    &state.backend,
                    state.config.dropdown_cache_ttl(),
                )
                .await
                .unwrap_or_else(|e| {
                    warn!("Location list unavailable, '{slug}' location is free text: {e}");
                    Vec::new()
                })
            } else {
                Vec::new()
            };

            let filters = resolve_filters(&parts, &locations, query.filters().experience);
            let mut page = build_listing(&state.backend, filters, query.page()).await?;
            // The served slug is canonical even when its location resolves to
            // a country, which `build_seo_path` would fold into `/{kw}-jobs`.
            page.canonical_path = path_for_parts(&parts);
            Ok(Json(page).into_response())
        }
        PageRoute::Job { id } => {
            Ok(Json(build_job_page(&state.backend, &id).await?).into_response())
        }
        PageRoute::Company { id } => {
            Ok(Json(build_company_page(&state.backend, &id).await?).into_response())
        }
        PageRoute::NotFound => Err(AppError::NotFound(format!("No page at '/{slug}'"))),
    }
}
