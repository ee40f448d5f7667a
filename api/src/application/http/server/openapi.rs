use utoipa::OpenApi;

use crate::application::http::{
    catalog::router::CatalogApiDoc,
    gallery::router::GalleryApiDoc,
    health::__path_health,
    ingredients::router::IngredientsApiDoc,
    recipe::router::RecipeApiDoc,
    session::router::SessionApiDoc,
    shelf::router::ShelfApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Larder API",
        description = "Photograph groceries, keep a shelf inventory and turn it into recipes."
    ),
    paths(health),
    nest(
        (path = "/sessions", api = SessionApiDoc),
        (path = "/sessions", api = GalleryApiDoc),
        (path = "/sessions", api = IngredientsApiDoc),
        (path = "/sessions", api = ShelfApiDoc),
        (path = "/sessions", api = RecipeApiDoc),
        (path = "/catalog", api = CatalogApiDoc),
    )
)]
pub struct ApiDoc;
