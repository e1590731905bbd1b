//! Handlers for the `/spot` resource -- the most involved flow in the API.
//!
//! Create and update accept `multipart/form-data` because they carry the
//! picture upload alongside the text fields. The category labels submitted
//! with a spot are a full-replace set: whenever a request carries labels,
//! all previous category rows for the spot are dropped and rewritten, inside
//! the same transaction as the spot row itself.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use spotlog_core::error::CoreError;
use spotlog_core::types::DbId;
use spotlog_db::models::page::Page;
use spotlog_db::models::spot::{CreateSpot, Spot, SpotDetail, SpotSummary, UpdateSpot};
use spotlog_db::repositories::spot_repo::DEFAULT_PAGE_SIZE;
use spotlog_db::repositories::SpotRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::{EmptyResponse, MessageResponse};
use crate::state::AppState;

/// Folder under the storage root where spot pictures land.
const PICTURE_FOLDER: &str = "spots";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /spot?size=&page=
///
/// One page of spots with owner, category labels, and review aggregates,
/// newest first. `size` defaults to 10 and is capped server-side.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<MessageResponse<Page<SpotSummary>>>> {
    let page = SpotRepo::list_page(
        &state.pool,
        params.page.unwrap_or(1),
        params.size.unwrap_or(DEFAULT_PAGE_SIZE),
    )
    .await?;

    Ok(Json(MessageResponse::new(
        "Spots retrieved successfully",
        page,
    )))
}

/// GET /spot/{id}
///
/// Detail view: list shape plus the reviews themselves, each with its
/// author's id and name.
pub async fn show(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse<SpotDetail>>> {
    let detail = SpotRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Spot", id }))?;

    Ok(Json(MessageResponse::new("Spot details", detail)))
}

/// POST /spot
///
/// Multipart create: `name`, `address`, at least one `category` field, and a
/// `picture` file are all required. The picture is stored first; the spot
/// row and its category rows are then written in a single transaction, so a
/// spot can never appear without its categories.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<MessageResponse<Spot>>)> {
    let form = SpotForm::read(multipart).await?;

    let name = form.require_name()?;
    let address = form.require_address()?;
    if form.categories.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "category is required and must not be empty".into(),
        )));
    }
    let (filename, bytes) = form.picture.as_ref().ok_or_else(|| {
        AppError::Core(CoreError::Validation("picture file is required".into()))
    })?;

    let picture_path = state
        .storage
        .put_file(PICTURE_FOLDER, filename, bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store picture: {e}")))?;

    let input = CreateSpot {
        user_id: auth.user_id,
        name,
        address,
        picture: picture_path,
        categories: form.categories,
    };
    let spot = SpotRepo::create(&state.pool, &input).await?;

    tracing::info!(spot_id = spot.id, user_id = auth.user_id, "Spot created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Spot created successfully", spot)),
    ))
}

/// PUT/PATCH /spot/{id}
///
/// `name` and `address` are required and overwritten unconditionally. A new
/// `picture` replaces the stored path; otherwise the previous one is kept.
/// When any `category` field is present the label set is fully replaced --
/// never merged -- in the same transaction as the spot update.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<MessageResponse<Spot>>> {
    let form = SpotForm::read(multipart).await?;

    let name = form.require_name()?;
    let address = form.require_address()?;

    let picture = match form.picture.as_ref() {
        Some((filename, bytes)) => Some(
            state
                .storage
                .put_file(PICTURE_FOLDER, filename, bytes)
                .await
                .map_err(|e| AppError::InternalError(format!("Failed to store picture: {e}")))?,
        ),
        None => None,
    };

    let categories = if form.categories.is_empty() {
        None
    } else {
        Some(form.categories)
    };

    let input = UpdateSpot {
        name,
        address,
        picture,
        categories,
    };
    let spot = SpotRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Spot", id }))?;

    tracing::info!(spot_id = id, user_id = auth.user_id, "Spot updated");

    Ok(Json(MessageResponse::new("Spot updated successfully", spot)))
}

/// DELETE /spot/{id}
///
/// Soft delete, permitted only for the spot's owner or an admin. The row
/// keeps existing with `deleted_at` set and disappears from list/show.
pub async fn destroy(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EmptyResponse>> {
    let spot = SpotRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Spot", id }))?;

    if spot.user_id != auth.user_id && !auth.role.is_admin() {
        return Err(AppError::Core(CoreError::Forbidden(
            "You are not authorized to delete this spot".into(),
        )));
    }

    let deleted = SpotRepo::soft_delete(&state.pool, id).await?;
    if !deleted {
        // Raced with a concurrent delete between the fetch and the update.
        return Err(AppError::Core(CoreError::NotFound { entity: "Spot", id }));
    }

    tracing::info!(spot_id = id, user_id = auth.user_id, "Spot soft-deleted");

    Ok(Json(EmptyResponse::message_only("Spot deleted successfully")))
}

// ---------------------------------------------------------------------------
// Multipart form
// ---------------------------------------------------------------------------

/// Fields collected from a spot create/update multipart request.
#[derive(Debug, Default)]
struct SpotForm {
    name: Option<String>,
    address: Option<String>,
    categories: Vec<String>,
    picture: Option<(String, Vec<u8>)>,
}

impl SpotForm {
    /// Drain the multipart stream into a [`SpotForm`]. Repeated `category`
    /// fields (with or without the `[]` suffix) accumulate into the label
    /// list; unknown fields are ignored.
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = SpotForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "name" => {
                    form.name = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| AppError::BadRequest(e.to_string()))?,
                    );
                }
                "address" => {
                    form.address = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| AppError::BadRequest(e.to_string()))?,
                    );
                }
                "category" | "category[]" => {
                    let label = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    if !label.trim().is_empty() {
                        form.categories.push(label.trim().to_string());
                    }
                }
                "picture" => {
                    let filename = field.file_name().unwrap_or("upload.bin").to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    if !bytes.is_empty() {
                        form.picture = Some((filename, bytes.to_vec()));
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }

    fn require_name(&self) -> Result<String, AppError> {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(AppError::Core(CoreError::Validation(
                "name is required".into(),
            ))),
        }
    }

    fn require_address(&self) -> Result<String, AppError> {
        match self.address.as_deref().map(str::trim) {
            Some(address) if !address.is_empty() => Ok(address.to_string()),
            _ => Err(AppError::Core(CoreError::Validation(
                "address is required".into(),
            ))),
        }
    }
}
