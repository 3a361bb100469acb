use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{advantage::AdvantageDto, api::ErrorDto},
    server::{
        error::{advantage::AdvantageError, Error},
        model::{advantage::NewAdvantage, app::AppState},
        service::advantage::AdvantageService,
    },
};

/// OpenAPI tag for the advantage routes
pub static ADVANTAGE_TAG: &str = "advantage";

/// The known multipart form fields of a create request, each optional
/// until checked.
#[derive(Default)]
struct AdvantageForm {
    title: Option<String>,
    description: Option<String>,
    coins: Option<String>,
    enterprise_id: Option<String>,
    image: Option<Vec<u8>>,
}

impl AdvantageForm {
    /// Drain the multipart stream into the known form fields, ignoring
    /// parts with any other name.
    async fn read(mut multipart: Multipart) -> Result<Self, Error> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            match field.name() {
                Some("title") => form.title = Some(field.text().await?),
                Some("description") => form.description = Some(field.text().await?),
                Some("coins") => form.coins = Some(field.text().await?),
                Some("enterprise_id") => form.enterprise_id = Some(field.text().await?),
                Some("image") => form.image = Some(field.bytes().await?.to_vec()),
                _ => {}
            }
        }

        Ok(form)
    }
}

/// Publish a new advantage offer
///
/// Accepts a multipart form with `title`, `description`, `coins`,
/// `enterprise_id`, and a binary `image` part. The image must be attached;
/// the request is rejected before any business rule runs without it.
///
/// # Responses
/// - 201 (Created): The stored advantage record
/// - 400 (Bad Request): Missing image, malformed field, unknown enterprise,
///   or a storage failure
#[utoipa::path(
    post,
    path = "/advantages",
    tag = ADVANTAGE_TAG,
    responses(
        (status = 201, description = "Advantage created", body = AdvantageDto),
        (status = 400, description = "Missing image, invalid field, or storage failure", body = ErrorDto)
    ),
)]
pub async fn create_advantage(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let advantage_service = AdvantageService::new(&state.db);

    let form = AdvantageForm::read(multipart).await?;

    let Some(image) = form.image else {
        return Err(AdvantageError::ImageRequired.into());
    };

    let data = NewAdvantage {
        title: form.title.ok_or(AdvantageError::MissingField("title"))?,
        description: form
            .description
            .ok_or(AdvantageError::MissingField("description"))?,
        coins: form.coins.ok_or(AdvantageError::MissingField("coins"))?,
        enterprise_id: form
            .enterprise_id
            .ok_or(AdvantageError::MissingField("enterprise_id"))?,
        image,
    };

    let advantage = advantage_service.create(data).await?;

    Ok((StatusCode::CREATED, Json(AdvantageDto::from(advantage))).into_response())
}

/// List every published advantage
///
/// # Responses
/// - 200 (OK): All stored advantages
/// - 400 (Bad Request): A storage failure
#[utoipa::path(
    get,
    path = "/advantages",
    tag = ADVANTAGE_TAG,
    responses(
        (status = 200, description = "All advantages", body = Vec<AdvantageDto>),
        (status = 400, description = "Storage failure", body = ErrorDto)
    ),
)]
pub async fn list_all_advantages(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let advantage_service = AdvantageService::new(&state.db);

    let advantages = advantage_service.list_all().await?;

    let dtos: Vec<AdvantageDto> = advantages.into_iter().map(AdvantageDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)).into_response())
}

/// List the advantages published by one enterprise
///
/// The identifier is parsed here; a malformed identifier is rejected
/// before the service is invoked. Any failure past parsing, including a
/// storage failure, is reported as 404 — a compatibility contract with
/// existing consumers of this route.
///
/// # Responses
/// - 200 (OK): The enterprise's advantages
/// - 400 (Bad Request): The identifier is not an integer
/// - 404 (Not Found): Unknown enterprise or a downstream failure
#[utoipa::path(
    get,
    path = "/advantages/enterprise/{enterprise_id}",
    tag = ADVANTAGE_TAG,
    params(
        ("enterprise_id" = String, Path, description = "Enterprise identifier")
    ),
    responses(
        (status = 200, description = "Advantages for the enterprise", body = Vec<AdvantageDto>),
        (status = 400, description = "Identifier is not an integer", body = ErrorDto),
        (status = 404, description = "Unknown enterprise or downstream failure", body = ErrorDto)
    ),
)]
pub async fn list_advantages_by_enterprise(
    State(state): State<AppState>,
    Path(enterprise_id): Path<String>,
) -> Response {
    let advantage_service = AdvantageService::new(&state.db);

    let Ok(enterprise_id) = enterprise_id.parse::<i32>() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: "Invalid enterprise ID".to_string(),
            }),
        )
            .into_response();
    };

    match advantage_service.list_by_enterprise(enterprise_id).await {
        Ok(advantages) => {
            let dtos: Vec<AdvantageDto> =
                advantages.into_iter().map(AdvantageDto::from).collect();

            (StatusCode::OK, Json(dtos)).into_response()
        }
        Err(err) => (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: err.to_string(),
            }),
        )
            .into_response(),
    }
}

/// List every advantage visible to a student of one institution
///
/// Returns the union of advantages across all enterprises affiliated with
/// the institution.
///
/// # Responses
/// - 200 (OK): The advantages visible to the student
/// - 400 (Bad Request): Malformed identifier or a storage failure
#[utoipa::path(
    get,
    path = "/advantages/student/{institution_id}",
    tag = ADVANTAGE_TAG,
    params(
        ("institution_id" = String, Path, description = "Institution identifier")
    ),
    responses(
        (status = 200, description = "Advantages visible to the student", body = Vec<AdvantageDto>),
        (status = 400, description = "Malformed identifier or storage failure", body = ErrorDto)
    ),
)]
pub async fn list_advantages_for_student(
    State(state): State<AppState>,
    Path(institution_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let advantage_service = AdvantageService::new(&state.db);

    let institution_id: i32 = institution_id
        .trim()
        .parse()
        .map_err(|_| AdvantageError::InvalidInstitutionId(institution_id.clone()))?;

    let advantages = advantage_service.list_for_student(institution_id).await?;

    let dtos: Vec<AdvantageDto> = advantages.into_iter().map(AdvantageDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)).into_response())
}
