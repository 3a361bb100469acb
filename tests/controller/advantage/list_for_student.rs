//! Tests for the student-scoped list endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use vantage::{
    model::advantage::AdvantageDto,
    server::controller::advantage::list_advantages_for_student,
};
use vantage_test_utils::prelude::*;

use crate::util::body_json;

/// Expect 200 with the union of advantages across the institution's
/// enterprises
#[tokio::test]
async fn ok_with_union_across_enterprises() -> Result<(), TestError> {
    let test = TestBuilder::new().with_advantage_tables().build().await?;

    let institution = factory::insert_institution(&test.db, "State University").await?;
    let cafe = factory::insert_enterprise(&test.db, institution.id, "Campus Cafe").await?;
    let gym = factory::insert_enterprise(&test.db, institution.id, "Gym").await?;

    let other_institution = factory::insert_institution(&test.db, "Tech Institute").await?;
    let other =
        factory::insert_enterprise(&test.db, other_institution.id, "Book Store").await?;

    factory::insert_advantage(&test.db, cafe.id, "Free coffee", 12.5).await?;
    factory::insert_advantage(&test.db, gym.id, "Day pass", 30.0).await?;
    factory::insert_advantage(&test.db, other.id, "Notebook", 25.0).await?;

    let result = list_advantages_for_student(
        State(test.state()),
        Path(institution.id.to_string()),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let dtos: Vec<AdvantageDto> = body_json(response).await;
    assert_eq!(dtos.len(), 2);
    assert!(dtos.iter().all(|dto| dto.title != "Notebook"));

    Ok(())
}

/// Expect 200 with an empty list for an institution with no affiliations
#[tokio::test]
async fn ok_with_empty_list_for_unknown_institution() -> Result<(), TestError> {
    let test = TestBuilder::new().with_advantage_tables().build().await?;

    let result =
        list_advantages_for_student(State(test.state()), Path("999".to_string())).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let dtos: Vec<AdvantageDto> = body_json(response).await;
    assert!(dtos.is_empty());

    Ok(())
}

/// Expect 400 for a non-integer identifier
#[tokio::test]
async fn bad_request_for_non_integer_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_advantage_tables().build().await?;

    let result =
        list_advantages_for_student(State(test.state()), Path("abc".to_string())).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when storage fails on this route
#[tokio::test]
async fn bad_request_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result =
        list_advantages_for_student(State(test.state()), Path("1".to_string())).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
