//! Tests for the create advantage endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use vantage::{
    model::{advantage::AdvantageDto, api::ErrorDto},
    server::controller::advantage::create_advantage,
};
use vantage_test_utils::prelude::*;

use crate::util::{body_json, multipart_from, multipart_request};

/// Expect 201 with the stored record when the form is fully valid
#[tokio::test]
async fn created_with_valid_form() -> Result<(), TestError> {
    let test = TestBuilder::new().with_advantage_tables().build().await?;

    let institution = factory::insert_institution(&test.db, "State University").await?;
    let enterprise = factory::insert_enterprise(&test.db, institution.id, "Campus Cafe").await?;
    let enterprise_id = enterprise.id.to_string();

    let request = multipart_request(&[
        ("title", b"Free coffee".as_slice()),
        ("description", b"One free coffee per day".as_slice()),
        ("coins", b"12.5".as_slice()),
        ("enterprise_id", enterprise_id.as_bytes()),
        ("image", factory::TEST_IMAGE),
    ]);

    let result = create_advantage(State(test.state()), multipart_from(request).await).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let dto: AdvantageDto = body_json(response).await;
    assert_eq!(dto.title, "Free coffee");
    assert_eq!(dto.coins, 12.5);
    assert_eq!(dto.enterprise_id, enterprise.id);

    Ok(())
}

/// Expect 400 before any business rule runs when no image part is attached
#[tokio::test]
async fn bad_request_when_image_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_advantage_tables().build().await?;

    let request = multipart_request(&[
        ("title", b"Free coffee".as_slice()),
        ("description", b"One free coffee per day".as_slice()),
        ("coins", b"12.5".as_slice()),
        ("enterprise_id", b"1".as_slice()),
    ]);

    let result = create_advantage(State(test.state()), multipart_from(request).await).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorDto = body_json(response).await;
    assert_eq!(body.error, "Image is required");

    Ok(())
}

/// Expect 400 for non-numeric coins text
#[tokio::test]
async fn bad_request_when_coins_not_numeric() -> Result<(), TestError> {
    let test = TestBuilder::new().with_advantage_tables().build().await?;

    let institution = factory::insert_institution(&test.db, "State University").await?;
    let enterprise = factory::insert_enterprise(&test.db, institution.id, "Campus Cafe").await?;
    let enterprise_id = enterprise.id.to_string();

    let request = multipart_request(&[
        ("title", b"Free coffee".as_slice()),
        ("description", b"One free coffee per day".as_slice()),
        ("coins", b"abc".as_slice()),
        ("enterprise_id", enterprise_id.as_bytes()),
        ("image", factory::TEST_IMAGE),
    ]);

    let result = create_advantage(State(test.state()), multipart_from(request).await).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 for negative coins regardless of the other fields
#[tokio::test]
async fn bad_request_when_coins_negative() -> Result<(), TestError> {
    let test = TestBuilder::new().with_advantage_tables().build().await?;

    let institution = factory::insert_institution(&test.db, "State University").await?;
    let enterprise = factory::insert_enterprise(&test.db, institution.id, "Campus Cafe").await?;
    let enterprise_id = enterprise.id.to_string();

    let request = multipart_request(&[
        ("title", b"Free coffee".as_slice()),
        ("description", b"One free coffee per day".as_slice()),
        ("coins", b"-5".as_slice()),
        ("enterprise_id", enterprise_id.as_bytes()),
        ("image", factory::TEST_IMAGE),
    ]);

    let result = create_advantage(State(test.state()), multipart_from(request).await).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when the referenced enterprise does not exist
#[tokio::test]
async fn bad_request_when_enterprise_unknown() -> Result<(), TestError> {
    let test = TestBuilder::new().with_advantage_tables().build().await?;

    let request = multipart_request(&[
        ("title", b"Free coffee".as_slice()),
        ("description", b"One free coffee per day".as_slice()),
        ("coins", b"12.5".as_slice()),
        ("enterprise_id", b"999".as_slice()),
        ("image", factory::TEST_IMAGE),
    ]);

    let result = create_advantage(State(test.state()), multipart_from(request).await).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 with the storage error surfaced when required tables are
/// missing
#[tokio::test]
async fn bad_request_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let request = multipart_request(&[
        ("title", b"Free coffee".as_slice()),
        ("description", b"One free coffee per day".as_slice()),
        ("coins", b"12.5".as_slice()),
        ("enterprise_id", b"1".as_slice()),
        ("image", factory::TEST_IMAGE),
    ]);

    let result = create_advantage(State(test.state()), multipart_from(request).await).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
