//! Review submission validation and payload-shape tests.

use validator::Validate;

use loanboard_server::models::{CreateReviewRequest, Review, ReviewQuery, ReviewSubmission};

fn valid_review_payload() -> &'static str {
    r#"{
        "loan_id": 1,
        "author_name": "Ann",
        "rating": 5,
        "comment": "Great service experience overall"
    }"#
}

#[test]
fn test_review_payload_accepts_valid_input() {
    let request: CreateReviewRequest = serde_json::from_str(valid_review_payload()).unwrap();
    assert!(request.validate().is_ok());
}

#[test]
fn test_review_rejects_invalid_loan_id() {
    let mut value: serde_json::Value = serde_json::from_str(valid_review_payload()).unwrap();
    value["loan_id"] = serde_json::json!(0);
    let request: CreateReviewRequest = serde_json::from_value(value).unwrap();
    assert!(request.validate().is_err());
}

#[test]
fn test_review_rating_bounds() {
    for (rating, ok) in [(0, false), (1, true), (5, true), (6, false)] {
        let mut value: serde_json::Value = serde_json::from_str(valid_review_payload()).unwrap();
        value["rating"] = serde_json::json!(rating);
        let request: CreateReviewRequest = serde_json::from_value(value).unwrap();
        assert_eq!(
            request.validate().is_ok(),
            ok,
            "rating {} should be {}",
            rating,
            if ok { "accepted" } else { "rejected" }
        );
    }
}

#[test]
fn test_review_comment_length_bounds() {
    for (len, ok) in [(9, false), (10, true), (2000, true), (2001, false)] {
        let mut value: serde_json::Value = serde_json::from_str(valid_review_payload()).unwrap();
        value["comment"] = serde_json::Value::String("a".repeat(len));
        let request: CreateReviewRequest = serde_json::from_value(value).unwrap();
        assert_eq!(
            request.validate().is_ok(),
            ok,
            "comment of {} chars should be {}",
            len,
            if ok { "accepted" } else { "rejected" }
        );
    }
}

#[test]
fn test_review_author_name_required() {
    let mut value: serde_json::Value = serde_json::from_str(valid_review_payload()).unwrap();
    value["author_name"] = serde_json::Value::String(String::new());
    let request: CreateReviewRequest = serde_json::from_value(value).unwrap();
    assert!(request.validate().is_err());
}

#[test]
fn test_review_query_without_loan_id() {
    let query: ReviewQuery = serde_json::from_str("{}").unwrap();
    assert!(query.loan_id.is_none());
}

#[test]
fn test_submission_body_carries_moderation_message() {
    let review: Review = serde_json::from_value(serde_json::json!({
        "id": 1,
        "loan_id": 1,
        "author_name": "Ann",
        "rating": 5,
        "comment": "Great service experience overall",
        "is_approved": false,
        "created_at": "2026-01-15T12:00:00Z"
    }))
    .unwrap();

    let body = serde_json::to_value(ReviewSubmission {
        message: "Review submitted for moderation".to_string(),
        review,
    })
    .unwrap();

    assert_eq!(body["message"], "Review submitted for moderation");
    assert_eq!(body["review"]["is_approved"], false);
}
