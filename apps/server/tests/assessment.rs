use axum::http::Method;

mod common;
use common::{build_test_router, cleanup_env, register_and_login, request};

/// Answers for one category, `<key>_q1` through `<key>_q4`, all set to the
/// same score.
fn step_answers(category: &str, value: i32) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for i in 1..=4 {
        map.insert(format!("{category}_q{i}"), serde_json::Value::from(value));
    }
    serde_json::Value::Object(map)
}

#[tokio::test]
async fn stepped_assessment_scores_and_bands() {
    let (app, _db_dir) = build_test_router().await;
    let token = register_and_login(&app).await;

    // Nothing attempted yet
    let (status, progress) =
        request(&app, Method::GET, "/api/v1/assessment", Some(&token), None).await;
    assert_eq!(status, 200);
    assert!(progress["assessmentId"].is_null());
    assert_eq!(progress["totalSteps"], 6);
    assert_eq!(progress["completedSteps"], serde_json::json!([]));
    assert_eq!(progress["nextStep"], 0);
    assert_eq!(progress["finalized"], false);

    // Step 0 starts a fresh attempt
    let (status, progress) = request(
        &app,
        Method::POST,
        "/api/v1/assessment/steps/0",
        Some(&token),
        Some(step_answers("purpose", 5)),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(progress["completedSteps"], serde_json::json!([0]));
    assert_eq!(progress["nextStep"], 1);

    // Incomplete or out-of-range answers change nothing
    let (status, body) = request(
        &app,
        Method::POST,
        "/api/v1/assessment/steps/1",
        Some(&token),
        Some(serde_json::json!({ "spending_q1": 4, "spending_q2": 4 })),
    )
    .await;
    assert_eq!(status, 422);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Please answer all Spending & Cashflow questions"));

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/v1/assessment/steps/1",
        Some(&token),
        Some(step_answers("spending", 6)),
    )
    .await;
    assert_eq!(status, 422);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("must be between 1 and 5"));

    let (status, progress) =
        request(&app, Method::GET, "/api/v1/assessment", Some(&token), None).await;
    assert_eq!(status, 200);
    assert_eq!(progress["completedSteps"], serde_json::json!([0]));

    // Work through the remaining steps; protection scores poorly
    for (index, category, value) in [
        (1, "spending", 4),
        (2, "saving", 4),
        (3, "debt", 4),
        (4, "super", 4),
        (5, "protection", 1),
    ] {
        let (status, _) = request(
            &app,
            Method::POST,
            &format!("/api/v1/assessment/steps/{index}"),
            Some(&token),
            Some(step_answers(category, value)),
        )
        .await;
        assert_eq!(status, 200, "step {index}");
    }

    let (status, progress) =
        request(&app, Method::GET, "/api/v1/assessment", Some(&token), None).await;
    assert_eq!(status, 200);
    assert_eq!(progress["completedSteps"], serde_json::json!([0, 1, 2, 3, 4, 5]));
    assert!(progress["nextStep"].is_null());
    assert_eq!(progress["finalized"], false);

    // Submit scores the attempt: 88 of 120 points is 73 percent
    let (status, result) = request(
        &app,
        Method::POST,
        "/api/v1/assessment/submit",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(result["totalScore"], 73);
    assert_eq!(result["band"], "Reactive");
    assert_eq!(result["categoryScores"].as_array().unwrap().len(), 6);
    assert_eq!(result["categoryScores"][0]["key"], "purpose");
    assert_eq!(result["categoryScores"][0]["percent"], 100);
    assert_eq!(result["keyStrengths"].as_array().unwrap().len(), 5);
    assert_eq!(
        result["keyWeaknesses"],
        serde_json::json!(["Protecting & Preparing"])
    );
    assert!(!result["submittedAt"].is_null());

    let (status, progress) =
        request(&app, Method::GET, "/api/v1/assessment", Some(&token), None).await;
    assert_eq!(status, 200);
    assert_eq!(progress["finalized"], true);

    let (status, result) = request(
        &app,
        Method::GET,
        "/api/v1/assessment/result",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(result["band"], "Reactive");

    // Steps outside the plan are rejected
    let (status, body) = request(
        &app,
        Method::POST,
        "/api/v1/assessment/steps/9",
        Some(&token),
        Some(step_answers("purpose", 3)),
    )
    .await;
    assert_eq!(status, 422);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Unknown assessment step 10"));

    cleanup_env();
}
