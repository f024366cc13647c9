use actix_web::HttpResponse;

/// Handler for `GET /health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "message": "OTP service is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
