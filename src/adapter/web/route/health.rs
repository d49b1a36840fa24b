/// Liveness probe. Plain text, no envelope.
pub async fn get() -> &'static str {
    "Running"
}
