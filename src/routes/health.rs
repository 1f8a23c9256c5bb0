// GET /hello - Liveness check
pub async fn hello() -> &'static str {
    "Hello World!"
}
