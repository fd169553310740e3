use server::index;

#[tokio::test]
async fn serves_status_page() {
    let resp = index().await;
    assert!(resp.0.contains("/ws"));
    assert_eq!(resp.0.matches("new WebSocket").count(), 1);
}
