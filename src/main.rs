use f1_stats_backend::make_app;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let (app, port) = match make_app().await {
        Ok(res) => res,
        Err(err) => panic!("{}", err),
    };

    let listener = TcpListener::bind(("0.0.0.0", port)).await;
    println!("Listening on http://0.0.0.0:{port}");

    match listener {
        Ok(res) => axum::serve(res, app).await.unwrap(),
        Err(err) => panic!("{}", err),
    }
}
