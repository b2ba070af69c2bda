use axum::response::Html;

pub(crate) async fn welcome() -> Html<&'static str> {
    Html(
        "<h1>Welcome to the Holocron character API!</h1>\n\
         <p>Browse the catalog under <code>/characters</code> or <code>/api/characters</code>.</p>",
    )
}
