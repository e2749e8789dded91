//! Request handlers
//!
//! rusqlite is blocking, so every store call runs on the blocking pool.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::business::{ItemForm, ItemStore};
use crate::error::{Result, StoreError};
use crate::PAGE_TITLE;

use super::render;

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            tracing::warn!(error = %self, "Rejected request");
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(error = %self, "Request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, self.to_string()).into_response()
    }
}

/// `GET /`
pub async fn list_items(State(store): State<ItemStore>) -> Result<Html<String>> {
    let items = tokio::task::spawn_blocking(move || store.list()).await??;
    Ok(Html(render::index_page(PAGE_TITLE, &items)))
}

/// `POST /items`
pub async fn create_item(
    State(store): State<ItemStore>,
    Form(form): Form<ItemForm>,
) -> Result<Redirect> {
    tokio::task::spawn_blocking(move || store.create(&form.name, &form.price)).await??;
    Ok(Redirect::to("/"))
}

/// `POST /items/{id}`
pub async fn update_item(
    State(store): State<ItemStore>,
    Path(id): Path<String>,
    Form(form): Form<ItemForm>,
) -> Result<Redirect> {
    tokio::task::spawn_blocking(move || store.update(&id, &form.name, &form.price)).await??;
    Ok(Redirect::to("/"))
}

/// `DELETE /items/{id}`
pub async fn delete_item(
    State(store): State<ItemStore>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    tokio::task::spawn_blocking(move || store.delete(&id)).await??;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::store::tests::create_test_store;

    #[tokio::test]
    async fn test_list_items_renders_page() {
        let (store, _temp) = create_test_store();
        store.create("Widget", "9.99").unwrap();

        let Html(body) = list_items(State(store)).await.unwrap();
        assert!(body.contains("<td>Widget</td>"));
    }

    #[tokio::test]
    async fn test_create_item_bad_price() {
        let (store, _temp) = create_test_store();
        let form = ItemForm::new("Widget", "free");

        let err = match create_item(State(store.clone()), Form(form)).await {
            Err(err) => err,
            Ok(_) => panic!("Expected ParseError"),
        };
        assert!(err.is_client_error());
        assert!(store.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_item_missing_id_redirects() {
        let (store, _temp) = create_test_store();
        let form = ItemForm::new("Ghost", "1.00");

        let response = update_item(State(store.clone()), Path("77".to_string()), Form(form))
            .await
            .unwrap()
            .into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(store.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_item_returns_ok() {
        let (store, _temp) = create_test_store();
        let id = store.create("Widget", "9.99").unwrap();

        let status = delete_item(State(store.clone()), Path(id.to_string())).await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_error_status_codes() {
        let parse = StoreError::ParseError { field: "price", value: "x".to_string() };
        assert_eq!(parse.into_response().status(), StatusCode::BAD_REQUEST);

        let db = StoreError::DatabaseError("locked".to_string());
        assert_eq!(db.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
