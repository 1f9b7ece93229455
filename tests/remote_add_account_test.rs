mod common;

use auth_front::domain::errors::DomainError;
use auth_front::domain::http::HttpResponse;
use auth_front::domain::model::AccountModel;
use auth_front::domain::ports::AddAccount;
use auth_front::RemoteAddAccount;
use common::{mock_add_account_params, HttpPostClientSpy};

const URL: &str = "https://api.example.com/signup";

fn make_sut() -> (RemoteAddAccount<HttpPostClientSpy>, HttpPostClientSpy) {
    let spy = HttpPostClientSpy::new();
    (RemoteAddAccount::new(URL, spy.clone()), spy)
}

#[tokio::test]
async fn test_200_resolves_account_and_posts_params() {
    let (sut, spy) = make_sut();
    spy.respond_with(
        HttpResponse::new(200u16).with_body(serde_json::json!({"accessToken": "tok-123"})),
    );
    let params = mock_add_account_params();

    let account = sut.add(&params).await.unwrap();

    assert_eq!(account, Some(AccountModel::new("tok-123")));
    let calls = spy.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].url, URL);
    assert_eq!(calls[0].body, Some(serde_json::to_value(&params).unwrap()));
    assert_eq!(
        calls[0].body,
        Some(serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "password": "s3cret-pass",
            "passwordConfirmation": "s3cret-pass"
        }))
    );
}

#[tokio::test]
async fn test_403_and_409_are_email_in_use() {
    for code in [403u16, 409] {
        let (sut, spy) = make_sut();
        spy.respond_with(HttpResponse::new(code));

        assert_eq!(
            sut.add(&mock_add_account_params()).await,
            Err(DomainError::EmailInUse),
            "status {code}"
        );
    }
}

#[tokio::test]
async fn test_401_is_not_remapped_for_sign_up() {
    let (sut, spy) = make_sut();
    spy.respond_with(HttpResponse::new(401u16));

    assert_eq!(
        sut.add(&mock_add_account_params()).await,
        Err(DomainError::Unexpected)
    );
}

#[tokio::test]
async fn test_unmapped_codes_are_unexpected() {
    for code in [400u16, 404, 500, 502] {
        let (sut, spy) = make_sut();
        spy.respond_with(HttpResponse::new(code));

        assert_eq!(
            sut.add(&mock_add_account_params()).await,
            Err(DomainError::Unexpected),
            "status {code}"
        );
    }
}

#[tokio::test]
async fn test_204_succeeds_without_session() {
    let (sut, spy) = make_sut();
    spy.respond_with(HttpResponse::new(204u16));

    assert_eq!(sut.add(&mock_add_account_params()).await, Ok(None));
}
