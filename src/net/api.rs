//! REST API helpers for communicating with the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so auth/profile fetch failures
//! degrade page behavior without crashing hydration. Non-2xx responses carry
//! the backend's detail text when one can be extracted.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::marketplace::{BankAccount, Cashout, Category, Project, ProfileUpdate, Transaction, Wallet};
use super::plagiarism::{PlagiarismCheck, PlagiarismCheckRequest};
use super::types::{AuthTokens, LoginRequest, Page, PasswordResetConfirmRequest, Profile, RegisterRequest};
#[cfg(feature = "hydrate")]
use super::marketplace::{CashoutRequest, NewProject, PaymentRequest, PaymentResponse};
#[cfg(feature = "hydrate")]
use super::types::{EmailRequest, Listing, VerifyEmailRequest};
use crate::config::ApiConfig;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::query::encode_query_value;

pub const LOGIN_PATH: &str = "user/token/";
pub const REGISTER_PATH: &str = "user/register/";
pub const VERIFY_EMAIL_PATH: &str = "user/verify-email/";
pub const RESEND_VERIFICATION_PATH: &str = "user/resend-verification/";
pub const PASSWORD_RESET_PATH: &str = "user/password-reset/";
pub const PASSWORD_RESET_CONFIRM_PATH: &str = "user/password-reset/confirm/";
pub const CURRENT_USER_PATH: &str = "user/me";
pub const PLAGIARISM_CHECK_PATH: &str = "plagiarism/check/";
pub const PLAGIARISM_CHECKS_PATH: &str = "plagiarism/checks/";
pub const ALL_PROJECTS_PATH: &str = "projects/all";
pub const CATEGORIES_PATH: &str = "categories";
pub const MY_PROJECTS_PATH: &str = "user/project";
pub const UPLOAD_PROJECT_PATH: &str = "user/project/";
pub const WALLET_PATH: &str = "user/wallet";
pub const CASHOUT_PATH: &str = "user/cashout";
pub const TRANSACTIONS_PATH: &str = "user/transactions";

/// Related-project listings are cut to this many entries.
pub const RELATED_PROJECTS_LIMIT: usize = 5;

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn plagiarism_checks_url(config: &ApiConfig, page: u32, page_size: u32) -> String {
    format!(
        "{}?{}",
        config.endpoint(PLAGIARISM_CHECKS_PATH),
        super::plagiarism::checks_query(page, page_size)
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn project_url(config: &ApiConfig, project_id: u64) -> String {
    config.endpoint(&format!("projects/{project_id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn category_projects_url(config: &ApiConfig, category_id: u64) -> String {
    config.endpoint(&format!("category/{category_id}/projects"))
}

#[cfg(any(test, feature = "hydrate"))]
fn related_projects_url(config: &ApiConfig, level: &str, exclude: u64) -> String {
    format!(
        "{}?level={}&exclude={exclude}",
        config.endpoint("projects"),
        encode_query_value(level)
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn payment_url(config: &ApiConfig, project_id: u64) -> String {
    config.endpoint(&format!("projects/{project_id}/initiatepayment"))
}

#[cfg(any(test, feature = "hydrate"))]
fn plagiarism_check_url(config: &ApiConfig, check_id: u64) -> String {
    config.endpoint(&format!("{PLAGIARISM_CHECKS_PATH}{check_id}/"))
}

#[cfg(any(test, feature = "hydrate"))]
fn project_checks_url(config: &ApiConfig, project_id: u64) -> String {
    config.endpoint(&format!("plagiarism/project/{project_id}/"))
}

#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder, token: &str) -> gloo_net::http::RequestBuilder {
    builder.header("Authorization", &bearer_header(token))
}

#[cfg(feature = "hydrate")]
async fn send(
    builder: gloo_net::http::RequestBuilder,
    body: Option<serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    let request = match body {
        Some(body) => builder.json(&body),
        None => builder.build(),
    };
    dispatch(request).await
}

#[cfg(feature = "hydrate")]
async fn dispatch(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let detail = resp
            .json::<serde_json::Value>()
            .await
            .ok()
            .as_ref()
            .and_then(super::error::extract_detail);
        return Err(ApiError::Status { status, detail });
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
async fn send_json<T: serde::de::DeserializeOwned>(
    builder: gloo_net::http::RequestBuilder,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    send(builder, body)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn encode<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Exchange email + password for a token pair via `POST user/token/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the credentials are rejected.
pub async fn login(config: &ApiConfig, request: &LoginRequest) -> Result<AuthTokens, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::post(&config.endpoint(LOGIN_PATH));
        send_json(builder, Some(encode(request)?)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST user/register/`. The backend then emails a
/// verification code.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or registration is rejected.
pub async fn register(config: &ApiConfig, request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::post(&config.endpoint(REGISTER_PATH));
        send(builder, Some(encode(request)?)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// Confirm an email address with its 6-digit code via `POST user/verify-email/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the code is rejected.
pub async fn verify_email(config: &ApiConfig, email: &str, code: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = VerifyEmailRequest { email: email.to_owned(), otp: code.to_owned() };
        let builder = gloo_net::http::Request::post(&config.endpoint(VERIFY_EMAIL_PATH));
        send(builder, Some(encode(&body)?)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, code);
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to email a fresh verification code.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn resend_verification(config: &ApiConfig, email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = EmailRequest { email: email.to_owned() };
        let builder = gloo_net::http::Request::post(&config.endpoint(RESEND_VERIFICATION_PATH));
        send(builder, Some(encode(&body)?)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email);
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to email a password-reset code.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn request_password_reset(config: &ApiConfig, email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = EmailRequest { email: email.to_owned() };
        let builder = gloo_net::http::Request::post(&config.endpoint(PASSWORD_RESET_PATH));
        send(builder, Some(encode(&body)?)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email);
        Err(ApiError::Unavailable)
    }
}

/// Set a new password using the emailed reset code.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the code is rejected.
pub async fn reset_password(config: &ApiConfig, request: &PasswordResetConfirmRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::post(&config.endpoint(PASSWORD_RESET_CONFIRM_PATH));
        send(builder, Some(encode(request)?)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the profile of the user owning `token` from `GET user/me`.
///
/// # Errors
///
/// Returns [`ApiError::MissingCredential`] for an empty token, or an
/// [`ApiError`] if the request fails or the token is rejected.
pub async fn fetch_current_user(config: &ApiConfig, token: &str) -> Result<Profile, ApiError> {
    if token.is_empty() {
        return Err(ApiError::MissingCredential);
    }
    #[cfg(feature = "hydrate")]
    {
        let builder =
            gloo_net::http::Request::get(&config.endpoint(CURRENT_USER_PATH)).header("Authorization", &bearer_header(token));
        send_json(builder, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Start a plagiarism check for one of the contributor's projects.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the check is rejected.
pub async fn run_plagiarism_check(
    config: &ApiConfig,
    token: &str,
    request: &PlagiarismCheckRequest,
) -> Result<PlagiarismCheck, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::post(&config.endpoint(PLAGIARISM_CHECK_PATH))
            .header("Authorization", &bearer_header(token));
        send_json(builder, Some(encode(request)?)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, request);
        Err(ApiError::Unavailable)
    }
}

/// List the contributor's plagiarism checks, one page at a time.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn list_plagiarism_checks(
    config: &ApiConfig,
    token: &str,
    page: u32,
    page_size: u32,
) -> Result<Page<PlagiarismCheck>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::get(&plagiarism_checks_url(config, page, page_size))
            .header("Authorization", &bearer_header(token));
        send_json(builder, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, page, page_size);
        Err(ApiError::Unavailable)
    }
}

/// Every listed project from `GET projects/all`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn list_projects(config: &ApiConfig) -> Result<Vec<Project>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::get(&config.endpoint(ALL_PROJECTS_PATH));
        send_json::<Listing<Project>>(builder, None).await.map(Listing::into_items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Projects in one category from `GET category/{id}/projects`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn list_category_projects(config: &ApiConfig, category_id: u64) -> Result<Vec<Project>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::get(&category_projects_url(config, category_id));
        send_json::<Listing<Project>>(builder, None).await.map(Listing::into_items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, category_id);
        Err(ApiError::Unavailable)
    }
}

/// One project from `GET projects/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the project is unknown.
pub async fn fetch_project(config: &ApiConfig, project_id: u64) -> Result<Project, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::get(&project_url(config, project_id));
        send_json(builder, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, project_id);
        Err(ApiError::Unavailable)
    }
}

/// Up to [`RELATED_PROJECTS_LIMIT`] other projects at the same `level`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn list_related_projects(config: &ApiConfig, level: &str, exclude: u64) -> Result<Vec<Project>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::get(&related_projects_url(config, level, exclude));
        let mut projects = send_json::<Listing<Project>>(builder, None).await?.into_items();
        projects.retain(|p| p.id != exclude);
        projects.truncate(RELATED_PROJECTS_LIMIT);
        Ok(projects)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, level, exclude);
        Err(ApiError::Unavailable)
    }
}

/// Start a purchase and return the payment gateway's checkout URL.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the reply carries no
/// checkout URL.
pub async fn initiate_payment(config: &ApiConfig, project_id: u64, email: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = PaymentRequest { email: email.to_owned() };
        let builder = gloo_net::http::Request::post(&payment_url(config, project_id));
        send_json::<PaymentResponse>(builder, Some(encode(&body)?))
            .await?
            .authorization_url()
            .ok_or_else(|| ApiError::Decode("no authorization URL received".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, project_id, email);
        Err(ApiError::Unavailable)
    }
}

/// Project categories from `GET categories`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn list_categories(config: &ApiConfig) -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::get(&config.endpoint(CATEGORIES_PATH));
        send_json::<Listing<Category>>(builder, None).await.map(Listing::into_items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// The contributor's own uploads from `GET user/project`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the token is rejected.
pub async fn list_my_projects(config: &ApiConfig, token: &str) -> Result<Vec<Project>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = authorized(gloo_net::http::Request::get(&config.endpoint(MY_PROJECTS_PATH)), token);
        send_json::<Listing<Project>>(builder, None).await.map(Listing::into_items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Upload a project as multipart form data via `POST user/project/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the form cannot be built, the request fails,
/// or the backend rejects the upload.
#[cfg(feature = "hydrate")]
pub async fn upload_project(
    config: &ApiConfig,
    token: &str,
    project: &NewProject,
    table_of_content: &web_sys::File,
    project_content: &web_sys::File,
) -> Result<(), ApiError> {
    use super::marketplace::{PROJECT_CONTENT_FIELD, TABLE_OF_CONTENT_FIELD};

    let form_error = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(form_error)?;
    for (name, value) in project.form_fields() {
        form.append_with_str(name, &value).map_err(form_error)?;
    }
    form.append_with_blob_and_filename(TABLE_OF_CONTENT_FIELD, table_of_content, &table_of_content.name())
        .map_err(form_error)?;
    form.append_with_blob_and_filename(PROJECT_CONTENT_FIELD, project_content, &project_content.name())
        .map_err(form_error)?;

    let builder = authorized(gloo_net::http::Request::post(&config.endpoint(UPLOAD_PROJECT_PATH)), token);
    dispatch(builder.body(form)).await.map(|_| ())
}

/// Update the signed-in user's profile via `PATCH user/me`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the update is rejected.
pub async fn update_profile(config: &ApiConfig, token: &str, update: &ProfileUpdate) -> Result<Profile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = authorized(gloo_net::http::Request::patch(&config.endpoint(CURRENT_USER_PATH)), token);
        send_json(builder, Some(encode(update)?)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, update);
        Err(ApiError::Unavailable)
    }
}

/// Balance and payout details from `GET user/wallet`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the token is rejected.
pub async fn fetch_wallet(config: &ApiConfig, token: &str) -> Result<Wallet, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = authorized(gloo_net::http::Request::get(&config.endpoint(WALLET_PATH)), token);
        send_json(builder, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Save payout bank details via `POST user/wallet`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the details are rejected.
pub async fn save_bank_account(config: &ApiConfig, token: &str, account: &BankAccount) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = authorized(gloo_net::http::Request::post(&config.endpoint(WALLET_PATH)), token);
        send(builder, Some(encode(account)?)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, account);
        Err(ApiError::Unavailable)
    }
}

/// Request a payout of `amount` via `POST user/cashout`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the payout is rejected.
pub async fn request_cashout(config: &ApiConfig, token: &str, amount: f64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = authorized(gloo_net::http::Request::post(&config.endpoint(CASHOUT_PATH)), token);
        send(builder, Some(encode(&CashoutRequest { amount })?)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, amount);
        Err(ApiError::Unavailable)
    }
}

/// Past payout requests from `GET user/cashout`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the token is rejected.
pub async fn list_cashouts(config: &ApiConfig, token: &str) -> Result<Vec<Cashout>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = authorized(gloo_net::http::Request::get(&config.endpoint(CASHOUT_PATH)), token);
        send_json::<Listing<Cashout>>(builder, None).await.map(Listing::into_items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Sales and payouts from `GET user/transactions`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the token is rejected.
pub async fn list_transactions(config: &ApiConfig, token: &str) -> Result<Vec<Transaction>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = authorized(gloo_net::http::Request::get(&config.endpoint(TRANSACTIONS_PATH)), token);
        send_json::<Listing<Transaction>>(builder, None).await.map(Listing::into_items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Full record of one check from `GET plagiarism/checks/{id}/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the check is unknown.
pub async fn fetch_plagiarism_check(config: &ApiConfig, token: &str, check_id: u64) -> Result<PlagiarismCheck, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = authorized(gloo_net::http::Request::get(&plagiarism_check_url(config, check_id)), token);
        send_json(builder, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, check_id);
        Err(ApiError::Unavailable)
    }
}

/// Every check run against one project from `GET plagiarism/project/{id}/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the token is rejected.
pub async fn list_project_checks(
    config: &ApiConfig,
    token: &str,
    project_id: u64,
) -> Result<Vec<PlagiarismCheck>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = authorized(gloo_net::http::Request::get(&project_checks_url(config, project_id)), token);
        send_json::<Listing<PlagiarismCheck>>(builder, None).await.map(Listing::into_items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, project_id);
        Err(ApiError::Unavailable)
    }
}
