//! Plesk HTTP 请求方法

use reqwest::{Method, RequestBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{API_KEY_HEADER, PleskProvider};

impl PleskProvider {
    // ==================== 辅助方法 ====================

    /// Base URL + path, followed by the percent-encoded query when non-empty.
    pub(crate) fn request_url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}{path}", self.base_url);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Attach the configured credentials: API key header and/or Basic auth.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = if self.api_key.is_empty() {
            request
        } else {
            request.header(API_KEY_HEADER, &self.api_key)
        };
        if self.username.is_empty() {
            request
        } else {
            request.basic_auth(&self.username, Some(&self.password))
        }
    }

    /// Status >= 400 is an error; the body becomes its detail as-is.
    fn handle_response_error(
        &self,
        status: u16,
        response_text: String,
        ctx: ErrorContext,
    ) -> Result<String> {
        if status < 400 {
            return Ok(response_text);
        }

        let err = self.map_error(RawApiError::new(status, response_text), ctx);
        if err.is_expected() {
            log::warn!("API error: {err}");
        } else {
            log::error!("API error: {err}");
        }
        Err(err)
    }

    fn serialize_body<B: Serialize>(&self, body: &B) -> Result<String> {
        let payload =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;
        log::debug!("Request Body: {payload}");
        Ok(payload)
    }

    /// One authenticated round trip; returns the body of a successful response.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        payload: Option<String>,
        ctx: ErrorContext,
    ) -> Result<String> {
        let url = self.request_url(path, query);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("Accept", "application/json");
        if let Some(payload) = payload {
            request = request
                .header("Content-Type", "application/json")
                .body(payload);
        }
        let request = self.authorize(request);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), method.as_str(), &url)
                .await?;

        self.handle_response_error(status, response_text, ctx)
    }

    // ==================== 公开 API 方法 ====================

    /// 执行 GET 请求
    pub(crate) async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        ctx: ErrorContext,
    ) -> Result<T> {
        let response_text = self.send(Method::GET, path, query, None, ctx).await?;
        HttpUtils::parse_json(&response_text, self.provider_name())
    }

    /// 执行 POST 请求
    pub(crate) async fn post<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        let payload = self.serialize_body(body)?;
        let response_text = self
            .send(Method::POST, path, query, Some(payload), ctx)
            .await?;
        HttpUtils::parse_json(&response_text, self.provider_name())
    }

    /// 执行 PUT 请求（响应体被丢弃）
    pub(crate) async fn put<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<()> {
        let payload = self.serialize_body(body)?;
        self.send(Method::PUT, path, &[], Some(payload), ctx)
            .await
            .map(drop)
    }

    /// 执行 DELETE 请求（响应体被丢弃）
    pub(crate) async fn delete(&self, path: &str, ctx: ErrorContext) -> Result<()> {
        self.send(Method::DELETE, path, &[], None, ctx)
            .await
            .map(drop)
    }
}
