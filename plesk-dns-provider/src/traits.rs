use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{ProviderMetadata, Record};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码
    pub status: u16,
    /// 原始响应体（不做解析）
    pub message: String,
}

impl RawApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录 ID（用于 `RecordNotFound`）
    pub record_id: Option<String>,
    /// 域名（用于 `DomainNotFound`）
    pub domain: Option<String>,
}

impl ErrorContext {
    pub fn record(record_id: impl Into<String>) -> Self {
        Self {
            record_id: Some(record_id.into()),
            ..Default::default()
        }
    }

    pub fn domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
            ..Default::default()
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 将 HTTP 错误状态映射到统一错误类型，响应体原样保留
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：参数错误
    fn invalid_parameter(&self, param: &str, detail: impl ToString) -> ProviderError {
        ProviderError::InvalidParameter {
            provider: self.provider_name().to_string(),
            param: param.to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未分类的 HTTP 错误（fallback）
    fn api_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::ApiError {
            provider: self.provider_name().to_string(),
            status: raw.status,
            raw_message: raw.message,
        }
    }
}

/// DNS record operations exposed to the certificate-management host.
///
/// Every operation performs fresh round trips to the remote store; nothing is
/// cached between calls. Batch operations stop at the first error, and work
/// already completed before the error is not rolled back: re-list the zone to
/// learn how much of a batch went through.
///
/// Dropping a returned future cancels the in-flight request.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取 Provider 元数据（类型级别）
    ///
    /// 描述该 Provider 接受的配置字段，不需要实例即可调用。
    fn metadata() -> ProviderMetadata
    where
        Self: Sized;

    /// Lists all records of `zone`, in the order the server returns them.
    async fn list_records(&self, zone: &str) -> Result<Vec<Record>>;

    /// Creates each record in order, returning them with their assigned IDs.
    ///
    /// Input IDs are ignored.
    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;

    /// Overwrites the record `existing_id` with the fields of `record`.
    ///
    /// Fails before any request when `existing_id` is empty. Last write wins.
    async fn update_record(&self, zone: &str, existing_id: &str, record: &Record)
    -> Result<Record>;

    /// Deletes records addressed by ID, or by content when their ID is empty.
    ///
    /// Content-addressed records with no match in the zone are skipped. Returns
    /// the records actually deleted, each carrying the removed ID.
    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;
}
