//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use plesk_dns_provider::{DnsProvider, PleskCredentials, Record, create_provider};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 生成一条测试用 TXT 记录（无 ID）
pub fn test_txt_record(value: &str) -> Record {
    Record::new("TXT", generate_test_record_name(), value, 300)
}

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    pub zone: String,
}

impl TestContext {
    /// 从环境变量创建 Plesk 测试上下文
    ///
    /// 需要 `PLESK_BASE_URL`、`TEST_DOMAIN`，以及 `PLESK_API_KEY`
    /// 或 `PLESK_USERNAME`/`PLESK_PASSWORD`。
    pub fn plesk() -> Option<Self> {
        let base_url = env::var("PLESK_BASE_URL").ok()?;
        let zone = env::var("TEST_DOMAIN").ok()?;

        let credentials = PleskCredentials {
            base_url: Some(base_url),
            api_key: env::var("PLESK_API_KEY").unwrap_or_default(),
            username: env::var("PLESK_USERNAME").unwrap_or_default(),
            password: env::var("PLESK_PASSWORD").unwrap_or_default(),
        };
        if credentials.api_key.is_empty() && credentials.username.is_empty() {
            return None;
        }
        let provider = create_provider(credentials).ok()?;

        Some(Self { provider, zone })
    }

    /// 查找指定内容的记录
    pub async fn find_record(&self, wanted: &Record) -> Option<Record> {
        let records = self.provider.list_records(&self.zone).await.ok()?;
        records.into_iter().find(|r| {
            r.record_type == wanted.record_type
                && r.name == wanted.name
                && r.value == wanted.value
                && r.ttl == wanted.ttl
        })
    }

    /// 清理测试记录
    pub async fn cleanup_record(&self, record: &Record) {
        let _ = self
            .provider
            .delete_records(&self.zone, std::slice::from_ref(record))
            .await;
    }

    /// 查找并清理所有测试记录（以 _test- 开头的记录）
    pub async fn cleanup_all_test_records(&self) {
        if let Ok(records) = self.provider.list_records(&self.zone).await {
            let stale: Vec<Record> = records
                .into_iter()
                .filter(|r| r.name.starts_with("_test-"))
                .collect();
            let _ = self.provider.delete_records(&self.zone, &stale).await;
        }
    }
}
