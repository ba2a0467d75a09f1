use serde::Deserialize;

/// 只讀取 `name` 欄位，其餘欄位交給各自的 parser。
#[derive(Clone, Deserialize)]
pub struct NamedJsonObject {
    name: String
}

impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
