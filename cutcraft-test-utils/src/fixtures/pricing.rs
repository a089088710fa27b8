use mockito::Mock;
use serde_json::{json, Value};

use crate::TestSetup;

/// Pricing tier payload as the backend sends it.
pub fn mock_pricing_tier(name: &str, price: u32, features: &[&str]) -> Value {
    json!({
        "name": name,
        "price": price,
        "description": format!("{} plan", name),
        "features": features,
    })
}

impl TestSetup {
    /// Create a mock `GET /pricing` endpoint returning `tiers` in order.
    pub fn with_pricing_endpoint(&mut self, tiers: Vec<Value>, expected_requests: usize) -> Mock {
        self.with_json_endpoint("GET", "/pricing", 200, &Value::Array(tiers), expected_requests)
    }
}
