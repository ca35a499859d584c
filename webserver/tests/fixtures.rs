//! Request bodies shared by the API tests

use serde_json::{json, Value};

pub fn caller(name: &str) -> Value {
    json!({
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
    })
}

pub fn lead(name: &str, phone: &str, city: &str) -> Value {
    json!({
        "name": name,
        "phone": phone,
        "city": city,
        "source": "website",
    })
}
