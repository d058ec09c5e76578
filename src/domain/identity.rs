//! Application identity registered with the native facility

/// Identity the native facility uses for its application shortcut and
/// notification attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub app_name: String,
    pub vendor: String,
    pub product: String,
    pub sub_product: String,
    pub version: String,
}

impl AppIdentity {
    /// Application user model id in the `Vendor.Product.SubProduct.Version`
    /// shape Windows expects for toast attribution.
    pub fn model_id(&self) -> String {
        [
            &self.vendor,
            &self.product,
            &self.sub_product,
            &self.version,
        ]
        .iter()
        .map(|part| part.replace(['.', ' '], ""))
        .collect::<Vec<_>>()
        .join(".")
    }
}
