//! The built-in member roster.

use crate::roster::member::MemberRecord;

/// Members provisioned when no roster file is given, as (identifier, name, role).
pub const BUILTIN_MEMBERS: [(&str, &str, &str); 7] = [
    ("237256", "Industrial Metering Company", "energy-data-provider"),
    ("293482", "Nitrogen Fertiliser Products", "supplier"),
    ("927625", "Agricultural Wholesale Supplies", "distributor"),
    ("143252", "Precise Farm Automation Co", "farm-management-provider"),
    ("394722", "Rosemary Accountancy Software", "accounts-platform-provider"),
    ("183426", "Sustainable Farm Systems", "environmental-reporting-provider"),
    ("582373", "Green Bank of London", "financial-service-provider"),
];

/// The built-in roster as owned records, in provisioning order.
pub fn builtin_roster() -> Vec<MemberRecord> {
    BUILTIN_MEMBERS
        .iter()
        .map(|&(identifier, name, role)| MemberRecord::new(identifier, name, role))
        .collect()
}
