//! Mandatory-field tables per role.
//!
//! Each role variant declares a fixed, ordered list of dot-addressable
//! field paths over the serialized (camelCase) profile record. The
//! completion engine walks the active role's list; the paths are data,
//! not code, so adding a field to a variant is a one-line table change.

use serde_json::Value;

use crate::system::roles::UserRole;

/// One mandatory field: wire path plus the label surfaced to the user when
/// the field is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub path: &'static str,
    pub label: &'static str,
}

const fn field(path: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { path, label }
}

// Shared nine-field core, identical for every role variant.
const CORE: [FieldSpec; 9] = [
    field("name", "Name"),
    field("email", "Email"),
    field("contactNumber", "Contact number"),
    field("identityDocument.type", "Identity document type"),
    field("identityDocument.number", "Identity document number"),
    field("address.street", "Street"),
    field("address.city", "City"),
    field("address.state", "State"),
    field("address.pinCode", "PIN code"),
];

const BANKING: [FieldSpec; 4] = [
    field("bankingDetails[0].beneficiaryName", "Beneficiary name"),
    field("bankingDetails[0].accountNumber", "Account number"),
    field("bankingDetails[0].accountType", "Account type"),
    field("bankingDetails[0].ifscCode", "IFSC code"),
];

const REPRESENTATIVE: [FieldSpec; 3] = [
    field("authorizedRepresentative.name", "Authorized representative name"),
    field("authorizedRepresentative.email", "Authorized representative email"),
    field(
        "authorizedRepresentative.contactNumber",
        "Authorized representative contact number",
    ),
];

const SEEKER_INDIVIDUAL: [FieldSpec; 13] = concat_specs::<13>(&[&CORE, &BANKING]);

const SEEKER_ENTITY: [FieldSpec; 17] = concat_specs::<17>(&[
    &CORE,
    &[field("entityName", "Entity name")],
    &REPRESENTATIVE,
    &BANKING,
]);

const SEEKER_TEAM_MEMBER: [FieldSpec; 9] = CORE;

const PROVIDER_INDIVIDUAL: [FieldSpec; 15] = concat_specs::<15>(&[
    &CORE,
    &[
        field("yearsOfExperience", "Years of experience"),
        field("servicesOffered", "Services offered"),
    ],
    &BANKING,
]);

const PROVIDER_ENTITY: [FieldSpec; 21] = concat_specs::<21>(&[
    &CORE,
    &[field("entityName", "Entity name")],
    &REPRESENTATIVE,
    &[
        field("resourceInfra.numberOfPartners", "Number of partners"),
        field(
            "resourceInfra.numberOfProfessionalStaff",
            "Number of professional staff",
        ),
        field("resourceInfra.numberOfSupportStaff", "Number of support staff"),
        field("servicesOffered", "Services offered"),
    ],
    &BANKING,
]);

const PROVIDER_TEAM_MEMBER: [FieldSpec; 10] =
    concat_specs::<10>(&[&CORE, &[field("designation", "Designation")]]);

/// Compile-time concatenation of spec slices; the per-role tables above stay
/// declarative while the shared blocks are written once.
const fn concat_specs<const N: usize>(parts: &[&[FieldSpec]]) -> [FieldSpec; N] {
    let mut out = [field("", ""); N];
    let mut n = 0;
    let mut p = 0;
    while p < parts.len() {
        let part = parts[p];
        let mut i = 0;
        while i < part.len() {
            out[n] = part[i];
            n += 1;
            i += 1;
        }
        p += 1;
    }
    assert!(n == N);
    out
}

/// The ordered mandatory-field list of a role variant
pub fn mandatory_fields(role: UserRole) -> &'static [FieldSpec] {
    match role {
        UserRole::SeekerIndividualPartner => &SEEKER_INDIVIDUAL,
        UserRole::SeekerEntityAdmin => &SEEKER_ENTITY,
        UserRole::SeekerTeamMember => &SEEKER_TEAM_MEMBER,
        UserRole::ProviderIndividualPartner => &PROVIDER_INDIVIDUAL,
        UserRole::ProviderEntityAdmin => &PROVIDER_ENTITY,
        UserRole::ProviderTeamMember => &PROVIDER_TEAM_MEMBER,
    }
}

/// Resolve a dot-addressable path (with optional `[idx]` segments) against a
/// JSON value: `address.city`, `bankingDetails[0].ifscCode`.
pub fn resolve_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        let (key, index) = match segment.find('[') {
            Some(open) => {
                let close = segment.find(']')?;
                let idx: usize = segment.get(open + 1..close)?.parse().ok()?;
                (&segment[..open], Some(idx))
            }
            None => (segment, None),
        };
        current = current.get(key)?;
        if let Some(idx) = index {
            current = current.get(idx)?;
        }
    }
    Some(current)
}

/// Whether a resolved value counts as filled.
///
/// Strings must be non-whitespace; numbers and booleans count whenever
/// present (an explicit zero is an answer); arrays count when non-empty.
pub fn value_is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Number(_) => true,
        Value::Bool(_) => true,
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seeker_team_member_has_nine_fields() {
        assert_eq!(mandatory_fields(UserRole::SeekerTeamMember).len(), 9);
    }

    #[test]
    fn test_every_role_has_a_table() {
        for role in UserRole::all() {
            let specs = mandatory_fields(role);
            assert!(!specs.is_empty());
            // Paths are unique within a table
            for (i, a) in specs.iter().enumerate() {
                for b in &specs[i + 1..] {
                    assert_ne!(a.path, b.path, "duplicate path in {:?}", role);
                }
            }
        }
    }

    #[test]
    fn test_resolve_simple_and_indexed_paths() {
        let root = json!({
            "address": {"city": "Mumbai"},
            "bankingDetails": [{"ifscCode": "HDFC0000123"}]
        });
        assert_eq!(
            resolve_path(&root, "address.city"),
            Some(&json!("Mumbai"))
        );
        assert_eq!(
            resolve_path(&root, "bankingDetails[0].ifscCode"),
            Some(&json!("HDFC0000123"))
        );
        assert_eq!(resolve_path(&root, "bankingDetails[1].ifscCode"), None);
        assert_eq!(resolve_path(&root, "address.missing"), None);
    }

    #[test]
    fn test_value_is_filled_rules() {
        assert!(!value_is_filled(&json!(null)));
        assert!(!value_is_filled(&json!("")));
        assert!(!value_is_filled(&json!("   ")));
        assert!(value_is_filled(&json!("x")));
        // An explicit zero counts (staff-count fields)
        assert!(value_is_filled(&json!(0)));
        assert!(value_is_filled(&json!(false)));
        assert!(!value_is_filled(&json!([])));
        assert!(value_is_filled(&json!(["liquidation"])));
    }
}
