use serde::{Deserialize, Serialize};

/// User roles of the marketplace.
///
/// A role is assigned at registration and is immutable for the lifetime of
/// a session. Wire codes are the registration-service role strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "SERVICE_SEEKER_INDIVIDUAL_PARTNER")]
    SeekerIndividualPartner,
    #[serde(rename = "SERVICE_SEEKER_ENTITY_ADMIN")]
    SeekerEntityAdmin,
    #[serde(rename = "SERVICE_SEEKER_TEAM_MEMBER")]
    SeekerTeamMember,
    #[serde(rename = "SERVICE_PROVIDER_INDIVIDUAL_PARTNER")]
    ProviderIndividualPartner,
    #[serde(rename = "SERVICE_PROVIDER_ENTITY_ADMIN")]
    ProviderEntityAdmin,
    #[serde(rename = "SERVICE_PROVIDER_TEAM_MEMBER")]
    ProviderTeamMember,
}

impl UserRole {
    /// Wire code of the role
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::SeekerIndividualPartner => "SERVICE_SEEKER_INDIVIDUAL_PARTNER",
            UserRole::SeekerEntityAdmin => "SERVICE_SEEKER_ENTITY_ADMIN",
            UserRole::SeekerTeamMember => "SERVICE_SEEKER_TEAM_MEMBER",
            UserRole::ProviderIndividualPartner => "SERVICE_PROVIDER_INDIVIDUAL_PARTNER",
            UserRole::ProviderEntityAdmin => "SERVICE_PROVIDER_ENTITY_ADMIN",
            UserRole::ProviderTeamMember => "SERVICE_PROVIDER_TEAM_MEMBER",
        }
    }

    /// Human-readable role name
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::SeekerIndividualPartner => "Service Seeker (Individual / Partner)",
            UserRole::SeekerEntityAdmin => "Service Seeker (Entity Admin)",
            UserRole::SeekerTeamMember => "Service Seeker (Team Member)",
            UserRole::ProviderIndividualPartner => "Service Provider (Individual / Partner)",
            UserRole::ProviderEntityAdmin => "Service Provider (Entity Admin)",
            UserRole::ProviderTeamMember => "Service Provider (Team Member)",
        }
    }

    /// All roles
    pub fn all() -> Vec<UserRole> {
        vec![
            UserRole::SeekerIndividualPartner,
            UserRole::SeekerEntityAdmin,
            UserRole::SeekerTeamMember,
            UserRole::ProviderIndividualPartner,
            UserRole::ProviderEntityAdmin,
            UserRole::ProviderTeamMember,
        ]
    }

    /// Parse from the wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SERVICE_SEEKER_INDIVIDUAL_PARTNER" => Some(UserRole::SeekerIndividualPartner),
            "SERVICE_SEEKER_ENTITY_ADMIN" => Some(UserRole::SeekerEntityAdmin),
            "SERVICE_SEEKER_TEAM_MEMBER" => Some(UserRole::SeekerTeamMember),
            "SERVICE_PROVIDER_INDIVIDUAL_PARTNER" => Some(UserRole::ProviderIndividualPartner),
            "SERVICE_PROVIDER_ENTITY_ADMIN" => Some(UserRole::ProviderEntityAdmin),
            "SERVICE_PROVIDER_TEAM_MEMBER" => Some(UserRole::ProviderTeamMember),
            _ => None,
        }
    }

    pub fn is_service_seeker(&self) -> bool {
        matches!(
            self,
            UserRole::SeekerIndividualPartner
                | UserRole::SeekerEntityAdmin
                | UserRole::SeekerTeamMember
        )
    }

    pub fn is_service_provider(&self) -> bool {
        !self.is_service_seeker()
    }

    pub fn is_entity_admin(&self) -> bool {
        matches!(
            self,
            UserRole::SeekerEntityAdmin | UserRole::ProviderEntityAdmin
        )
    }
}

/// Rendering branch selected for the dashboard surface.
///
/// The selection is a total function over `Option<UserRole>`: an absent
/// session maps to `AuthenticationRequired`, a role outside the
/// seeker/provider partition maps to `AccessRestricted`. Neither case is an
/// error, both are terminal UI states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardRoute {
    AuthenticationRequired,
    ServiceSeeker,
    ServiceProvider,
    AccessRestricted,
}

/// Select the dashboard variant for a session role
pub fn dashboard_route(role: Option<UserRole>) -> DashboardRoute {
    match role {
        None => DashboardRoute::AuthenticationRequired,
        Some(r) if r.is_service_seeker() => DashboardRoute::ServiceSeeker,
        Some(_) => DashboardRoute::ServiceProvider,
    }
}

/// Select the dashboard variant for a raw role code as it arrived on the
/// wire. Unknown codes land on `AccessRestricted` rather than failing.
pub fn dashboard_route_for_code(code: Option<&str>) -> DashboardRoute {
    match code {
        None => DashboardRoute::AuthenticationRequired,
        Some(c) => match UserRole::from_code(c) {
            Some(role) => dashboard_route(Some(role)),
            None => DashboardRoute::AccessRestricted,
        },
    }
}

/// Rendering branch selected for the profile onboarding form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormRoute {
    SeekerIndividual,
    SeekerEntity,
    SeekerTeamMember,
    ProviderIndividual,
    ProviderEntity,
    ProviderTeamMember,
    UnsupportedRole,
}

/// Select the profile form variant for a session role
pub fn profile_form_route(role: Option<UserRole>) -> ProfileFormRoute {
    match role {
        Some(UserRole::SeekerIndividualPartner) => ProfileFormRoute::SeekerIndividual,
        Some(UserRole::SeekerEntityAdmin) => ProfileFormRoute::SeekerEntity,
        Some(UserRole::SeekerTeamMember) => ProfileFormRoute::SeekerTeamMember,
        Some(UserRole::ProviderIndividualPartner) => ProfileFormRoute::ProviderIndividual,
        Some(UserRole::ProviderEntityAdmin) => ProfileFormRoute::ProviderEntity,
        Some(UserRole::ProviderTeamMember) => ProfileFormRoute::ProviderTeamMember,
        None => ProfileFormRoute::UnsupportedRole,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes_round_trip() {
        for role in UserRole::all() {
            assert_eq!(UserRole::from_code(role.code()), Some(role));
        }
        assert_eq!(UserRole::from_code("unknown_value"), None);
    }

    #[test]
    fn test_dashboard_route_is_total() {
        // Every enum value maps to exactly one seeker/provider branch
        for role in UserRole::all() {
            let route = dashboard_route(Some(role));
            if role.is_service_seeker() {
                assert_eq!(route, DashboardRoute::ServiceSeeker);
            } else {
                assert_eq!(route, DashboardRoute::ServiceProvider);
            }
        }
        assert_eq!(dashboard_route(None), DashboardRoute::AuthenticationRequired);
    }

    #[test]
    fn test_unknown_code_is_restricted_not_an_error() {
        assert_eq!(
            dashboard_route_for_code(Some("unknown_value")),
            DashboardRoute::AccessRestricted
        );
        assert_eq!(
            dashboard_route_for_code(None),
            DashboardRoute::AuthenticationRequired
        );
    }

    #[test]
    fn test_profile_form_route_is_total() {
        for role in UserRole::all() {
            assert_ne!(
                profile_form_route(Some(role)),
                ProfileFormRoute::UnsupportedRole
            );
        }
        assert_eq!(profile_form_route(None), ProfileFormRoute::UnsupportedRole);
    }
}
