//! Agent role identities.
//!
//! Roles are a closed set: ten are defined, eight of which are part of the
//! default roster that the crew instantiates. Role-specific prompt data
//! lives in [`crate::profile`]; task generation lives in
//! [`crate::templates`].

use serde::{Deserialize, Serialize};

/// Identity of an agent role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    /// Product manager (defined, not in the default roster).
    ProductManager,
    /// Software architect.
    Architect,
    /// Tech lead (defined, not in the default roster).
    TechLead,
    /// Backend developer.
    BackendDeveloper,
    /// Frontend developer.
    FrontendDeveloper,
    /// Database engineer.
    DatabaseEngineer,
    /// DevOps engineer.
    #[serde(rename = "devops_engineer")]
    DevOpsEngineer,
    /// QA engineer.
    QaEngineer,
    /// Security analyst.
    SecurityAnalyst,
    /// Technical writer.
    TechnicalWriter,
}

impl AgentRole {
    /// All defined roles.
    pub const ALL: [AgentRole; 10] = [
        AgentRole::ProductManager,
        AgentRole::Architect,
        AgentRole::TechLead,
        AgentRole::BackendDeveloper,
        AgentRole::FrontendDeveloper,
        AgentRole::DatabaseEngineer,
        AgentRole::DevOpsEngineer,
        AgentRole::QaEngineer,
        AgentRole::SecurityAnalyst,
        AgentRole::TechnicalWriter,
    ];

    /// The eight roles instantiated in the default roster.
    pub const ROSTER: [AgentRole; 8] = [
        AgentRole::Architect,
        AgentRole::BackendDeveloper,
        AgentRole::FrontendDeveloper,
        AgentRole::DatabaseEngineer,
        AgentRole::DevOpsEngineer,
        AgentRole::QaEngineer,
        AgentRole::SecurityAnalyst,
        AgentRole::TechnicalWriter,
    ];

    /// Parse a role name, case-insensitively.
    ///
    /// Accepts both the short factory keys (`architect`, `backend`, `qa`, ...)
    /// and the full snake_case names. Unknown names yield `None`, never an
    /// error.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "product_manager" => Some(Self::ProductManager),
            "architect" => Some(Self::Architect),
            "tech_lead" => Some(Self::TechLead),
            "backend" | "backend_developer" => Some(Self::BackendDeveloper),
            "frontend" | "frontend_developer" => Some(Self::FrontendDeveloper),
            "database" | "database_engineer" => Some(Self::DatabaseEngineer),
            "devops" | "devops_engineer" => Some(Self::DevOpsEngineer),
            "qa" | "qa_engineer" => Some(Self::QaEngineer),
            "security" | "security_analyst" => Some(Self::SecurityAnalyst),
            "writer" | "technical_writer" => Some(Self::TechnicalWriter),
            _ => None,
        }
    }

    /// Short key used for factory lookups and logging.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ProductManager => "product_manager",
            Self::Architect => "architect",
            Self::TechLead => "tech_lead",
            Self::BackendDeveloper => "backend",
            Self::FrontendDeveloper => "frontend",
            Self::DatabaseEngineer => "database",
            Self::DevOpsEngineer => "devops",
            Self::QaEngineer => "qa",
            Self::SecurityAnalyst => "security",
            Self::TechnicalWriter => "writer",
        }
    }

    /// Human-readable role title for prompts.
    pub fn title(&self) -> &'static str {
        match self {
            Self::ProductManager => "Product Manager",
            Self::Architect => "Architect",
            Self::TechLead => "Tech Lead",
            Self::BackendDeveloper => "Backend Developer",
            Self::FrontendDeveloper => "Frontend Developer",
            Self::DatabaseEngineer => "Database Engineer",
            Self::DevOpsEngineer => "DevOps Engineer",
            Self::QaEngineer => "QA Engineer",
            Self::SecurityAnalyst => "Security Analyst",
            Self::TechnicalWriter => "Technical Writer",
        }
    }

    /// Check whether this role is part of the default roster.
    pub fn in_roster(&self) -> bool {
        Self::ROSTER.contains(self)
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProductManager => write!(f, "product_manager"),
            Self::Architect => write!(f, "architect"),
            Self::TechLead => write!(f, "tech_lead"),
            Self::BackendDeveloper => write!(f, "backend_developer"),
            Self::FrontendDeveloper => write!(f, "frontend_developer"),
            Self::DatabaseEngineer => write!(f, "database_engineer"),
            Self::DevOpsEngineer => write!(f, "devops_engineer"),
            Self::QaEngineer => write!(f, "qa_engineer"),
            Self::SecurityAnalyst => write!(f, "security_analyst"),
            Self::TechnicalWriter => write!(f, "technical_writer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_keys() {
        assert_eq!(AgentRole::parse("architect"), Some(AgentRole::Architect));
        assert_eq!(AgentRole::parse("backend"), Some(AgentRole::BackendDeveloper));
        assert_eq!(AgentRole::parse("frontend"), Some(AgentRole::FrontendDeveloper));
        assert_eq!(AgentRole::parse("database"), Some(AgentRole::DatabaseEngineer));
        assert_eq!(AgentRole::parse("devops"), Some(AgentRole::DevOpsEngineer));
        assert_eq!(AgentRole::parse("qa"), Some(AgentRole::QaEngineer));
        assert_eq!(AgentRole::parse("security"), Some(AgentRole::SecurityAnalyst));
        assert_eq!(AgentRole::parse("writer"), Some(AgentRole::TechnicalWriter));
    }

    #[test]
    fn test_parse_full_names_and_case() {
        assert_eq!(
            AgentRole::parse("Backend_Developer"),
            Some(AgentRole::BackendDeveloper)
        );
        assert_eq!(AgentRole::parse("ARCHITECT"), Some(AgentRole::Architect));
        assert_eq!(
            AgentRole::parse("product_manager"),
            Some(AgentRole::ProductManager)
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(AgentRole::parse("intern"), None);
        assert_eq!(AgentRole::parse(""), None);
    }

    #[test]
    fn test_roster() {
        assert_eq!(AgentRole::ROSTER.len(), 8);
        assert_eq!(AgentRole::ALL.len(), 10);
        assert!(AgentRole::Architect.in_roster());
        assert!(!AgentRole::ProductManager.in_roster());
        assert!(!AgentRole::TechLead.in_roster());
    }

    #[test]
    fn test_display_and_key() {
        assert_eq!(AgentRole::DevOpsEngineer.to_string(), "devops_engineer");
        assert_eq!(AgentRole::DevOpsEngineer.key(), "devops");
        assert_eq!(AgentRole::QaEngineer.title(), "QA Engineer");
    }

    #[test]
    fn test_serde_round_trip() {
        for role in AgentRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            let parsed: AgentRole = serde_json::from_str(&json).unwrap();
            assert_eq!(role, parsed);
        }

        let json = serde_json::to_string(&AgentRole::DevOpsEngineer).unwrap();
        assert_eq!(json, "\"devops_engineer\"");
    }
}
