//! Static role profiles.
//!
//! Each role carries a fixed goal/backstory prompt pair, a tool capability
//! set, and a delegation flag. The table is constant data so it can be
//! inspected and tested in isolation; no dynamic dispatch is involved.

use crate::role::AgentRole;
use crate::tool::ToolCapability;

/// Static prompt and capability data for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    /// What the agent is trying to achieve.
    pub goal: &'static str,

    /// Persona backstory injected into the system prompt.
    pub backstory: &'static str,

    /// Capabilities the agent declares.
    pub tools: &'static [ToolCapability],

    /// Whether the agent may delegate work to others.
    pub allow_delegation: bool,
}

const READ_ONLY_TOOLS: &[ToolCapability] =
    &[ToolCapability::FileRead, ToolCapability::DirectoryRead];

const DEVELOPER_TOOLS: &[ToolCapability] = &[
    ToolCapability::FileRead,
    ToolCapability::DirectoryRead,
    ToolCapability::CodeInterpreter,
];

const FILE_ONLY_TOOLS: &[ToolCapability] = &[ToolCapability::FileRead];

/// Look up the static profile for a role.
pub fn profile(role: AgentRole) -> RoleProfile {
    match role {
        AgentRole::ProductManager => RoleProfile {
            goal: "Translate business needs into prioritized, well-scoped product \
                   requirements that the team can deliver incrementally.",
            backstory: "You are a senior product manager who has shipped multiple \
                        SaaS products. You write crisp user stories, define measurable \
                        acceptance criteria, and ruthlessly prioritize scope.",
            tools: FILE_ONLY_TOOLS,
            allow_delegation: false,
        },
        AgentRole::Architect => RoleProfile {
            goal: "Design scalable, maintainable, and secure software architectures \
                   that meet business requirements while following industry best practices.",
            backstory: "You are a senior software architect with 15+ years of experience \
                        designing enterprise systems. You have deep expertise in microservices, \
                        event-driven architecture, and cloud-native design patterns. You excel \
                        at translating business requirements into technical specifications.",
            tools: READ_ONLY_TOOLS,
            allow_delegation: true,
        },
        AgentRole::TechLead => RoleProfile {
            goal: "Keep the implementation coherent across the team by setting coding \
                   standards and reviewing technical decisions.",
            backstory: "You are a hands-on tech lead who balances delivery pressure with \
                        code quality. You review designs, unblock developers, and keep the \
                        codebase consistent.",
            tools: READ_ONLY_TOOLS,
            allow_delegation: true,
        },
        AgentRole::BackendDeveloper => RoleProfile {
            goal: "Implement robust, efficient, and well-tested backend services \
                   following clean code principles and design patterns.",
            backstory: "You are a senior backend developer specializing in Python and \
                        FastAPI. You have extensive experience with PostgreSQL, Redis, \
                        and message queues. You write clean, testable code and always \
                        include comprehensive error handling and logging.",
            tools: DEVELOPER_TOOLS,
            allow_delegation: false,
        },
        AgentRole::FrontendDeveloper => RoleProfile {
            goal: "Create responsive, accessible, and performant user interfaces \
                   that provide excellent user experience.",
            backstory: "You are a senior frontend developer with expertise in React, \
                        Next.js, and TypeScript. You follow accessibility guidelines \
                        (WCAG 2.1), write semantic HTML, and optimize for performance. \
                        You use modern CSS with Tailwind and implement responsive designs.",
            tools: READ_ONLY_TOOLS,
            allow_delegation: false,
        },
        AgentRole::DatabaseEngineer => RoleProfile {
            goal: "Design and optimize database schemas for performance, \
                   reliability, and data integrity.",
            backstory: "You are a database specialist with deep expertise in PostgreSQL. \
                        You understand query optimization, indexing strategies, and \
                        database normalization. You design for both OLTP and OLAP \
                        workloads and implement proper backup and recovery strategies.",
            tools: FILE_ONLY_TOOLS,
            allow_delegation: false,
        },
        AgentRole::DevOpsEngineer => RoleProfile {
            goal: "Design and implement robust CI/CD pipelines, infrastructure \
                   as code, and deployment automation for reliable software delivery.",
            backstory: "You are a senior DevOps engineer with expertise in Docker, \
                        Kubernetes, Terraform, and GitHub Actions. You implement \
                        GitOps workflows, design for high availability, and ensure \
                        zero-downtime deployments. You follow security best practices \
                        and implement comprehensive monitoring.",
            tools: READ_ONLY_TOOLS,
            allow_delegation: false,
        },
        AgentRole::QaEngineer => RoleProfile {
            goal: "Ensure software quality through comprehensive testing strategies, \
                   automated test suites, and continuous quality monitoring.",
            backstory: "You are a senior QA engineer with expertise in test automation. \
                        You design test strategies covering unit, integration, e2e, and \
                        performance testing. You use pytest for backend, Jest/Playwright \
                        for frontend, and implement quality gates in CI/CD pipelines.",
            tools: READ_ONLY_TOOLS,
            allow_delegation: false,
        },
        AgentRole::SecurityAnalyst => RoleProfile {
            goal: "Identify and mitigate security risks through threat modeling, \
                   security testing, and implementation of security controls.",
            backstory: "You are a senior security analyst with expertise in application \
                        security. You conduct threat modeling using STRIDE, perform \
                        security code reviews, and ensure compliance with OWASP guidelines. \
                        You implement security controls for authentication, authorization, \
                        and data protection.",
            tools: READ_ONLY_TOOLS,
            allow_delegation: false,
        },
        AgentRole::TechnicalWriter => RoleProfile {
            goal: "Create clear, comprehensive, and maintainable documentation \
                   that enables users and developers to effectively use the system.",
            backstory: "You are a senior technical writer with experience documenting \
                        complex software systems. You create API documentation, user \
                        guides, and developer documentation. You follow docs-as-code \
                        practices and ensure documentation stays in sync with code.",
            tools: READ_ONLY_TOOLS,
            allow_delegation: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_a_profile() {
        for role in AgentRole::ALL {
            let profile = profile(role);
            assert!(!profile.goal.is_empty(), "empty goal for {role}");
            assert!(!profile.backstory.is_empty(), "empty backstory for {role}");
            assert!(!profile.tools.is_empty(), "no tools for {role}");
        }
    }

    #[test]
    fn test_delegation_flags() {
        assert!(profile(AgentRole::Architect).allow_delegation);
        assert!(profile(AgentRole::TechLead).allow_delegation);
        assert!(!profile(AgentRole::BackendDeveloper).allow_delegation);
        assert!(!profile(AgentRole::QaEngineer).allow_delegation);
    }

    #[test]
    fn test_tool_sets() {
        assert_eq!(
            profile(AgentRole::BackendDeveloper).tools,
            &[
                ToolCapability::FileRead,
                ToolCapability::DirectoryRead,
                ToolCapability::CodeInterpreter,
            ]
        );
        assert_eq!(
            profile(AgentRole::DatabaseEngineer).tools,
            &[ToolCapability::FileRead]
        );
    }
}
