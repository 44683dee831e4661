//! Per-role task templates.
//!
//! Task generation is a pure function of role and context: fixed template
//! text plus context substitution, no hidden state, no randomness. Missing
//! context keys render as defined placeholders, so generation never fails.
//! Roles without templates (product manager, tech lead) yield an empty list.

use crate::context::{keys, ProjectContext};
use crate::role::AgentRole;
use crate::task::Task;

/// Generate the ordered task list for a role from the given context.
pub fn tasks_for(role: AgentRole, ctx: &ProjectContext) -> Vec<Task> {
    match role {
        AgentRole::Architect => architect_tasks(ctx),
        AgentRole::BackendDeveloper => backend_tasks(ctx),
        AgentRole::FrontendDeveloper => frontend_tasks(ctx),
        AgentRole::DatabaseEngineer => database_tasks(ctx),
        AgentRole::DevOpsEngineer => devops_tasks(ctx),
        AgentRole::QaEngineer => qa_tasks(ctx),
        AgentRole::SecurityAnalyst => security_tasks(ctx),
        AgentRole::TechnicalWriter => writer_tasks(ctx),
        AgentRole::ProductManager | AgentRole::TechLead => Vec::new(),
    }
}

fn architect_tasks(ctx: &ProjectContext) -> Vec<Task> {
    let project_name = ctx.project_name();
    let requirements = ctx.section(keys::REQUIREMENTS, "{}");

    vec![
        Task::new(
            AgentRole::Architect,
            format!(
                "Analyze the requirements for {project_name} and create a comprehensive \
                 system architecture document that includes:\n\
                 \n\
                 1. High-level system overview\n\
                 2. Component diagram with clear boundaries\n\
                 3. Data flow between components\n\
                 4. Technology stack recommendations with justifications\n\
                 5. Scalability considerations\n\
                 6. Security architecture\n\
                 7. Integration patterns\n\
                 \n\
                 Requirements: {requirements}"
            ),
            "A detailed architecture document in markdown format with diagrams \
             described in ASCII art or mermaid syntax.",
        ),
        Task::new(
            AgentRole::Architect,
            format!(
                "Based on the architecture for {project_name}, create detailed \
                 API specifications including:\n\
                 \n\
                 1. RESTful endpoint definitions\n\
                 2. Request/Response schemas\n\
                 3. Authentication/Authorization flows\n\
                 4. Rate limiting strategy\n\
                 5. Error handling patterns"
            ),
            "OpenAPI 3.0 specification in YAML format with all endpoints, \
             schemas, and security definitions.",
        ),
    ]
}

fn backend_tasks(ctx: &ProjectContext) -> Vec<Task> {
    let project_name = ctx.project_name();
    let architecture = ctx.section(keys::ARCHITECTURE, "{}");
    let api_spec = ctx.section(keys::API_SPEC, "{}");

    vec![
        Task::new(
            AgentRole::BackendDeveloper,
            format!(
                "Implement the database models for {project_name} based on the \
                 architecture specification:\n\
                 \n\
                 Architecture: {architecture}\n\
                 \n\
                 Requirements:\n\
                 1. Use SQLAlchemy 2.0 with async support\n\
                 2. Include all necessary relationships\n\
                 3. Add appropriate indexes\n\
                 4. Include created_at, updated_at timestamps\n\
                 5. Implement soft delete where appropriate"
            ),
            "Complete SQLAlchemy model definitions in Python with \
             all relationships, indexes, and constraints.",
        ),
        Task::new(
            AgentRole::BackendDeveloper,
            format!(
                "Implement the REST API endpoints for {project_name} based on \
                 the API specification:\n\
                 \n\
                 API Spec: {api_spec}\n\
                 \n\
                 Requirements:\n\
                 1. Use FastAPI with async/await\n\
                 2. Include Pydantic schemas for validation\n\
                 3. Implement proper error handling\n\
                 4. Add authentication decorators\n\
                 5. Include OpenAPI documentation"
            ),
            "Complete FastAPI route implementations with all CRUD \
             operations, validation, and documentation.",
        ),
    ]
}

fn frontend_tasks(ctx: &ProjectContext) -> Vec<Task> {
    let project_name = ctx.project_name();
    let design_spec = ctx.section(keys::DESIGN_SPEC, "{}");
    let api_endpoints = ctx.section(keys::API_ENDPOINTS, "[]");

    vec![
        Task::new(
            AgentRole::FrontendDeveloper,
            format!(
                "Create the component architecture for {project_name}:\n\
                 \n\
                 Design Specification: {design_spec}\n\
                 \n\
                 Requirements:\n\
                 1. Define component hierarchy\n\
                 2. Plan state management strategy\n\
                 3. Design reusable component library\n\
                 4. Plan routing structure\n\
                 5. Define API integration layer"
            ),
            "Component architecture document with hierarchy diagram, \
             state management plan, and component specifications.",
        ),
        Task::new(
            AgentRole::FrontendDeveloper,
            format!(
                "Implement React components for {project_name} based on the \
                 component architecture:\n\
                 \n\
                 API Endpoints: {api_endpoints}\n\
                 \n\
                 Requirements:\n\
                 1. Use TypeScript with strict mode\n\
                 2. Implement with Next.js 14 app router\n\
                 3. Use TanStack Query for data fetching\n\
                 4. Style with Tailwind CSS\n\
                 5. Include loading and error states\n\
                 6. Ensure accessibility compliance"
            ),
            "Complete React/TypeScript component implementations with \
             all required functionality and styling.",
        ),
    ]
}

fn database_tasks(ctx: &ProjectContext) -> Vec<Task> {
    let project_name = ctx.project_name();
    let data_model = ctx.section(keys::DATA_MODEL, "{}");

    vec![
        Task::new(
            AgentRole::DatabaseEngineer,
            format!(
                "Design the database schema for {project_name}:\n\
                 \n\
                 Data Model: {data_model}\n\
                 \n\
                 Requirements:\n\
                 1. Define all tables with appropriate data types\n\
                 2. Establish primary and foreign keys\n\
                 3. Design indexes for common queries\n\
                 4. Plan partitioning strategy if needed\n\
                 5. Consider denormalization for read performance\n\
                 6. Include audit columns"
            ),
            "Complete database schema in SQL DDL format with all \
             tables, indexes, constraints, and documentation.",
        ),
        Task::new(
            AgentRole::DatabaseEngineer,
            format!(
                "Create Alembic migrations for {project_name}:\n\
                 \n\
                 Requirements:\n\
                 1. Initial schema migration\n\
                 2. Seed data migration\n\
                 3. Index creation migration\n\
                 4. Include rollback procedures"
            ),
            "Alembic migration files with upgrade and downgrade \
             functions for all schema changes.",
        ),
    ]
}

fn devops_tasks(ctx: &ProjectContext) -> Vec<Task> {
    let project_name = ctx.project_name();
    let architecture = ctx.section(keys::ARCHITECTURE, "{}");

    vec![
        Task::new(
            AgentRole::DevOpsEngineer,
            format!(
                "Create Docker configuration for {project_name}:\n\
                 \n\
                 Architecture: {architecture}\n\
                 \n\
                 Requirements:\n\
                 1. Multi-stage Dockerfile for each service\n\
                 2. Docker Compose for local development\n\
                 3. Optimize image sizes\n\
                 4. Include health checks\n\
                 5. Configure proper networking\n\
                 6. Set up volume mounts for persistence"
            ),
            "Complete Dockerfile and docker-compose.yml with all \
             services, networks, and volumes configured.",
        ),
        Task::new(
            AgentRole::DevOpsEngineer,
            format!(
                "Create CI/CD pipeline for {project_name}:\n\
                 \n\
                 Requirements:\n\
                 1. GitHub Actions workflow\n\
                 2. Build and test stages\n\
                 3. Security scanning (SAST/DAST)\n\
                 4. Container image building and pushing\n\
                 5. Deployment to staging and production\n\
                 6. Rollback procedures"
            ),
            "Complete GitHub Actions workflow files with all stages, \
             secrets management, and environment configurations.",
        ),
        Task::new(
            AgentRole::DevOpsEngineer,
            format!(
                "Create infrastructure as code for {project_name}:\n\
                 \n\
                 Requirements:\n\
                 1. Terraform modules for cloud resources\n\
                 2. Kubernetes manifests or Helm charts\n\
                 3. Network security groups\n\
                 4. Load balancer configuration\n\
                 5. Auto-scaling policies\n\
                 6. Monitoring and alerting setup"
            ),
            "Complete Terraform configurations and Kubernetes manifests \
             for production deployment.",
        ),
    ]
}

fn qa_tasks(ctx: &ProjectContext) -> Vec<Task> {
    let project_name = ctx.project_name();
    let requirements = ctx.section(keys::REQUIREMENTS, "{}");

    vec![
        Task::new(
            AgentRole::QaEngineer,
            format!(
                "Create test strategy for {project_name}:\n\
                 \n\
                 Requirements: {requirements}\n\
                 \n\
                 Include:\n\
                 1. Test pyramid structure\n\
                 2. Coverage targets for each layer\n\
                 3. Test environment requirements\n\
                 4. Data management strategy\n\
                 5. Performance testing approach\n\
                 6. Security testing scope"
            ),
            "Comprehensive test strategy document with detailed \
             approach for each testing layer.",
        ),
        Task::new(
            AgentRole::QaEngineer,
            format!(
                "Implement backend test suite for {project_name}:\n\
                 \n\
                 Requirements:\n\
                 1. Unit tests with pytest\n\
                 2. Integration tests for API endpoints\n\
                 3. Database tests with test fixtures\n\
                 4. Mock external dependencies\n\
                 5. Achieve 80%+ code coverage\n\
                 6. Include performance benchmarks"
            ),
            "Complete pytest test suite with fixtures, mocks, \
             and configuration for CI integration.",
        ),
        Task::new(
            AgentRole::QaEngineer,
            format!(
                "Implement frontend test suite for {project_name}:\n\
                 \n\
                 Requirements:\n\
                 1. Component tests with Jest/React Testing Library\n\
                 2. E2E tests with Playwright\n\
                 3. Visual regression tests\n\
                 4. Accessibility tests\n\
                 5. Performance budgets"
            ),
            "Complete frontend test suite with component tests, \
             E2E scenarios, and CI configuration.",
        ),
    ]
}

fn security_tasks(ctx: &ProjectContext) -> Vec<Task> {
    let project_name = ctx.project_name();
    let architecture = ctx.section(keys::ARCHITECTURE, "{}");

    vec![
        Task::new(
            AgentRole::SecurityAnalyst,
            format!(
                "Perform threat modeling for {project_name}:\n\
                 \n\
                 Architecture: {architecture}\n\
                 \n\
                 Requirements:\n\
                 1. Identify trust boundaries\n\
                 2. Apply STRIDE methodology\n\
                 3. Document threat scenarios\n\
                 4. Prioritize by risk level\n\
                 5. Recommend mitigations"
            ),
            "Threat model document with identified threats, \
             risk ratings, and mitigation strategies.",
        ),
        Task::new(
            AgentRole::SecurityAnalyst,
            format!(
                "Define security requirements for {project_name}:\n\
                 \n\
                 Requirements:\n\
                 1. Authentication mechanisms (OAuth2/OIDC)\n\
                 2. Authorization model (RBAC/ABAC)\n\
                 3. Data encryption (at rest and in transit)\n\
                 4. Input validation rules\n\
                 5. Audit logging requirements\n\
                 6. Compliance controls (GDPR, SOC2)"
            ),
            "Security requirements specification with implementation \
             guidance for each control.",
        ),
        Task::new(
            AgentRole::SecurityAnalyst,
            format!(
                "Create security testing plan for {project_name}:\n\
                 \n\
                 Requirements:\n\
                 1. SAST tool configuration\n\
                 2. DAST scanning scope\n\
                 3. Dependency vulnerability scanning\n\
                 4. Penetration testing scope\n\
                 5. Security regression tests"
            ),
            "Security testing plan with tool configurations, \
             test cases, and CI integration.",
        ),
    ]
}

fn writer_tasks(ctx: &ProjectContext) -> Vec<Task> {
    let project_name = ctx.project_name();
    let api_spec = ctx.section(keys::API_SPEC, "{}");

    vec![
        Task::new(
            AgentRole::TechnicalWriter,
            format!(
                "Create API documentation for {project_name}:\n\
                 \n\
                 API Specification: {api_spec}\n\
                 \n\
                 Requirements:\n\
                 1. Getting started guide\n\
                 2. Authentication guide\n\
                 3. Endpoint reference with examples\n\
                 4. Error code reference\n\
                 5. Rate limiting documentation\n\
                 6. SDK examples (curl, Python, JavaScript)"
            ),
            "Complete API documentation in markdown format with \
             examples, diagrams, and code samples.",
        ),
        Task::new(
            AgentRole::TechnicalWriter,
            format!(
                "Create developer documentation for {project_name}:\n\
                 \n\
                 Requirements:\n\
                 1. Local development setup\n\
                 2. Architecture overview\n\
                 3. Code contribution guidelines\n\
                 4. Testing guide\n\
                 5. Deployment guide\n\
                 6. Troubleshooting guide"
            ),
            "Complete developer documentation enabling new \
             developers to contribute to the project.",
        ),
    ]
}
