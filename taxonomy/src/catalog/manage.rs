//! Manage: prioritizing and treating AI risk.

use crate::catalog::{CategoryContent, FunctionCatalog};
use crate::types::{Function, RmfFunction};

/// Provider for the Manage function.
pub struct ManageCatalog;

impl FunctionCatalog for ManageCatalog {
    fn function(&self) -> Function {
        Function::new(
            RmfFunction::Manage,
            "Allocate resources to mapped and measured risks, and respond to and recover from incidents.",
        )
    }

    fn categories(&self) -> Vec<CategoryContent> {
        let f = RmfFunction::Manage;
        vec![
            CategoryContent::new("MG.1", "Risk Prioritization", f)
                .question(
                    "Are identified AI risks prioritized by likelihood and impact?",
                    "A single prioritization method is used across systems so risks can be compared.",
                )
                .question(
                    "Is a go/no-go decision made on whether an AI system should proceed given its risks?",
                    "Decisions are recorded, including decisions not to deploy.",
                )
                .question(
                    "Are escalation criteria defined for risks that exceed tolerance?",
                    "Escalation paths name who is informed and how quickly.",
                )
                .question(
                    "Are residual risks documented and accepted by an accountable owner?",
                    "Acceptance is explicit, time-bound and revisited on change.",
                )
                .action(
                    2.0,
                    "Develop Risk Prioritization Framework",
                    "Create a systematic risk prioritization methodology incorporating likelihood, impact, urgency, and regulatory exposure factors.",
                    "1-2 months",
                    "Risk management, Leadership",
                )
                .action(
                    3.0,
                    "Define Risk Escalation Procedures",
                    "Establish clear escalation criteria and procedures for when AI risks exceed predefined thresholds.",
                    "1-2 months",
                    "Risk management, Executive team",
                ),
            CategoryContent::new("MG.2", "Risk Treatment Strategies", f)
                .question(
                    "Are treatment plans documented for high-priority AI risks?",
                    "Plans name mitigations, owners, deadlines and success criteria.",
                )
                .question(
                    "Is there an AI-specific incident response plan?",
                    "The plan covers detection, containment, rollback, communication and post-incident review.",
                )
                .question(
                    "Are incident response procedures for AI systems exercised?",
                    "Tabletop or live exercises run at least annually and produce improvements.",
                )
                .question(
                    "Are resources allocated to sustain risk treatments over time?",
                    "Budgets and staffing for mitigations continue after launch.",
                )
                .action(
                    2.0,
                    "Create AI Risk Treatment Plans",
                    "Develop documented treatment plans for identified AI risks including specific mitigations, timelines, responsible parties, and success criteria.",
                    "1-3 months",
                    "Risk team, AI teams, Legal",
                )
                .action(
                    3.0,
                    "Build AI Incident Response Capability",
                    "Develop and test AI-specific incident response plans including detection, containment, remediation, and communication procedures.",
                    "2-4 months",
                    "Security, Communications, Legal",
                ),
            CategoryContent::new("MG.3", "Third-Party Risk Management", f)
                .question(
                    "Are third-party AI components and services assessed before adoption?",
                    "Due diligence covers training data, evaluation results, security posture and contractual terms.",
                )
                .question(
                    "Are third-party AI providers monitored on an ongoing basis?",
                    "Provider performance and changes are reviewed on a defined schedule.",
                )
                .question(
                    "Do contracts with AI vendors address risk, transparency and incident notification?",
                    "Contracts include audit rights, notification windows and data-use limits.",
                )
                .action(
                    2.0,
                    "Implement Third-Party AI Risk Assessment",
                    "Develop vendor assessment questionnaires and due diligence processes for evaluating third-party AI components and services.",
                    "1-3 months",
                    "Procurement, Security, Legal",
                )
                .action(
                    3.0,
                    "Establish Vendor Monitoring Program",
                    "Create ongoing monitoring processes for third-party AI providers, including performance tracking and periodic reassessments.",
                    "2-4 months",
                    "Vendor management, IT",
                ),
            CategoryContent::new("MG.4", "Deployment & Post-Deployment", f)
                .question(
                    "Is there a formal pre-deployment review and approval gate for AI systems?",
                    "Launch requires a checklist sign-off with defined go/no-go criteria.",
                )
                .question(
                    "Can humans override or intervene in AI-driven decisions?",
                    "Override mechanisms are tested and their use is logged.",
                )
                .question(
                    "Are post-deployment risks reviewed and communicated to stakeholders?",
                    "Periodic reviews report residual risk and incidents to the accountable owner.",
                )
                .question(
                    "Can AI systems be rolled back or disabled quickly when problems arise?",
                    "Rollback is rehearsed and the time to disable is known.",
                )
                .action(
                    2.0,
                    "Implement AI Deployment Gate Process",
                    "Create mandatory pre-deployment review checklists and approval workflows with defined go/no-go criteria for AI system launches.",
                    "1-2 months",
                    "Product, Engineering, Risk team",
                )
                .action(
                    3.0,
                    "Build Human Override Capabilities",
                    "Design and implement human override and intervention mechanisms for AI-driven decisions, with clear escalation paths.",
                    "2-4 months",
                    "Engineering, Operations",
                ),
        ]
    }
}
