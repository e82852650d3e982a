//! Govern: the cross-cutting culture, policy and accountability function.

use crate::catalog::{CategoryContent, FunctionCatalog};
use crate::types::{Function, RmfFunction};

/// Provider for the Govern function.
pub struct GovernCatalog;

impl FunctionCatalog for GovernCatalog {
    fn function(&self) -> Function {
        Function::new(
            RmfFunction::Govern,
            "Cultivate a culture of AI risk management through policies, accountability and oversight.",
        )
    }

    fn categories(&self) -> Vec<CategoryContent> {
        let f = RmfFunction::Govern;
        vec![
            CategoryContent::new("GV.1", "AI Risk Management Policies", f)
                .question(
                    "Does your organization have documented policies that address the risks of developing and deploying AI systems?",
                    "Look for a board- or executive-approved AI risk policy that defines scope, risk tolerance and management procedures.",
                )
                .question(
                    "Are legal and regulatory requirements for AI understood, documented and tracked?",
                    "A maintained register maps each applicable law or regulation to the AI systems and controls it affects.",
                )
                .question(
                    "Are AI risk policies reviewed and updated on a defined schedule?",
                    "Policies have named owners, a review cadence and a change log tied to incidents and regulatory change.",
                )
                .action(
                    2.0,
                    "Develop AI Risk Management Policy Framework",
                    "Create a comprehensive AI risk management policy that defines risk tolerance, governance structure, and management procedures. Align with NIST AI RMF and applicable regulations.",
                    "0-3 months",
                    "Policy team, Legal, CISO office",
                )
                .action(
                    3.0,
                    "Establish Policy Review Cycle",
                    "Implement quarterly policy reviews and annual comprehensive updates. Assign policy ownership and track compliance.",
                    "1-2 months",
                    "Governance team",
                ),
            CategoryContent::new("GV.2", "Accountability Structures", f)
                .question(
                    "Are roles and responsibilities for AI risk management clearly defined and assigned?",
                    "A RACI or equivalent names who owns, approves and is consulted on AI risk decisions.",
                )
                .question(
                    "Does a senior executive hold accountability for AI risk across the organization?",
                    "Accountability sits with a named leader (for example a Chief AI Officer) with authority to halt deployments.",
                )
                .question(
                    "Are AI risk decisions documented with rationale and sign-off?",
                    "Decision records capture the risk considered, the alternatives, the approver and the date.",
                )
                .action(
                    2.0,
                    "Define AI Governance Roles and Responsibilities",
                    "Establish a RACI matrix for AI risk management. Designate a senior leader (e.g., CAIO) and form an AI governance committee.",
                    "0-2 months",
                    "Executive leadership, HR",
                )
                .action(
                    3.0,
                    "Implement Decision Documentation Process",
                    "Create standardized templates and workflows for documenting AI risk decisions, including audit trails and sign-off records.",
                    "1-3 months",
                    "IT, Compliance team",
                ),
            CategoryContent::new("GV.3", "Workforce Diversity & AI Literacy", f)
                .question(
                    "Do staff who build, buy or use AI systems receive training on AI risks?",
                    "Role-based training covers bias, security, privacy and escalation paths, with completion tracked.",
                )
                .question(
                    "Do AI teams include diverse disciplines, backgrounds and perspectives?",
                    "Teams draw on domain experts, social scientists and affected-community input, not only engineers.",
                )
                .question(
                    "Is AI literacy assessed and refreshed across leadership and the wider workforce?",
                    "Leaders can explain the AI systems they are accountable for; refreshers follow material changes.",
                )
                .action(
                    2.0,
                    "Launch AI Risk Management Training Program",
                    "Develop role-based training covering AI ethics, bias awareness, risk identification, and responsible AI principles for all relevant staff.",
                    "1-3 months",
                    "HR, Training department, External trainers",
                )
                .action(
                    3.0,
                    "Diversify AI Teams",
                    "Recruit multidisciplinary talent including ethicists, social scientists, and domain experts to complement technical AI teams.",
                    "3-6 months",
                    "HR, Hiring managers",
                ),
            CategoryContent::new("GV.4", "Organizational Commitments", f)
                .question(
                    "Has the organization published responsible AI principles endorsed by leadership?",
                    "Principles are public or organization-wide, endorsed at executive level and referenced in policy.",
                )
                .question(
                    "Is a culture of critical thinking and safety-first AI practice actively encouraged?",
                    "Staff can raise AI concerns without reprisal and concerns demonstrably change decisions.",
                )
                .action(
                    2.0,
                    "Publish Responsible AI Principles",
                    "Develop and publish organizational responsible AI principles and commitments, endorsed by senior leadership.",
                    "1-2 months",
                    "Leadership, Communications",
                ),
            CategoryContent::new("GV.5", "Stakeholder Engagement", f)
                .question(
                    "Are external stakeholders able to give feedback on the AI systems that affect them?",
                    "Feedback portals, advisory panels or user research feed a tracked backlog.",
                )
                .question(
                    "Is stakeholder feedback incorporated into AI system design and risk decisions?",
                    "There is evidence that feedback led to changes in requirements, thresholds or deployment scope.",
                )
                .question(
                    "Are mechanisms in place for individuals to contest or appeal AI-driven outcomes?",
                    "Appeals reach a human reviewer within a defined time and outcomes are monitored.",
                )
                .action(
                    2.0,
                    "Establish Stakeholder Feedback Channels",
                    "Create mechanisms for external stakeholders to provide input on AI systems, including feedback portals and advisory groups.",
                    "2-4 months",
                    "Product management, Community relations",
                ),
            CategoryContent::new("GV.6", "Oversight & Monitoring", f)
                .question(
                    "Is there an inventory of all AI systems in use, including third-party systems?",
                    "The inventory records purpose, owner, risk tier, data sources and deployment status for each system.",
                )
                .question(
                    "Are AI systems audited on a regular schedule for compliance, performance and bias?",
                    "Audits combine internal review with periodic independent assessment and track findings to closure.",
                )
                .question(
                    "Are processes defined to safely decommission or phase out AI systems?",
                    "Decommissioning covers data retention, dependent processes and communication to affected users.",
                )
                .action(
                    2.0,
                    "Implement AI System Audit Program",
                    "Establish regular audit cycles for AI systems covering compliance, performance, bias, and security. Include both internal and third-party audits.",
                    "1-3 months",
                    "Internal audit, External auditors",
                )
                .action(
                    3.0,
                    "Build AI System Registry",
                    "Create and maintain a comprehensive inventory of all AI systems in use, including purpose, risk level, data sources, and responsible parties.",
                    "1-2 months",
                    "IT, Data governance",
                ),
        ]
    }
}
