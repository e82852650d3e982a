//! Map: establishing context and identifying AI risks.

use crate::catalog::{CategoryContent, FunctionCatalog};
use crate::types::{Function, RmfFunction};

/// Provider for the Map function.
pub struct MapCatalog;

impl FunctionCatalog for MapCatalog {
    fn function(&self) -> Function {
        Function::new(
            RmfFunction::Map,
            "Establish the context to frame risks related to each AI system.",
        )
    }

    fn categories(&self) -> Vec<CategoryContent> {
        let f = RmfFunction::Map;
        vec![
            CategoryContent::new("MP.1", "Context & Use Case Definition", f)
                .question(
                    "Is the intended purpose of each AI system documented?",
                    "Documentation states the problem solved, the intended users and the decisions the system informs.",
                )
                .question(
                    "Are the operating context and deployment environment of each AI system understood?",
                    "Context covers where, when and by whom the system is used, and the conditions it was validated for.",
                )
                .question(
                    "Are known limitations and out-of-scope uses of each AI system documented?",
                    "Limitations are written for users, not only developers, and surface in user-facing material.",
                )
                .question(
                    "Are criteria defined for acceptable and unacceptable AI use cases?",
                    "Red lines are explicit and a review step exists for novel or borderline use cases.",
                )
                .action(
                    2.0,
                    "Document AI Use Cases and Boundaries",
                    "Create comprehensive documentation for each AI system including intended purpose, operational context, user profiles, and known limitations.",
                    "0-2 months",
                    "Product teams, Data scientists",
                )
                .action(
                    3.0,
                    "Define Acceptable Use Criteria",
                    "Establish clear criteria for acceptable and unacceptable AI use cases, including red lines that should not be crossed.",
                    "1-2 months",
                    "Ethics committee, Legal",
                ),
            CategoryContent::new("MP.2", "AI System Categorization", f)
                .question(
                    "Are AI systems classified by risk level based on their potential impact?",
                    "A tiering scheme (for example high/medium/low) is applied consistently and drives control depth.",
                )
                .question(
                    "Are the tasks and methods used by each AI system documented?",
                    "Documentation names the model class, training approach and the task the output supports.",
                )
                .question(
                    "Is human oversight defined according to each system's risk tier?",
                    "Higher tiers require human review of outputs before consequential action.",
                )
                .action(
                    2.0,
                    "Implement Risk Tiering Framework",
                    "Develop and apply a risk classification system (high/medium/low) for all AI systems based on potential impact to individuals and society.",
                    "1-2 months",
                    "Risk management, AI teams",
                ),
            CategoryContent::new("MP.3", "Benefits & Costs Analysis", f)
                .question(
                    "Are the expected benefits of each AI system documented and measurable?",
                    "Benefits have baselines and success measures rather than narrative claims.",
                )
                .question(
                    "Are potential costs, including non-monetary and societal costs, assessed?",
                    "Assessments cover error costs, harms to individuals and environmental footprint.",
                )
                .question(
                    "Are AI benefits compared against non-AI alternatives before deployment?",
                    "The decision record shows why an AI approach is preferable to simpler options.",
                )
                .action(
                    2.0,
                    "Develop AI Cost-Benefit Analysis Template",
                    "Create standardized templates for evaluating AI system benefits against risks, including social and environmental dimensions.",
                    "1-2 months",
                    "Finance, Risk team",
                ),
            CategoryContent::new("MP.4", "Risk & Impact Identification", f)
                .question(
                    "Are AI impact assessments performed before deployment?",
                    "Assessments cover bias, data quality, safety and rights impacts, with sign-off before launch.",
                )
                .question(
                    "Are risks from training data, including provenance and representativeness, identified?",
                    "Data sheets record sources, consent basis, known gaps and populations under-represented.",
                )
                .question(
                    "Are adversarial and security threats to AI systems modeled?",
                    "Threat models include data poisoning, evasion, prompt injection and model extraction.",
                )
                .action(
                    2.0,
                    "Conduct Comprehensive AI Impact Assessments",
                    "Perform systematic impact assessments covering bias, data quality, adversarial risks, and societal impacts for all high-risk AI systems.",
                    "1-3 months",
                    "Data science, Legal, Ethics",
                )
                .action(
                    3.0,
                    "Implement AI Threat Modeling",
                    "Conduct adversarial threat modeling for AI systems, including data poisoning, evasion attacks, and model manipulation scenarios.",
                    "2-4 months",
                    "Security team, AI engineers",
                ),
            CategoryContent::new("MP.5", "Stakeholder Impact Assessment", f)
                .question(
                    "Are the individuals and groups affected by each AI system identified?",
                    "Affected parties include indirect stakeholders, not only direct users.",
                )
                .question(
                    "Are differential impacts on vulnerable or marginalized populations assessed?",
                    "Assessments consider disparate error rates and access barriers for specific groups.",
                )
                .question(
                    "Is the likelihood and magnitude of each identified impact estimated?",
                    "Impacts are scored on a documented scale so they can be compared and prioritized.",
                )
                .action(
                    2.0,
                    "Map and Assess Stakeholder Impacts",
                    "Identify all stakeholders affected by AI systems and assess differential impacts, with special attention to vulnerable populations.",
                    "1-3 months",
                    "Product, DEI team, Community outreach",
                ),
        ]
    }
}
