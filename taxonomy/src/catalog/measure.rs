//! Measure: analyzing, assessing and tracking AI risk.

use crate::catalog::{CategoryContent, FunctionCatalog};
use crate::types::{Function, RmfFunction};

/// Provider for the Measure function.
pub struct MeasureCatalog;

impl FunctionCatalog for MeasureCatalog {
    fn function(&self) -> Function {
        Function::new(
            RmfFunction::Measure,
            "Employ quantitative and qualitative tools to analyze, assess and monitor AI risk.",
        )
    }

    fn categories(&self) -> Vec<CategoryContent> {
        let f = RmfFunction::Measure;
        vec![
            CategoryContent::new("MS.1", "Metrics & Methodologies", f)
                .question(
                    "Are metrics defined for AI trustworthiness characteristics such as accuracy, fairness and robustness?",
                    "Each system has named metrics with thresholds agreed before deployment.",
                )
                .question(
                    "Are measurement methods documented and repeatable?",
                    "Another team could reproduce the measurement from the documented method and data.",
                )
                .question(
                    "Are baseline measurements recorded for each AI system?",
                    "Baselines at launch allow drift and degradation to be detected later.",
                )
                .question(
                    "Are risks that cannot yet be measured tracked explicitly?",
                    "Unmeasured risks are recorded with an owner and a plan rather than ignored.",
                )
                .action(
                    2.0,
                    "Define AI Trustworthiness Metrics",
                    "Establish KPIs for AI trustworthiness including accuracy, robustness, fairness (demographic parity, equalized odds), and safety metrics.",
                    "1-2 months",
                    "Data science, Quality assurance",
                )
                .action(
                    3.0,
                    "Establish Performance Baselines",
                    "Document baseline measurements for all AI systems to enable trend analysis and drift detection.",
                    "1-2 months",
                    "ML engineering",
                ),
            CategoryContent::new("MS.2", "AI System Evaluation", f)
                .question(
                    "Are AI systems tested, evaluated, verified and validated (TEVV) before deployment?",
                    "Test plans and results are documented and reviewed by someone independent of the builders.",
                )
                .question(
                    "Are AI systems evaluated for bias across relevant demographic groups?",
                    "Fairness results are broken down by group with documented acceptance thresholds.",
                )
                .question(
                    "Are high-risk AI systems red-teamed or adversarially tested?",
                    "Red-team findings are tracked to remediation before and after launch.",
                )
                .question(
                    "Are privacy and security risks of AI systems evaluated?",
                    "Evaluations cover membership inference, data leakage and access control on model endpoints.",
                )
                .action(
                    2.0,
                    "Implement TEVV Program",
                    "Establish formal Testing, Evaluation, Verification, and Validation processes for AI systems with documented test plans and results.",
                    "2-4 months",
                    "QA, ML engineering, External evaluators",
                )
                .action(
                    3.0,
                    "Conduct Red Team Testing",
                    "Implement adversarial red-teaming exercises for high-risk AI systems to test robustness and identify vulnerabilities.",
                    "2-3 months",
                    "Security team, External red team",
                ),
            CategoryContent::new("MS.3", "Transparency & Explainability", f)
                .question(
                    "Can the outputs of AI systems be explained to the people they affect?",
                    "Explanations are tailored to the audience and available at the point of decision.",
                )
                .question(
                    "Are model cards, data sheets or equivalent transparency documents maintained?",
                    "Documents are versioned alongside the model and updated on retraining.",
                )
                .question(
                    "Are users informed when they are interacting with or affected by an AI system?",
                    "Disclosure is clear, timely and tested with real users.",
                )
                .action(
                    2.0,
                    "Implement Explainability Framework",
                    "Deploy explainability tools (SHAP, LIME, etc.) and create user-appropriate explanations for AI-driven decisions.",
                    "2-4 months",
                    "ML engineering, UX team",
                )
                .action(
                    3.0,
                    "Create Transparency Documentation",
                    "Develop model cards, data sheets, and transparency reports for all AI systems, tailored to different stakeholder audiences.",
                    "1-3 months",
                    "Documentation team, Data science",
                ),
            CategoryContent::new("MS.4", "Documentation & Monitoring", f)
                .question(
                    "Are deployed AI systems monitored continuously for performance and drift?",
                    "Dashboards and alerts cover model quality, input drift and anomalous behavior.",
                )
                .question(
                    "Are monitoring thresholds tied to defined response actions?",
                    "Crossing a threshold triggers a documented response such as rollback or retraining.",
                )
                .question(
                    "Is feedback from end users and operators captured and analyzed?",
                    "Field feedback is triaged and linked to measurement and retraining decisions.",
                )
                .action(
                    2.0,
                    "Deploy Continuous AI Monitoring",
                    "Implement real-time monitoring dashboards for AI model performance, data drift, and anomaly detection with alerting capabilities.",
                    "2-4 months",
                    "MLOps, Infrastructure team",
                )
                .action(
                    3.0,
                    "Build Drift Detection Pipeline",
                    "Implement automated model drift detection with defined thresholds, alerts, and retraining triggers.",
                    "2-3 months",
                    "ML engineering, DevOps",
                ),
        ]
    }
}
