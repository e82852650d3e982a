//! NIST AI RMF Taxonomy for the maturity self-assessment.
//!
//! This crate holds every read-only deployment artifact the assessment engine
//! consumes:
//!
//! - **Functions**: Govern, Map, Measure, Manage
//! - **Categories**: 19 subdivisions (GV.1 … MG.4), the unit of action generation
//! - **Questions**: 62 questions answered on a 1–5 scale
//! - **Playbook**: remediation templates per category
//! - **Industries**: regulations and recommendations per sector
//!
//! # Key Components
//!
//! - [`TaxonomyRegistry`]: Precomputed index over the hierarchy
//! - [`FunctionCatalog`]: Trait providing a function's authored content
//! - [`Playbook`]: Action templates keyed by category
//! - [`IndustryCatalog`]: Industry profiles keyed by id
//!
//! # Example
//!
//! ```
//! use rmf_taxonomy::{RmfFunction, TaxonomyRegistry};
//!
//! let registry = TaxonomyRegistry::nist_ai_rmf().unwrap();
//! assert_eq!(registry.total_question_count(), 62);
//!
//! let govern = registry.categories_of(RmfFunction::Govern).unwrap();
//! assert_eq!(govern[0].id, "GV.1");
//! ```

pub mod catalog;
pub mod error;
pub mod industries;
pub mod playbook;
pub mod registry;
pub mod types;

// Re-export main types
pub use catalog::{CategoryContent, FunctionCatalog};
pub use error::{Result, TaxonomyError};
pub use industries::{IndustryCatalog, IndustryProvider};
pub use playbook::Playbook;
pub use registry::TaxonomyRegistry;
pub use types::*;
