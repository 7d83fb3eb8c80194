pub mod leads_csv;
pub mod leads_model;
pub mod leads_query;
pub mod leads_service;
pub mod leads_traits;

#[cfg(test)]
mod leads_model_tests;

pub use leads_csv::export_csv;
pub use leads_model::*;
pub use leads_query::{apply_query, LeadFilters, LeadQuery, ScoreBucket, Sort, SortDirection, SortField};
pub use leads_service::LeadService;
pub use leads_traits::{LeadRepositoryTrait, LeadServiceTrait};
