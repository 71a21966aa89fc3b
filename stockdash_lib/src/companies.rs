//! Company directory.
//!
//! The default list is compiled in from `seed_data/companies.yml`; a list
//! fetched from the backend goes through the same checks via
//! [`validate_companies`].

use serde::Deserialize;
use std::collections::HashSet;
use stockdash_api::types::Company;
use thiserror::Error;

use crate::validation::validate_symbol;

#[derive(Error, Debug)]
pub enum CompanyListError {
    #[error("Failed to parse company list YAML: {0}")]
    YamlParse(#[from] serde_yml::Error),
    #[error("Duplicate symbol in company list: {0}")]
    DuplicateSymbol(String),
    #[error("Company {symbol} has an empty {field}")]
    EmptyField { symbol: String, field: &'static str },
    #[error("Invalid symbol in company list: {0}")]
    InvalidSymbol(String),
}

/// Top-level structure of the company list YAML file.
#[derive(Deserialize, Debug)]
struct CompanyListFile {
    companies: Vec<Company>,
}

/// Checks and normalizes a company list.
///
/// Symbols are upper-cased; names and sectors are trimmed and must be
/// non-empty. Order is preserved.
pub fn validate_companies(companies: Vec<Company>) -> Result<Vec<Company>, CompanyListError> {
    let mut seen = HashSet::new();
    let mut validated = Vec::with_capacity(companies.len());

    for mut company in companies {
        company.symbol = validate_symbol(&company.symbol)
            .map_err(|_| CompanyListError::InvalidSymbol(company.symbol.clone()))?;

        if !seen.insert(company.symbol.clone()) {
            return Err(CompanyListError::DuplicateSymbol(company.symbol));
        }

        company.name = company.name.trim().to_string();
        if company.name.is_empty() {
            return Err(CompanyListError::EmptyField {
                symbol: company.symbol,
                field: "name",
            });
        }
        company.sector = company.sector.trim().to_string();
        if company.sector.is_empty() {
            return Err(CompanyListError::EmptyField {
                symbol: company.symbol,
                field: "sector",
            });
        }

        validated.push(company);
    }

    Ok(validated)
}

pub fn parse_companies(yaml_content: &str) -> Result<Vec<Company>, CompanyListError> {
    let file: CompanyListFile = serde_yml::from_str(yaml_content)?;
    validate_companies(file.companies)
}

/// Loads the compiled-in company list.
pub fn load_companies() -> Result<Vec<Company>, CompanyListError> {
    let yaml_content = include_str!("../../seed_data/companies.yml");
    parse_companies(yaml_content)
}

/// Distinct sector names in first-seen order.
pub fn sectors(companies: &[Company]) -> Vec<String> {
    let mut seen = HashSet::new();
    companies
        .iter()
        .filter(|c| seen.insert(c.sector.as_str()))
        .map(|c| c.sector.clone())
        .collect()
}
