//! # Field Catalog
//!
//! Static lookups from appraisal form types to report sections ("categories"),
//! and from categories to the field labels the model is asked to fill in.
//! Everything here is immutable data; lookups never allocate.

pub mod fields;

use crate::errors::ExtractError;
use fields::*;

/// The sales comparison grid: one row set for the subject and each comparable sale.
pub const SALES_GRID: &str = "SALES_GRID";
/// The comparable rent schedule grid (form 1007).
pub const RENT_SCHEDULE_GRID: &str = "RENT_SCHEDULE_GRID";

/// Ordinary (non-grid) categories and their field lists.
pub const CATEGORY_FIELDS: &[(&str, &[&str])] = &[
    ("SUBJECT", SUBJECT_FIELDS),
    ("CONTRACT", CONTRACT_FIELDS),
    ("NEIGHBORHOOD", NEIGHBORHOOD_FIELDS),
    ("SITE", SITE_FIELDS),
    ("IMPROVEMENTS", IMPROVEMENTS_FIELDS),
    ("RECONCILIATION", RECONCILIATION_FIELDS),
    ("COST_APPROACH", COST_APPROACH_FIELDS),
    ("INCOME_APPROACH", INCOME_APPROACH_FIELDS),
    (
        "RENT_SCHEDULE_RECONCILIATION",
        RENT_SCHEDULE_RECONCILIATION_FIELDS,
    ),
    ("PUD_INFO", PUD_INFO_FIELDS),
    ("CERTIFICATION", CERTIFICATION_FIELDS),
    ("ADDENDUM", ADDENDUM_FIELDS),
    ("SALES_TRANSFER", SALES_TRANSFER_FIELDS),
    ("UNIFORM_REPORT", UNIFORM_REPORT_FIELDS),
    ("APPRAISAL_ID", APPRAISAL_ID_FIELDS),
    ("MARKET_CONDITIONS", MARKET_CONDITIONS_FIELDS),
    ("CONDO", CONDO_FIELDS),
    ("IMAGE_ANALYSIS", IMAGE_ANALYSIS_FIELDS),
    ("PRIOR_SALE_HISTORY", PRIOR_SALE_HISTORY_FIELDS),
    ("PROJECT_SITE", PROJECT_SITE_FIELDS),
    ("PROJECT_INFO", PROJECT_INFO_FIELDS),
    ("PROJECT_ANALYSIS", PROJECT_ANALYSIS_FIELDS),
    ("UNIT_DESCRIPTIONS", UNIT_DESCRIPTIONS_FIELDS),
    ("DATA_CONSISTENCY", DATA_CONSISTENCY_FIELDS),
];

/// Categories offered for each known form type, in report order.
pub const FORM_TYPE_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "1004",
        &[
            "SUBJECT",
            "CONTRACT",
            "NEIGHBORHOOD",
            "SITE",
            "IMPROVEMENTS",
            SALES_GRID,
            "SALES_TRANSFER",
            "RECONCILIATION",
            "COST_APPROACH",
            "INCOME_APPROACH",
            "PUD_INFO",
            "MARKET_CONDITIONS",
            "CONDO",
            "CERTIFICATION",
            "ADDENDUM",
            "UNIFORM_REPORT",
            "APPRAISAL_ID",
            "IMAGE_ANALYSIS",
            "DATA_CONSISTENCY",
        ],
    ),
    (
        "1073",
        &[
            "SUBJECT",
            "CONTRACT",
            "NEIGHBORHOOD",
            "PROJECT_SITE",
            "PROJECT_INFO",
            "PROJECT_ANALYSIS",
            "UNIT_DESCRIPTIONS",
            "PRIOR_SALE_HISTORY",
            SALES_GRID,
            "SALES_TRANSFER",
            "RECONCILIATION",
            "COST_APPROACH",
            "INCOME_APPROACH",
            "CONDO",
            "CERTIFICATION",
            "ADDENDUM",
            "UNIFORM_REPORT",
            "APPRAISAL_ID",
            "IMAGE_ANALYSIS",
            "DATA_CONSISTENCY",
        ],
    ),
    (
        "1007",
        &[
            "SUBJECT",
            "CONTRACT",
            "NEIGHBORHOOD",
            "SITE",
            "IMPROVEMENTS",
            SALES_GRID,
            "SALES_TRANSFER",
            RENT_SCHEDULE_GRID,
            "RENT_SCHEDULE_RECONCILIATION",
            "RECONCILIATION",
            "COST_APPROACH",
            "INCOME_APPROACH",
            "PUD_INFO",
            "MARKET_CONDITIONS",
            "CONDO",
            "CERTIFICATION",
            "ADDENDUM",
            "UNIFORM_REPORT",
            "APPRAISAL_ID",
            "IMAGE_ANALYSIS",
            "DATA_CONSISTENCY",
        ],
    ),
];

/// Fallback category list for form types not in [`FORM_TYPE_CATEGORIES`].
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "SUBJECT",
    "CONTRACT",
    "NEIGHBORHOOD",
    "SITE",
    "IMPROVEMENTS",
    SALES_GRID,
    "SALES_TRANSFER",
    "RECONCILIATION",
    "COST_APPROACH",
    "INCOME_APPROACH",
    "PUD_INFO",
    "MARKET_CONDITIONS",
    "CONDO",
    "CERTIFICATION",
    "ADDENDUM",
    "UNIFORM_REPORT",
    "APPRAISAL_ID",
    "IMAGE_ANALYSIS",
    "DATA_CONSISTENCY",
];

/// The two categories extracted as one object per comparable entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKind {
    Sales,
    RentSchedule,
}

impl GridKind {
    /// Identifies a grid category by its (upper-case) name.
    pub fn from_category(category: &str) -> Option<Self> {
        match category {
            SALES_GRID => Some(GridKind::Sales),
            RENT_SCHEDULE_GRID => Some(GridKind::RentSchedule),
            _ => None,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            GridKind::Sales => SALES_GRID,
            GridKind::RentSchedule => RENT_SCHEDULE_GRID,
        }
    }

    /// The per-row field labels shared by the subject and every comparable.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            GridKind::Sales => SALES_GRID_FIELDS,
            GridKind::RentSchedule => RENT_SCHEDULE_GRID_FIELDS,
        }
    }

    /// Key prefix of the comparable entries, numbered from `#1`.
    pub fn entry_prefix(&self) -> &'static str {
        match self {
            GridKind::Sales => "COMPARABLE SALE",
            GridKind::RentSchedule => "COMPARABLE RENT",
        }
    }

    /// Name of the form section the grid is printed in.
    pub fn report_section(&self) -> &'static str {
        match self {
            GridKind::Sales => "SALES COMPARISON APPROACH",
            GridKind::RentSchedule => "COMPARABLE RENT SCHEDULE",
        }
    }

    /// What a comparable entry is called in prompts.
    pub fn entry_label(&self) -> &'static str {
        match self {
            GridKind::Sales => "Comparable Sale",
            GridKind::RentSchedule => "Comparable Rent",
        }
    }

    pub fn section_header(&self) -> &'static str {
        match self {
            GridKind::Sales => "SALES GRID",
            GridKind::RentSchedule => "RENT SCHEDULE GRID",
        }
    }
}

/// Returns the categories for `form_type`, or [`DEFAULT_CATEGORIES`] when the
/// form type is not recognised.
pub fn resolve_categories(form_type: &str) -> &'static [&'static str] {
    let form_type = form_type.trim();
    FORM_TYPE_CATEGORIES
        .iter()
        .find(|(name, _)| *name == form_type)
        .map(|(_, categories)| *categories)
        .unwrap_or(DEFAULT_CATEGORIES)
}

/// Returns the field labels of a category. Grid categories yield their per-row list.
pub fn fields_for(category: &str) -> Result<&'static [&'static str], ExtractError> {
    if let Some(grid) = GridKind::from_category(category) {
        return Ok(grid.fields());
    }
    CATEGORY_FIELDS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, fields)| *fields)
        .ok_or_else(|| ExtractError::UnknownCategory(category.to_string()))
}

/// Every category the catalog knows, ordinary ones first, then the grids.
pub fn all_categories() -> impl Iterator<Item = &'static str> {
    CATEGORY_FIELDS
        .iter()
        .map(|(name, _)| *name)
        .chain([SALES_GRID, RENT_SCHEDULE_GRID])
}

/// The label used in the raw audit log for a category's section.
pub fn section_header(category: &str) -> &str {
    match GridKind::from_category(category) {
        Some(grid) => grid.section_header(),
        None => category,
    }
}

/// Trims and upper-cases a user-supplied category name.
pub fn normalize_category(category: &str) -> String {
    category.trim().to_uppercase()
}
