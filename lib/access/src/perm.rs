//! Well-known permission tokens.
//!
//! Permissions are opaque string tokens; these constants exist so pages,
//! the navigation catalog, and the role registry agree on spelling. Page
//! tokens double as navigation keys. Unknown tokens always evaluate to
//! deny, so a typo here fails safe rather than granting anything.

// Admin pages
pub const ADMIN_DASHBOARD: &str = "admin_dashboard";
pub const USER_MANAGEMENT: &str = "user_management";
pub const MODEL_MANAGEMENT: &str = "model_management";
pub const ADMIN_REPORTS: &str = "admin_reports";
pub const SETTINGS: &str = "settings";
pub const KNOWLEDGE_ADMIN: &str = "knowledge_admin";

// Manager pages
pub const EXECUTIVE_DASHBOARD: &str = "executive_dashboard";
pub const SEGMENTATION_ANALYTICS: &str = "segmentation_analytics";
pub const CAMPAIGN_APPROVALS: &str = "campaign_approvals";
pub const CUSTOMER_OVERVIEW: &str = "customer_overview";
pub const REPORTS_VISUALIZATION: &str = "reports_visualization";
pub const MODEL_INSIGHTS: &str = "model_insights";

// Analyst pages
pub const CUSTOMER_SEGMENTS: &str = "customer_segments";
pub const BULK_PREDICTIONS: &str = "bulk_predictions";
pub const CAMPAIGN_MANAGEMENT: &str = "campaign_management";
pub const ANALYTICS_INSIGHTS: &str = "analytics_insights";
pub const KNOWLEDGE_BASE: &str = "knowledge_base";
pub const ANALYST_REPORTS: &str = "analyst_reports";

// Officer pages
pub const CUSTOMERS: &str = "customers";
pub const CUSTOMER_DETAILS: &str = "customer_details";
pub const CAMPAIGN_EXECUTION: &str = "campaign_execution";
pub const PREDICTIONS: &str = "predictions";
pub const PERFORMANCE_METRICS: &str = "performance_metrics";
pub const OFFICER_KNOWLEDGE: &str = "officer_knowledge";
pub const ALERTS_RECOMMENDATIONS: &str = "alerts_recommendations";
pub const ANALYTICS_DASHBOARD: &str = "analytics_dashboard";

// Action permissions (checked by pages before exposing controls)
pub const MANAGE_TARGETS: &str = "manage_targets";
pub const MANAGE_CAMPAIGNS: &str = "manage_campaigns";
pub const EXPORT_EXECUTIVE_DATA: &str = "export_executive_data";
pub const EXPORT_ANALYTICS_DATA: &str = "export_analytics_data";
pub const LOG_INTERACTIONS: &str = "log_interactions";
pub const UPDATE_CUSTOMER_STATUS: &str = "update_customer_status";
