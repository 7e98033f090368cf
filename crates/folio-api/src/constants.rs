//! API-wide constants

/// Versioned prefix of every JSON route (health probes live outside it)
pub const API_PREFIX: &str = "/api/v0";

/// Multipart field that selects the admin action
pub const ACTION_FIELD: &str = "_action";

/// File field carrying the user picture
pub const USER_IMAGE_FIELD: &str = "image_file";

/// File field carrying a project picture
pub const PROJECT_IMAGE_FIELD: &str = "project_image_file";
