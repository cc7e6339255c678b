// Browser-side constants for the mounted views.

// Contributions endpoint, queried as `?userName=<id>`
pub const CONTRIBUTIONS_ENDPOINT: &str = "/api/github-contributions";

// DOM ids and labels
pub const CELL_ID_PREFIX: &str = "cell-"; // followed by `{week}-{day}`
pub const FAILED_TO_LOAD: &str = "Failed to load contributions";
pub const RESET_LABEL: &str = "Reset";
pub const LOADING_CLASS: &str = "animate-pulse";

// Styling
pub const COLOR_TRANSITION: &str = "background-color 300ms"; // cells ease between ramp steps
pub const PLACEHOLDER_OPACITY: &str = "0.5";
pub const CONTROLS_MARGIN_PX: f32 = 48.0; // space between grid and slider row

// Slider
pub const SLIDER_MIN: f32 = 0.0;
