// Render-side tuning constants for the blueprint background.

// Static background grid
pub const GRID_CELL_PX: f64 = 100.0;
pub const GRID_STROKE: &str = "rgba(59, 130, 246, 0.03)";
pub const GRID_LINE_WIDTH: f64 = 1.0;

// Nodes and tags
pub const NODE_FILL_ALPHA: f64 = 0.6;
pub const TAG_FONT: &str = "8px \"Fira Code\", monospace";
pub const TAG_OFFSET_X: f64 = 8.0; // px right of the node square
pub const TAG_OFFSET_Y: f64 = 3.0;

// Connections
pub const CONNECTION_LINE_WIDTH: f64 = 1.0;

// Circuit bursts
pub const BURST_LINE_WIDTH: f64 = 2.0;
pub const BURST_SHADOW_BLUR: f64 = 4.0;

// Pointer highlight gradient stops
pub const POINTER_GLOW_CENTER: &str = "rgba(59, 130, 246, 0.05)";
pub const POINTER_GLOW_EDGE: &str = "rgba(59, 130, 246, 0)";

// DOM
pub const CANVAS_ELEMENT_ID: &str = "blueprint-canvas";
