// Simulation tuning constants shared with the host-side tests.

// Node creation
pub const NODE_SIZE_MIN: f32 = 1.0; // px, square side
pub const NODE_SIZE_MAX: f32 = 4.0;
pub const TAG_PROBABILITY: f32 = 0.15; // chance a node carries a tag at all

// Tag opacity oscillation
pub const TAG_ALPHA_MIN: f32 = 0.1;
pub const TAG_ALPHA_MAX: f32 = 0.6;
pub const TAG_ALPHA_STEP: f32 = 0.005; // per frame

// Connection lines
pub const CONNECTION_ALPHA_MAX: f32 = 0.15; // at zero inter-node distance

// Circuit bursts
pub const BURST_SPEED_MIN: f32 = 0.005; // progress per frame
pub const BURST_SPEED_MAX: f32 = 0.015;
pub const BURST_TAIL: f32 = 0.2; // trailing fraction of the drawn segment

// Pointer highlight
pub const POINTER_RADIUS: f32 = 200.0; // px
