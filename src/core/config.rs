/// Layer colors for the blueprint. CSS color strings are handed to the
/// Canvas2D renderer as-is; the connection line color is kept as raw RGB so
/// its alpha can be resolved per line from inter-node distance.
#[derive(Clone, Debug)]
pub struct Palette {
    pub node: &'static str,
    pub line_rgb: [u8; 3],
    pub pulse: &'static str,
    pub text: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            node: "#3B82F6",
            line_rgb: [59, 130, 246],
            pulse: "#00D4FF",
            text: "rgba(59, 130, 246, 0.4)",
        }
    }
}

/// Decorative labels drawn next to a minority of nodes.
pub const DEFAULT_TAGS: &[&str] = &[
    "0xFC", "ACK_OK", "P_OUT", "MTU_1500", "UDP", "SYNC", "LOAD_BAL", "SEC_UP",
];

#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Number of simulated nodes; constant between resizes.
    pub node_count: usize,
    /// Max pixel distance at which two nodes are linked and burst-eligible.
    pub connection_dist: f32,
    /// Max per-axis velocity magnitude; each axis samples from ±half this.
    pub node_speed: f32,
    /// Per-pair, per-frame burst spawn probability.
    pub burst_frequency: f64,
    pub palette: Palette,
    pub tags: &'static [&'static str],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            node_count: 80,
            connection_dist: 200.0,
            node_speed: 0.3,
            burst_frequency: 0.0001,
            palette: Palette::default(),
            tags: DEFAULT_TAGS,
        }
    }
}
