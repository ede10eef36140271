///
/// Settings for the renderer
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererOptions {
    /// The translation (in pixels) applied to draws that request a fudging offset
    pub fudge_factor: f32,

    /// If false, every piece of GL state is re-sent for every draw
    pub cache_state: bool,

    /// If false, only the mesh is checked before drawing (the bounds and the program/descriptor match are trusted)
    pub validate: bool,

    /// Log every command generated (at trace level)
    pub log_commands: bool
}

impl RendererOptions {
    ///
    /// Reads options from a JSON object (missing fields take their default values)
    ///
    pub fn from_json(json: &str) -> Result<RendererOptions, serde_json::Error> {
        serde_json::from_str(json)
    }

    ///
    /// Writes these options as JSON
    ///
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for RendererOptions {
    fn default() -> RendererOptions {
        RendererOptions {
            fudge_factor:   0.0656,
            cache_state:    true,
            validate:       true,
            log_commands:   false
        }
    }
}
