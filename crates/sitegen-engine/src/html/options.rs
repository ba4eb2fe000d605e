use serde::{Deserialize, Serialize};

/// Rendering switches. The default reproduces the plain behaviour: parent
/// attributes dropped, attribute values verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Render attributes on parent tags too (`<div class="x">`).
    pub render_parent_attributes: bool,
    /// Escape attribute values for a double-quoted attribute context.
    pub escape_attribute_values: bool,
}
