//! Display names for every composite code.

use crate::shape::CompositeCode;

/// Fixed catalog of composite codes and the solid they form.
pub const CATALOG: [(CompositeCode, &str); 6] = [
    (CompositeCode::CONE, "Cone"),
    (CompositeCode::PRISM, "Prism"),
    (CompositeCode::CYLINDER, "Cylinder"),
    (CompositeCode::SPHERE, "Sphere"),
    (CompositeCode::CUBE, "Cube"),
    (CompositeCode::PYRAMID, "Pyramid"),
];

/// Returns the display name for a code.
pub fn display_name(code: CompositeCode) -> &'static str {
    CATALOG
        .iter()
        .find(|(entry, _)| *entry == code)
        .map(|(_, name)| *name)
        .unwrap_or("Unknown")
}

impl CompositeCode {
    /// Display name of the solid this code forms.
    pub fn display_name(self) -> &'static str {
        display_name(self)
    }
}
